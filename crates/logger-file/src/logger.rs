//! Constructors for file-backed loggers

use std::path::PathBuf;
use std::sync::Arc;

use daylog_logger::{ColorMode, Logger};

use crate::config::FileLoggerConfig;
use crate::error::Result;
use crate::writer::RotatingFileSink;

/// A [`Logger`] writing to date-stamped files.
pub type FileLogger = Logger<RotatingFileSink>;

/// Create a logger writing to `<prefix>.<today>`, opening the file now.
///
/// Ids come from the process-wide counter and times from the system clock.
///
/// # Errors
///
/// Returns [`Error::Open`](crate::Error::Open) if today's file cannot be
/// opened.
pub fn new(prefix: impl Into<PathBuf>, color: ColorMode) -> Result<FileLogger> {
    from_config(FileLoggerConfig::builder().prefix(prefix).color(color).build()?)
}

/// Create a logger from a full configuration.
///
/// # Errors
///
/// See [`RotatingFileSink::with_config`].
pub fn from_config(config: FileLoggerConfig) -> Result<FileLogger> {
    let sink = RotatingFileSink::with_config(&config)?;
    Ok(Logger::new(sink, config.color)
        .with_sequence(config.sequence)
        .with_clock(Arc::clone(&config.clock)))
}
