//! Error types for file-based logging

use std::io;
use std::path::PathBuf;

/// Result type for file logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during file logging
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Could not open or create a dated log file
    #[error("failed to open log file {path}: {source}")]
    Open {
        /// The dated path that failed to open
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Failed to create the directory holding the log files
    #[error("failed to create log directory {path}: {source}")]
    CreateDirectory {
        /// The directory that failed to be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// I/O on the open log file failed
    #[error("{0}: {1}")]
    Io(&'static str, #[source] io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}
