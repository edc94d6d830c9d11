//! File logger configuration

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use daylog_logger::{Clock, ColorMode, SequenceCounter, SystemClock};

use crate::error::{Error, Result};

/// Permission bits for newly created log files, before the umask.
pub const DEFAULT_FILE_MODE: u32 = 0o666;

/// Settings for a [`FileLogger`](crate::FileLogger).
#[derive(Clone)]
pub struct FileLoggerConfig {
    /// Base path. Files are named `<prefix>.<YYYY-MM-DD>`.
    pub prefix: PathBuf,
    /// Wrap lines in level colors.
    pub color: ColorMode,
    /// Unix permission bits for created files. Ignored elsewhere.
    pub mode: u32,
    /// Create the prefix's parent directory if it is missing.
    pub create_dirs: bool,
    /// Time source for timestamps and date suffixes.
    pub clock: Arc<dyn Clock>,
    /// Id source.
    pub sequence: Arc<SequenceCounter>,
}

impl FileLoggerConfig {
    /// Start building a configuration.
    pub fn builder() -> FileLoggerConfigBuilder {
        FileLoggerConfigBuilder::new()
    }
}

impl fmt::Debug for FileLoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLoggerConfig")
            .field("prefix", &self.prefix)
            .field("color", &self.color)
            .field("mode", &format_args!("{:o}", self.mode))
            .field("create_dirs", &self.create_dirs)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FileLoggerConfig`].
#[derive(Debug, Default)]
pub struct FileLoggerConfigBuilder {
    prefix: Option<PathBuf>,
    color: ColorMode,
    mode: Option<u32>,
    create_dirs: bool,
    clock: Option<Arc<dyn Clock>>,
    sequence: Option<Arc<SequenceCounter>>,
}

impl FileLoggerConfigBuilder {
    /// Create a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path. Required.
    pub fn prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the color mode. Defaults to [`ColorMode::Off`].
    pub const fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Set the permission bits for new files. Defaults to [`DEFAULT_FILE_MODE`].
    pub const fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Create the parent directory of the prefix on open.
    pub const fn create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    /// Use `clock` instead of the system clock.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Draw ids from `sequence` instead of the process-wide counter.
    pub fn sequence(mut self, sequence: Arc<SequenceCounter>) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] if no prefix was given. Any prefix is
    /// accepted as-is; unusable ones fail when the file is opened.
    pub fn build(self) -> Result<FileLoggerConfig> {
        let prefix = self
            .prefix
            .ok_or_else(|| Error::Configuration("log file prefix is required".into()))?;

        Ok(FileLoggerConfig {
            prefix,
            color: self.color,
            mode: self.mode.unwrap_or(DEFAULT_FILE_MODE),
            create_dirs: self.create_dirs,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            sequence: self.sequence.unwrap_or_else(SequenceCounter::global),
        })
    }
}
