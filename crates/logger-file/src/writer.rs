//! Append-only writer for `<prefix>.<YYYY-MM-DD>` files

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use daylog_logger::{Clock, Sink, SystemClock};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::config::{DEFAULT_FILE_MODE, FileLoggerConfig};
use crate::error::{Error, Result};
use crate::path::{date_suffix, dated_path};

/// Writes lines to the file for the current local date.
///
/// The date is checked on every write. When it no longer matches the open
/// file, the old file is closed and `<prefix>.<today>` is opened in append
/// mode. If that open fails the writer holds no file and the next write
/// tries again.
#[derive(Debug)]
pub struct RotatingFileSink {
    prefix: PathBuf,
    mode: u32,
    clock: Arc<dyn Clock>,
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    suffix: String,
    file: Option<File>,
}

impl RotatingFileSink {
    /// Open today's file for `prefix` using the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened or created.
    pub fn open(prefix: impl Into<PathBuf>) -> Result<Self> {
        Self::with_clock(prefix, Arc::new(SystemClock))
    }

    /// Open today's file for `prefix`, reading dates from `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if the file cannot be opened or created.
    pub fn with_clock(prefix: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::create(prefix.into(), DEFAULT_FILE_MODE, clock)
    }

    /// Open today's file as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CreateDirectory`] if `create_dirs` is set and the
    /// parent directory cannot be created, or [`Error::Open`] if the file
    /// cannot be opened.
    pub fn with_config(config: &FileLoggerConfig) -> Result<Self> {
        if config.create_dirs {
            if let Some(parent) = config.prefix.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        Self::create(config.prefix.clone(), config.mode, Arc::clone(&config.clock))
    }

    fn create(prefix: PathBuf, mode: u32, clock: Arc<dyn Clock>) -> Result<Self> {
        let suffix = date_suffix(clock.now().date());
        let path = dated_path(&prefix, &suffix);
        let file = open_append(&path, mode)?;
        debug!("Opened log file {}", path.display());

        Ok(Self {
            prefix,
            mode,
            clock,
            state: Mutex::new(State {
                suffix,
                file: Some(file),
            }),
        })
    }

    /// Append `line` and a newline to the current file, rotating first if
    /// the date has changed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] if rotation fails, or [`Error::Io`] if the
    /// write fails.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut state = self.state.lock();

        let today = date_suffix(self.clock.now().date());
        let mut file = match state.file.take() {
            Some(file) if state.suffix == today => file,
            old => {
                let file = self.rotate(old, &state.suffix, &today)?;
                state.suffix = today;
                file
            }
        };

        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let written = file.write_all(buf.as_bytes());
        state.file = Some(file);
        written.map_err(|e| Error::Io("failed to write log line", e))
    }

    /// Flush the current file, if one is open.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the flush fails.
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if let Some(file) = state.file.as_mut() {
            file.flush()
                .map_err(|e| Error::Io("failed to flush log file", e))?;
        }
        Ok(())
    }

    /// The configured base path.
    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Date suffix of the last file opened successfully.
    pub fn current_suffix(&self) -> String {
        self.state.lock().suffix.clone()
    }

    /// Path of the last file opened successfully.
    pub fn current_path(&self) -> PathBuf {
        dated_path(&self.prefix, &self.state.lock().suffix)
    }

    /// Whether a file is currently held open.
    pub fn is_open(&self) -> bool {
        self.state.lock().file.is_some()
    }

    /// Close `old` (if any) and open the file for `to`. The caller records
    /// the new suffix only when this succeeds.
    fn rotate(&self, old: Option<File>, from: &str, to: &str) -> Result<File> {
        if let Some(old) = old {
            // Closing is best effort; a failure here must not block the new file.
            if let Err(e) = old.sync_all() {
                warn!(
                    "Failed to sync log file {}: {}",
                    dated_path(&self.prefix, from).display(),
                    e
                );
            }
        }

        let path = dated_path(&self.prefix, to);
        let file = open_append(&path, self.mode).inspect_err(|e| {
            warn!("{}", e);
        })?;

        if from == to {
            info!("Reopened log file {}", path.display());
        } else {
            info!(
                "Rotated log file from {} to {}",
                dated_path(&self.prefix, from).display(),
                path.display()
            );
        }

        Ok(file)
    }
}

impl Sink for RotatingFileSink {
    type Error = Error;

    fn write_line(&self, line: &str) -> Result<()> {
        Self::write_line(self, line)
    }

    fn flush(&self) -> Result<()> {
        Self::flush(self)
    }
}

fn open_append(path: &Path, mode: u32) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}
