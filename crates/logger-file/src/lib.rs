//! Date-stamped log files for `daylog-logger`.
//!
//! A [`FileLogger`] appends each line to `<prefix>.<YYYY-MM-DD>`, named for
//! the local date. The date is checked on every write, so the first write
//! after midnight closes yesterday's file and opens today's. Nothing runs in
//! the background; an idle logger keeps its old file until the next write.
//!
//! ```no_run
//! use daylog_logger::ColorMode;
//!
//! let logger = daylog_logger_file::new("/var/log/app", ColorMode::On)?;
//! daylog_logger::info!(logger, "listening on {}", 8080)?;
//! # Ok::<(), daylog_logger_file::Error>(())
//! ```

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod logger;
mod path;
mod writer;

pub use config::{DEFAULT_FILE_MODE, FileLoggerConfig, FileLoggerConfigBuilder};
pub use error::{Error, Result};
pub use logger::{FileLogger, from_config, new};
pub use path::{DATE_SUFFIX_FORMAT, date_suffix, dated_path};
pub use writer::RotatingFileSink;
