//! Leveled logger core.
//!
//! Every logging call becomes one line of the form
//!
//! ```text
//! #<id> <YYYY-MM-DD HH:MM:SS> ▶ <LVL> <message>
//! ```
//!
//! where `<id>` comes from a monotonically increasing [`SequenceCounter`]
//! shared by all loggers in the process and `<LVL>` is the first three
//! characters of the [`Level`] name. With [`ColorMode::On`] the line is
//! wrapped in the level's ANSI color and a reset.
//!
//! The [`Logger`] facade writes to any [`Sink`]; the `daylog-logger-file`
//! crate provides the date-rotating file sink.
//!
//! ```
//! # #[cfg(feature = "test-support")]
//! # {
//! use daylog_logger::test_support::MemorySink;
//! use daylog_logger::{ColorMode, Logger};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone(), ColorMode::Off);
//! daylog_logger::info!(logger, "count={}", 5).unwrap();
//! assert!(sink.contains("INF count=5"));
//! # }
//! ```

#![warn(missing_docs, unreachable_pub)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod clock;
mod color;
mod error;
mod level;
mod logger;
mod macros;
mod record;
mod sequence;
mod sink;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, SystemClock};
pub use color::{AnsiColor, ColorMode, ColorTable, RESET};
pub use error::ParseLevelError;
pub use level::Level;
pub use logger::Logger;
pub use record::{LogRecord, TIMESTAMP_FORMAT};
pub use sequence::SequenceCounter;
pub use sink::Sink;
