//! Test support utilities
//!
//! In-memory sink and a settable clock for exercising loggers without
//! touching the file system or waiting for midnight. Only available with the
//! `test-support` feature.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use parking_lot::Mutex;
use thiserror::Error;

use crate::{Clock, Sink};

/// Error produced by a [`MemorySink`] told to fail.
#[derive(Debug, Error)]
#[error("memory sink rejected write")]
pub struct MemorySinkError;

#[derive(Debug, Default)]
struct Captured {
    lines: Vec<String>,
    failing: bool,
}

/// Sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a logger and
/// inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Captured>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().lines.clone()
    }

    /// Everything written, newline-terminated, as a file would hold it.
    pub fn contents(&self) -> String {
        self.inner
            .lock()
            .lines
            .iter()
            .fold(String::new(), |mut out, line| {
                out.push_str(line);
                out.push('\n');
                out
            })
    }

    /// Check if any line contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.inner.lock().lines.iter().any(|line| line.contains(text))
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn fail_writes(&self, failing: bool) {
        self.inner.lock().failing = failing;
    }
}

impl Sink for MemorySink {
    type Error = MemorySinkError;

    fn write_line(&self, line: &str) -> Result<(), Self::Error> {
        let mut captured = self.inner.lock();
        if captured.failing {
            return Err(MemorySinkError);
        }
        captured.lines.push(line.to_string());
        Ok(())
    }

    fn flush(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock frozen at the given local date and time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid date and time.
    pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .expect("valid date and time");
        Self::new(now)
    }

    /// Jump to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move forward (or back, for a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
