//! Wall-clock source

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Source of local wall-clock time for timestamps and date suffixes.
pub trait Clock: Send + Sync + fmt::Debug + 'static {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
