//! Log record type and its line rendering

use std::fmt;

use chrono::NaiveDateTime;

use crate::Level;

/// `chrono` format of the timestamp embedded in every rendered line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single log event.
///
/// Built once per logging call, rendered, then dropped. Fields are read-only
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    id: u64,
    timestamp: String,
    level: Level,
    message: String,
}

impl LogRecord {
    /// Create a record from an already formatted timestamp.
    pub fn new(
        id: u64,
        timestamp: impl Into<String>,
        level: Level,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            timestamp: timestamp.into(),
            level,
            message: message.into(),
        }
    }

    /// Create a record stamped with `time`, at second precision.
    pub fn at(id: u64, time: NaiveDateTime, level: Level, message: impl Into<String>) -> Self {
        Self::new(id, time.format(TIMESTAMP_FORMAT).to_string(), level, message)
    }

    /// Sequence id.
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Formatted wall-clock time.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Severity.
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render as `#<id> <timestamp> ▶ <LVL> <message>`, without a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ▶ {} {}",
            self.id,
            self.timestamp,
            self.level.abbreviation(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn renders_error_line() {
        let record = LogRecord::new(7, "2024-03-01 10:00:00", Level::Error, "disk full");
        assert_eq!(record.render(), "#7 2024-03-01 10:00:00 ▶ ERR disk full");
    }

    #[test]
    fn at_formats_to_whole_seconds() {
        let time = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_milli_opt(9, 5, 3, 987)
            .unwrap();
        let record = LogRecord::at(1, time, Level::Notice, "up");
        assert_eq!(record.timestamp(), "2024-03-01 09:05:03");
        assert_eq!(record.render(), "#1 2024-03-01 09:05:03 ▶ NOT up");
    }

    #[test]
    fn render_has_no_trailing_newline() {
        let record = LogRecord::new(1, "2024-03-01 10:00:00", Level::Info, "");
        assert_eq!(record.render(), "#1 2024-03-01 10:00:00 ▶ INF ");
    }

    proptest! {
        #[test]
        fn render_keeps_fields_in_place(id in any::<u64>(), idx in 0..Level::ALL.len(), message in "[^\r\n]*") {
            let level = Level::ALL[idx];
            let record = LogRecord::new(id, "2024-03-01 10:00:00", level, message.clone());
            let line = record.render();

            let head = format!("#{id} 2024-03-01 10:00:00 ▶ {} ", level.abbreviation());
            prop_assert!(line.starts_with(&head));
            prop_assert_eq!(&line[head.len()..], message.as_str());
            prop_assert!(!line.contains('\n'));
        }
    }
}
