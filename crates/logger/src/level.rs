//! Severity levels

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Severity of a log record.
///
/// The set is closed. Levels are ordered by convention only; nothing in the
/// crate filters on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Unrecoverable conditions. Also used by `fatal` and `panic`.
    Critical,
    /// Failed operations.
    Error,
    /// Suspicious but tolerated conditions.
    Warning,
    /// Normal but significant events.
    Notice,
    /// Progress information.
    Info,
    /// Developer detail.
    Debug,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Self; 6] = [
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Full upper-case name. This is the key into the color table.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// Three-character form used in rendered lines (`CRI`, `ERR`, ...).
    pub fn abbreviation(self) -> &'static str {
        let name = self.as_str();
        &name[..name.len().min(3)]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_are_first_three_chars() {
        let abbrevs: Vec<_> = Level::ALL.iter().map(|l| l.abbreviation()).collect();
        assert_eq!(abbrevs, ["CRI", "ERR", "WAR", "NOT", "INF", "DEB"]);
    }

    #[test]
    fn display_uses_full_name() {
        assert_eq!(Level::Warning.to_string(), "WARNING");
        assert_eq!(format!("{:>8}", Level::Info), "    INFO");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("Notice".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "TRACE".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level: TRACE");
        assert!("CRI".parse::<Level>().is_err());
    }
}
