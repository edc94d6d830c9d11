//! ANSI colors keyed by level name

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::Level;

/// Escape sequence that restores the default terminal color.
pub const RESET: &str = "\x1b[0m";

/// Whether a logger wraps its lines in color escapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Plain lines.
    #[default]
    Off,
    /// Lines wrapped in the level's color and [`RESET`].
    On,
}

impl ColorMode {
    /// `true` for [`ColorMode::On`].
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Foreground colors of the base ANSI palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnsiColor {
    /// `30`
    Black = 30,
    /// `31`
    Red,
    /// `32`
    Green,
    /// `33`
    Yellow,
    /// `34`
    Blue,
    /// `35`
    Magenta,
    /// `36`
    Cyan,
    /// `37`
    White,
}

impl AnsiColor {
    /// SGR code, 30 through 37.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// `ESC[<code>m`.
    pub fn escape(self) -> String {
        format!("\x1b[{}m", self.code())
    }
}

/// Maps full level names to color escape prefixes.
///
/// Built once per process by [`ColorTable::global`] and read-only afterwards.
#[derive(Debug)]
pub struct ColorTable {
    colors: HashMap<&'static str, String>,
}

impl ColorTable {
    fn new() -> Self {
        let colors = Level::ALL
            .into_iter()
            .map(|level| (level.as_str(), Self::palette(level).escape()))
            .collect();
        Self { colors }
    }

    const fn palette(level: Level) -> AnsiColor {
        match level {
            Level::Critical => AnsiColor::Magenta,
            Level::Error => AnsiColor::Red,
            Level::Warning => AnsiColor::Yellow,
            Level::Notice => AnsiColor::Green,
            Level::Debug => AnsiColor::Cyan,
            Level::Info => AnsiColor::White,
        }
    }

    /// The shared table.
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<ColorTable> = OnceLock::new();
        TABLE.get_or_init(Self::new)
    }

    /// Escape prefix for a full level name, if the name is known.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    /// Escape prefix for a full level name; unknown names get no color.
    pub fn color_for(&self, name: &str) -> &str {
        self.lookup(name).unwrap_or_default()
    }

    /// Wrap an already rendered line as `<color><line><RESET>`.
    pub fn paint(&self, name: &str, line: &str) -> String {
        let color = self.color_for(name);
        let mut out = String::with_capacity(color.len() + line.len() + RESET.len());
        out.push_str(color);
        out.push_str(line);
        out.push_str(RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_level() {
        let table = ColorTable::global();
        for level in Level::ALL {
            assert!(table.lookup(level.as_str()).is_some(), "{level} has no color");
        }
    }

    #[test]
    fn fixed_codes() {
        let table = ColorTable::global();
        assert_eq!(table.color_for("CRITICAL"), "\x1b[35m");
        assert_eq!(table.color_for("ERROR"), "\x1b[31m");
        assert_eq!(table.color_for("WARNING"), "\x1b[33m");
        assert_eq!(table.color_for("NOTICE"), "\x1b[32m");
        assert_eq!(table.color_for("DEBUG"), "\x1b[36m");
        assert_eq!(table.color_for("INFO"), "\x1b[37m");
    }

    #[test]
    fn lookup_needs_the_full_name() {
        let table = ColorTable::global();
        assert_eq!(table.lookup("WAR"), None);
        assert_eq!(table.color_for("WAR"), "");
        assert_eq!(table.lookup("warning"), None);
    }

    #[test]
    fn paint_unknown_name_only_appends_reset() {
        assert_eq!(ColorTable::global().paint("TRACE", "line"), "line\x1b[0m");
    }

    #[test]
    fn palette_codes() {
        assert_eq!(AnsiColor::Black.code(), 30);
        assert_eq!(AnsiColor::White.code(), 37);
        assert_eq!(AnsiColor::Blue.escape(), "\x1b[34m");
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(ColorTable::global(), ColorTable::global()));
    }
}
