//! Dated file naming: `<prefix>.<YYYY-MM-DD>`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// `chrono` format of the date suffix.
pub const DATE_SUFFIX_FORMAT: &str = "%Y-%m-%d";

/// Suffix for `date`, e.g. `2024-03-01`.
pub fn date_suffix(date: NaiveDate) -> String {
    date.format(DATE_SUFFIX_FORMAT).to_string()
}

/// `prefix` with `.<suffix>` appended to its final component.
pub fn dated_path(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}
