//! Error types for the logger core

use thiserror::Error;

/// Returned when a string does not name one of the severity levels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);
