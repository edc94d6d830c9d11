//! Destination trait for rendered lines

use std::sync::Arc;

/// Where a [`Logger`](crate::Logger) commits its rendered lines.
///
/// Implementations are shared between threads and must serialize their own
/// writes: one call to [`write_line`](Sink::write_line) lands as one whole
/// line.
pub trait Sink: Send + Sync {
    /// Error surfaced to the logging caller.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append `line` followed by a newline.
    fn write_line(&self, line: &str) -> Result<(), Self::Error>;

    /// Push anything buffered to the destination.
    fn flush(&self) -> Result<(), Self::Error>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    type Error = S::Error;

    #[inline]
    fn write_line(&self, line: &str) -> Result<(), Self::Error> {
        (**self).write_line(line)
    }

    #[inline]
    fn flush(&self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
