//! Logger facade

use std::fmt;
use std::sync::Arc;

use crate::{Clock, ColorMode, ColorTable, Level, LogRecord, SequenceCounter, Sink, SystemClock};

/// Leveled logger writing to a [`Sink`].
///
/// Every call is rendered and written; there is no level threshold. Ids come
/// from the process-wide [`SequenceCounter`] unless another counter is
/// injected with [`with_sequence`](Self::with_sequence).
///
/// Logging methods return the sink's error. Ignoring it simply loses that
/// line.
#[derive(Debug)]
pub struct Logger<S> {
    sink: S,
    color: ColorMode,
    sequence: Arc<SequenceCounter>,
    clock: Arc<dyn Clock>,
}

impl<S: Sink> Logger<S> {
    /// Create a logger over `sink`, using the global counter and the system clock.
    pub fn new(sink: S, color: ColorMode) -> Self {
        Self {
            sink,
            color,
            sequence: SequenceCounter::global(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Draw ids from `sequence` instead of the global counter.
    pub fn with_sequence(mut self, sequence: Arc<SequenceCounter>) -> Self {
        self.sequence = sequence;
        self
    }

    /// Read timestamps from `clock`.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Color mode fixed at construction.
    pub const fn color(&self) -> ColorMode {
        self.color
    }

    /// Counter this logger draws ids from.
    pub const fn sequence(&self) -> &Arc<SequenceCounter> {
        &self.sequence
    }

    /// Log `message` at `level`.
    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<(), S::Error> {
        let record = LogRecord::at(self.sequence.next_id(), self.clock.now(), level, message);
        self.sink.write_line(&self.render(&record))
    }

    /// Expand `args` into a message and log it at `level`.
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.log(level, fmt::format(args))
    }

    fn render(&self, record: &LogRecord) -> String {
        let line = record.render();
        if self.color.is_on() {
            // keyed by the full name, not the abbreviation in the line
            ColorTable::global().paint(record.level().as_str(), &line)
        } else {
            line
        }
    }

    /// Log at CRITICAL.
    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Critical, message)
    }

    /// Log at ERROR.
    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Error, message)
    }

    /// Log at WARNING.
    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Warning, message)
    }

    /// Log at NOTICE.
    #[inline]
    pub fn notice(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Notice, message)
    }

    /// Log at INFO.
    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Info, message)
    }

    /// Log at DEBUG.
    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<(), S::Error> {
        self.log(Level::Debug, message)
    }

    /// Formatted CRITICAL. See [`critical!`](crate::critical).
    #[inline]
    pub fn criticalf(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.critical(fmt::format(args))
    }

    /// Formatted ERROR.
    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.error(fmt::format(args))
    }

    /// Formatted WARNING.
    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.warning(fmt::format(args))
    }

    /// Formatted NOTICE.
    #[inline]
    pub fn noticef(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.notice(fmt::format(args))
    }

    /// Formatted INFO.
    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.info(fmt::format(args))
    }

    /// Formatted DEBUG.
    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) -> Result<(), S::Error> {
        self.debug(fmt::format(args))
    }

    /// Log at CRITICAL, flush, then exit the process with status 1.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        let _ = self.critical(message);
        let _ = self.sink.flush();
        std::process::exit(1)
    }

    /// Formatted [`fatal`](Self::fatal).
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(fmt::format(args))
    }

    /// Log at CRITICAL, then panic with the message as payload.
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        let _ = self.critical(message.as_str());
        panic!("{message}")
    }

    /// Formatted [`panic`](Self::panic).
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(fmt::format(args))
    }

    /// Flush the sink.
    pub fn flush(&self) -> Result<(), S::Error> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ManualClock, MemorySink};

    use std::panic::{self, AssertUnwindSafe};

    fn logger(color: ColorMode) -> (Logger<MemorySink>, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone(), color)
            .with_sequence(Arc::new(SequenceCounter::new()))
            .with_clock(Arc::new(ManualClock::ymd_hms(2024, 3, 1, 10, 0, 0)));
        (logger, sink)
    }

    #[test]
    fn plain_line() {
        let (logger, sink) = logger(ColorMode::Off);
        logger.error("disk full").unwrap();
        assert_eq!(sink.lines(), ["#1 2024-03-01 10:00:00 ▶ ERR disk full"]);
    }

    #[test]
    fn colored_line_is_wrapped() {
        let (logger, sink) = logger(ColorMode::On);
        logger.warning("low space").unwrap();
        assert_eq!(
            sink.lines(),
            ["\x1b[33m#1 2024-03-01 10:00:00 ▶ WAR low space\x1b[0m"]
        );
    }

    #[test]
    fn each_level_method_uses_its_level() {
        let (logger, sink) = logger(ColorMode::Off);
        logger.critical("a").unwrap();
        logger.error("b").unwrap();
        logger.warning("c").unwrap();
        logger.notice("d").unwrap();
        logger.info("e").unwrap();
        logger.debug("f").unwrap();

        let tags: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.split(' ').nth(4).unwrap().to_string())
            .collect();
        assert_eq!(tags, ["CRI", "ERR", "WAR", "NOT", "INF", "DEB"]);
    }

    #[test]
    fn formatted_variant_matches_plain() {
        let (plain, plain_sink) = logger(ColorMode::Off);
        let (formatted, formatted_sink) = logger(ColorMode::Off);

        plain.info("count=5").unwrap();
        formatted.infof(format_args!("count={}", 5)).unwrap();

        assert_eq!(plain_sink.lines(), formatted_sink.lines());
    }

    #[test]
    fn ids_increase_per_call() {
        let (logger, sink) = logger(ColorMode::Off);
        for i in 0..3 {
            logger.debugf(format_args!("n={i}")).unwrap();
        }
        let ids: Vec<String> = sink
            .lines()
            .iter()
            .map(|line| line.split(' ').next().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["#1", "#2", "#3"]);
        assert_eq!(logger.sequence().current(), 3);
    }

    #[test]
    fn write_errors_reach_the_caller() {
        let (logger, sink) = logger(ColorMode::Off);
        sink.fail_writes(true);
        assert!(logger.info("lost").is_err());
        assert!(sink.lines().is_empty());

        sink.fail_writes(false);
        logger.info("kept").unwrap();
        // the failed call still consumed an id
        assert_eq!(sink.lines(), ["#2 2024-03-01 10:00:00 ▶ INF kept"]);
    }

    #[test]
    fn panic_logs_then_unwinds() {
        let (logger, sink) = logger(ColorMode::Off);
        let result = panic::catch_unwind::<_, ()>(AssertUnwindSafe(|| logger.panic("boom")));

        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("boom"));
        assert_eq!(sink.lines(), ["#1 2024-03-01 10:00:00 ▶ CRI boom"]);
    }

    #[test]
    fn panicf_expands_before_logging() {
        let (logger, sink) = logger(ColorMode::Off);
        let result = panic::catch_unwind::<_, ()>(AssertUnwindSafe(|| {
            logger.panicf(format_args!("bad state {}", 42))
        }));

        assert!(result.is_err());
        assert!(sink.contains("CRI bad state 42"));
    }

    #[test]
    fn timestamp_follows_the_clock() {
        let sink = MemorySink::new();
        let clock = Arc::new(ManualClock::ymd_hms(2024, 3, 1, 23, 59, 59));
        let logger = Logger::new(sink.clone(), ColorMode::Off)
            .with_sequence(Arc::new(SequenceCounter::new()))
            .with_clock(clock.clone());

        logger.notice("before").unwrap();
        clock.advance(chrono::TimeDelta::seconds(2));
        logger.notice("after").unwrap();

        assert_eq!(
            sink.lines(),
            [
                "#1 2024-03-01 23:59:59 ▶ NOT before",
                "#2 2024-03-02 00:00:01 ▶ NOT after",
            ]
        );
    }
}
