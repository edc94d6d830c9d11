//! Formatting macros.
//!
//! Each macro expands its arguments once with [`format_args!`] and hands the
//! result to the matching `*f` method on a [`Logger`](crate::Logger), so
//! `info!(logger, "count={}", 5)` logs exactly what `logger.info("count=5")`
//! would. The expansions return the logger's `Result`.

/// Log a formatted message at an explicit [`Level`](crate::Level).
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

/// Formatted CRITICAL.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.criticalf(::std::format_args!($($arg)+))
    };
}

/// Formatted ERROR.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// Formatted WARNING.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warningf(::std::format_args!($($arg)+))
    };
}

/// Formatted NOTICE.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $logger.noticef(::std::format_args!($($arg)+))
    };
}

/// Formatted INFO.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// Formatted DEBUG.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(::std::format_args!($($arg)+))
    };
}

/// Formatted fatal: logs at CRITICAL and exits with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}

/// Formatted panic: logs at CRITICAL and panics with the message.
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(::std::format_args!($($arg)+))
    };
}
