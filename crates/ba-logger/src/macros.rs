//! crates/ba-logger/src/macros.rs
//! Formatting macros that pass the call site explicitly.
//!
//! These expand to [`Logger::log_at`](crate::Logger::log_at) with
//! `file!()`, `line!()` and `column!()`, which is the path to use when a
//! logging call is wrapped in helpers of your own: `#[track_caller]` would
//! otherwise report the helper.

/// Logs a formatted message at an explicit level.
///
/// # Example
/// ```
/// use ba_logger::{Logger, log_at};
///
/// let logger = Logger::new(Vec::new());
/// log_at!(logger, 9, "{} retries left", 3);
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// assert!(output.starts_with("[custom level 9|"));
/// assert!(output.ends_with("] 3 retries left\n"));
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            &::std::format!($($arg)+),
            $level,
            $crate::CallSite::new(::std::file!(), ::std::line!(), ::std::column!()),
        )
    };
}

/// Logs a formatted message at `debug`.
///
/// # Example
/// ```ignore
/// log_debug!(logger, "cache miss for {}", key);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Logs a formatted message at `info`.
///
/// # Example
/// ```ignore
/// log_info!(logger, "listening on {}", addr);
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Logs a formatted message at `warn`.
///
/// # Example
/// ```ignore
/// log_warn!(logger, "{} slow responses", count);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Logs a formatted message at `error`.
///
/// # Example
/// ```ignore
/// log_error!(logger, "request failed: {}", err);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Logs a formatted message at `verydetailed`.
///
/// # Example
/// ```ignore
/// log_verydetailed!(logger, "state = {:?}", state);
/// ```
#[macro_export]
macro_rules! log_verydetailed {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::Severity::VeryDetailed, $($arg)+)
    };
}
