//! crates/ba-logger/src/shared.rs
//! Process-wide logger writing to standard output.
//!
//! Hosts that want a single logger for the whole process obtain it through
//! [`shared`]; the free functions in this module forward to it. The instance
//! is built lazily with [`LoggerConfig::default`](crate::LoggerConfig).

use std::io::{self, Stdout};
use std::sync::OnceLock;

use crate::location::CallSite;
use crate::logger::Logger;
use crate::severity::{LevelInput, Severity};

static SHARED: OnceLock<Logger<Stdout>> = OnceLock::new();

/// Returns the process-wide stdout logger.
pub fn shared() -> &'static Logger<Stdout> {
    SHARED.get_or_init(|| Logger::new(io::stdout()))
}

/// Logs `message` at `debug` on the shared logger.
#[track_caller]
pub fn debug(message: &str) {
    shared().dispatch(message, Severity::Debug.into(), CallSite::caller());
}

/// Logs `message` at `info` on the shared logger.
#[track_caller]
pub fn info(message: &str) {
    shared().dispatch(message, Severity::Info.into(), CallSite::caller());
}

/// Logs `message` at `warn` on the shared logger.
#[track_caller]
pub fn warn(message: &str) {
    shared().dispatch(message, Severity::Warn.into(), CallSite::caller());
}

/// Logs `message` at `error` on the shared logger.
#[track_caller]
pub fn error(message: &str) {
    shared().dispatch(message, Severity::Error.into(), CallSite::caller());
}

/// Logs `message` at `verydetailed` on the shared logger.
#[track_caller]
pub fn verydetailed(message: &str) {
    shared().dispatch(message, Severity::VeryDetailed.into(), CallSite::caller());
}

/// Logs `message` at `level` on the shared logger. See [`Logger::log`].
#[track_caller]
pub fn log<'a>(message: &str, level: impl Into<LevelInput<'a>>) {
    shared().dispatch(message, level.into(), CallSite::caller());
}

/// Sets the shared logger's threshold. See [`Logger::set_loglevel`].
pub fn set_loglevel<'a>(level: impl Into<LevelInput<'a>>) {
    shared().set_loglevel(level);
}

/// Writes a separator line on the shared logger.
pub fn mark(text: Option<&str>) {
    shared().mark(text);
}
