//! crates/ba-logger/src/logger.rs
//! The emitter: severity-named entry points, generic `log`, `set_loglevel` and `mark`.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::LoggerConfig;
use crate::format::{render_mark, render_record};
use crate::location::{CallSite, CallerLocator, TraceLocator};
use crate::record::LogRecord;
use crate::registry::LevelRegistry;
use crate::severity::{self, LevelInput, Severity};
use crate::sink::LogSink;

/// A leveled logger writing rendered lines into `W`.
///
/// The logger owns its threshold and its sink. All methods take `&self`; the
/// threshold is atomic and sink writes are serialized behind a mutex, so a
/// single instance can be shared between threads without interleaving lines.
///
/// Logging never fails from the caller's point of view: unknown level names
/// produce a diagnostic line and fall back to the default rank, and write
/// errors from the sink are discarded.
///
/// ```
/// use ba_logger::Logger;
///
/// let logger = Logger::new(Vec::new());
/// logger.set_loglevel("warn");
/// logger.info("not shown");
/// logger.error("disk full");
///
/// let output = String::from_utf8(logger.into_inner()).unwrap();
/// let lines: Vec<&str> = output.lines().collect();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].contains(" Loglevel set to warn "));
/// assert!(lines[1].starts_with("[error|"));
/// assert!(lines[1].ends_with("] disk full"));
/// ```
pub struct Logger<W> {
    registry: LevelRegistry,
    sink: Mutex<LogSink<W>>,
    locator: Box<dyn CallerLocator>,
    check_empty: bool,
    hide_location: bool,
}

impl<W> Logger<W> {
    /// Creates a logger with [`LoggerConfig::default`] and a [`TraceLocator`].
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, LoggerConfig::default())
    }

    /// Creates a logger from an explicit configuration.
    #[must_use]
    pub fn with_config(writer: W, config: LoggerConfig) -> Self {
        Self {
            registry: LevelRegistry::new(config.default_rank, config.initial_threshold),
            sink: Mutex::new(LogSink::new(writer)),
            locator: Box::new(TraceLocator),
            check_empty: config.check_empty,
            hide_location: config.hide_location,
        }
    }

    /// Replaces the location strategy.
    #[must_use]
    pub fn with_locator<L>(mut self, locator: L) -> Self
    where
        L: CallerLocator + 'static,
    {
        self.locator = Box::new(locator);
        self
    }

    /// Current admission threshold.
    #[must_use]
    pub fn threshold(&self) -> i64 {
        self.registry.threshold()
    }

    /// Rank used for absent levels and unknown names.
    #[must_use]
    pub const fn default_rank(&self) -> i64 {
        self.registry.default_rank()
    }

    /// Whether empty messages are dropped.
    #[must_use]
    pub const fn checks_empty(&self) -> bool {
        self.check_empty
    }

    /// Whether locations are omitted from non-`verydetailed` lines.
    #[must_use]
    pub const fn hides_location(&self) -> bool {
        self.hide_location
    }

    /// Display label for `level`; names are returned verbatim.
    #[must_use]
    pub fn label_of<'a>(&self, level: impl Into<LevelInput<'a>>) -> Cow<'a, str> {
        severity::label_of(level.into(), self.registry.default_rank())
    }

    /// Consumes the logger and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .into_inner()
    }

    fn lock_sink(&self) -> MutexGuard<'_, LogSink<W>> {
        self.sink.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Logger<W>
where
    W: Write,
{
    /// Logs `message` at `debug`.
    #[track_caller]
    pub fn debug(&self, message: &str) {
        self.dispatch(message, Severity::Debug.into(), CallSite::caller());
    }

    /// Logs `message` at `info`.
    #[track_caller]
    pub fn info(&self, message: &str) {
        self.dispatch(message, Severity::Info.into(), CallSite::caller());
    }

    /// Logs `message` at `warn`.
    #[track_caller]
    pub fn warn(&self, message: &str) {
        self.dispatch(message, Severity::Warn.into(), CallSite::caller());
    }

    /// Logs `message` at `error`.
    #[track_caller]
    pub fn error(&self, message: &str) {
        self.dispatch(message, Severity::Error.into(), CallSite::caller());
    }

    /// Logs `message` at `verydetailed`, followed by a trace of the caller.
    ///
    /// Under every canonical threshold this is always written.
    #[track_caller]
    pub fn verydetailed(&self, message: &str) {
        self.dispatch(message, Severity::VeryDetailed.into(), CallSite::caller());
    }

    /// Logs `message` at an arbitrary level.
    ///
    /// `level` may be a [`Severity`], a name, an integer rank, or
    /// [`LevelInput::Default`]. An unknown name prints
    /// `Invalid loglevel received: NAME` and logs at the default rank.
    ///
    /// With the empty-message guard enabled (the default) an empty `message`
    /// returns immediately: nothing is resolved, located, or written.
    #[track_caller]
    pub fn log<'a>(&self, message: &str, level: impl Into<LevelInput<'a>>) {
        self.dispatch(message, level.into(), CallSite::caller());
    }

    /// Logs `message` at `level`, attributing it to an explicit `site`.
    ///
    /// This is the entry point used by the `log_*!` macros and the tracing
    /// bridge, where the call site is known without `#[track_caller]`.
    pub fn log_at<'a>(&self, message: &str, level: impl Into<LevelInput<'a>>, site: CallSite) {
        self.dispatch(message, level.into(), site);
    }

    /// Sets the admission threshold.
    ///
    /// A mark announcing the change is always written first, even when the
    /// threshold does not change. Unknown names set the default rank.
    pub fn set_loglevel<'a>(&self, level: impl Into<LevelInput<'a>>) {
        let level = level.into();
        let announcement = format!("Loglevel set to {level}");
        self.mark(Some(announcement.as_str()));
        let rank = self.resolve(level);
        self.registry.set_threshold(rank);
    }

    /// Writes a separator line, optionally with centred `text`.
    ///
    /// Marks bypass the threshold.
    pub fn mark(&self, text: Option<&str>) {
        self.emit_line(&render_mark(text));
    }

    /// Resolves `level` to a rank, printing a diagnostic for unknown names.
    pub fn rank_of<'a>(&self, level: impl Into<LevelInput<'a>>) -> i64 {
        self.resolve(level.into())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock_sink().flush()
    }

    /// Shared tail of every logging entry point.
    ///
    /// Entry points call this directly so the detailed locator always runs
    /// [`INTERNAL_FRAMES`](crate::location::INTERNAL_FRAMES) frames below the
    /// user's call.
    #[inline(never)]
    pub(crate) fn dispatch(&self, message: &str, level: LevelInput<'_>, site: CallSite) {
        if self.check_empty && message.is_empty() {
            return;
        }
        let rank = self.resolve(level);
        if !self.registry.admits(rank) {
            return;
        }
        let location = self.locate(rank, &site);
        let record = LogRecord::new(message, rank, location);
        self.emit_line(&render_record(&record, self.hide_location));
    }

    #[inline(never)]
    fn locate(&self, rank: i64, site: &CallSite) -> String {
        if LevelRegistry::is_verydetailed(rank) {
            self.locator.detailed(site)
        } else {
            self.locator.concise(site)
        }
    }

    fn resolve(&self, level: LevelInput<'_>) -> i64 {
        self.registry.rank_of(level).unwrap_or_else(|err| {
            self.emit_line(&err.to_string());
            self.registry.default_rank()
        })
    }

    fn emit_line(&self, line: &str) {
        // Write failures are the host's concern; logging never fails the caller.
        let _ = self.lock_sink().write_line(line);
    }
}

impl<W> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("registry", &self.registry)
            .field("locator", &self.locator)
            .field("check_empty", &self.check_empty)
            .field("hide_location", &self.hide_location)
            .finish_non_exhaustive()
    }
}
