//! crates/ba-logger/src/tracing_bridge.rs
//! Bridge from the `tracing` crate into a [`Logger`].
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer that renders every
//! `tracing` event through a [`Logger`], so libraries instrumented with
//! `tracing` share the logger's threshold and line format.
//!
//! Levels map as follows:
//!
//! - `ERROR` → `error`
//! - `WARN` → `warn`
//! - `INFO` → `info`
//! - `DEBUG` → `debug`
//! - `TRACE` → `verydetailed`
//!
//! The event's `file`/`line` metadata becomes the call site.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ba_logger::{Logger, init_tracing};
//!
//! let logger = Arc::new(Logger::new(std::io::stdout()));
//! logger.set_loglevel("info");
//! init_tracing(Arc::clone(&logger));
//!
//! tracing::warn!("cache size {} exceeds budget", 4096);
//! ```

use std::io::Write;
use std::sync::Arc;

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::location::CallSite;
use crate::logger::Logger;
use crate::severity::Severity;

/// A tracing layer that writes events through a [`Logger`].
pub struct LoggerLayer<W> {
    logger: Arc<Logger<W>>,
}

impl<W> LoggerLayer<W> {
    /// Creates a layer forwarding to `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger<W>>) -> Self {
        Self { logger }
    }

    /// Map a tracing level to a severity.
    const fn level_to_severity(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::VeryDetailed,
        }
    }
}

impl<S, W> Layer<S> for LoggerLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: Write + Send + 'static,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::level_to_severity(metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let file = metadata.file().unwrap_or_else(|| metadata.target());
        let site = CallSite::new(file, metadata.line().unwrap_or(0), 0);
        self.logger.log_at(&message, severity, site);
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`LoggerLayer`] for `logger` as the global default subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing<W>(logger: Arc<Logger<W>>)
where
    W: Write + Send + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .init();
}
