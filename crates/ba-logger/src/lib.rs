#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/ba-logger/src/lib.rs
//!
//! # Overview
//!
//! `ba_logger` is a small leveled logger. Each call carries a message and a
//! severity; the logger decides whether the call passes the current threshold
//! and, if so, writes one line that names where the call came from.
//!
//! # Design
//!
//! A call flows through four pieces:
//!
//! - [`LevelRegistry`] resolves names and integers to ranks and holds the
//!   threshold. Ranks are `debug`(0), `info`(1), `warn`(2), `error`(3) and
//!   `verydetailed`(4); any other integer is a custom rank.
//! - A [`CallerLocator`] turns the caller's [`CallSite`] into location text:
//!   `file.rs:LINE` normally, a multi-line trace for `verydetailed`.
//! - [`format`] renders the record as `[label|location] message`,
//!   `[label] message` when locations are hidden, or
//!   `[label] message` + newline + trace for `verydetailed`.
//! - [`Logger`] exposes the entry points and owns a [`LogSink`].
//!
//! # Invariants
//!
//! - A record is written iff its rank is `>=` the threshold. The default
//!   threshold is 4, so a fresh logger only writes `verydetailed` records and
//!   custom ranks of 4 or more.
//! - Rank resolution is total: unknown names print
//!   `Invalid loglevel received: NAME` and resolve to the default rank.
//! - [`Logger::mark`] and [`Logger::set_loglevel`] always write, whatever the
//!   threshold.
//! - With the empty-message guard on, `log("", _)` does nothing at all.
//!
//! # Errors
//!
//! Logging calls never return errors. [`LogSink`] surfaces [`std::io::Error`]
//! values from its writer; the logger drops them.
//!
//! # Examples
//!
//! ```
//! use ba_logger::{Logger, Severity};
//!
//! let logger = Logger::new(Vec::new());
//! logger.set_loglevel(Severity::Debug);
//! logger.info("ready");
//! logger.mark(Some("phase two"));
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[1].starts_with("[info|"));
//! assert!(lines[2].contains(" phase two "));
//! ```
//!
//! Hosts that want one logger for the process use [`shared`] and the free
//! functions next to it, which write to standard output.

mod config;
pub mod format;
pub mod location;
mod logger;
mod macros;
mod record;
mod registry;
mod severity;
mod shared;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use location::{CallSite, CallerLocator, SiteLocator, TraceLocator};
pub use logger::Logger;
pub use record::LogRecord;
pub use registry::LevelRegistry;
pub use severity::{DEFAULT_RANK, LevelInput, ParseSeverityError, Severity, label_of, rank_of};
pub use shared::{debug, error, info, log, mark, set_loglevel, shared, verydetailed, warn};
pub use sink::LogSink;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LoggerLayer, init_tracing};
