//! crates/ba-logger/src/record.rs
//! The per-call record handed from the emitter to the formatter.

use std::borrow::Cow;
use std::time::SystemTime;

use crate::registry::LevelRegistry;
use crate::severity;

/// A single log call after level and location resolution.
///
/// Records borrow the caller's message and live only for the duration of the
/// call that created them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    message: &'a str,
    rank: i64,
    label: Cow<'static, str>,
    timestamp: SystemTime,
    location: String,
}

impl<'a> LogRecord<'a> {
    /// Builds a record stamped with the current time.
    ///
    /// The label is derived from the resolved rank, so an unknown name that
    /// fell back to the default rank is labelled with the default's name.
    #[must_use]
    pub fn new(message: &'a str, rank: i64, location: String) -> Self {
        Self::with_timestamp(message, rank, location, SystemTime::now())
    }

    /// Builds a record with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(
        message: &'a str,
        rank: i64,
        location: String,
        timestamp: SystemTime,
    ) -> Self {
        Self {
            message,
            rank,
            label: severity::rank_label(rank),
            timestamp,
            location,
        }
    }

    /// The caller's message.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Resolved numeric rank.
    #[must_use]
    pub const fn rank(&self) -> i64 {
        self.rank
    }

    /// Text shown inside the brackets.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Wall-clock time the record was built.
    #[must_use]
    pub const fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Resolved location text.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns `true` for `verydetailed` records.
    #[must_use]
    pub const fn is_verydetailed(&self) -> bool {
        LevelRegistry::is_verydetailed(self.rank)
    }
}
