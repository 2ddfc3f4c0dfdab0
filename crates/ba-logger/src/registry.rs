//! crates/ba-logger/src/registry.rs
//! Threshold state shared by every entry point of a logger.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::severity::{self, LevelInput, ParseSeverityError, Severity};

/// Holds the default rank and the active admission threshold.
///
/// The threshold is an atomic so a logger can be shared between threads
/// without a lock on the hot path.
#[derive(Debug)]
pub struct LevelRegistry {
    default_rank: i64,
    threshold: AtomicI64,
}

impl LevelRegistry {
    /// Creates a registry with an explicit default rank and starting threshold.
    #[must_use]
    pub const fn new(default_rank: i64, threshold: i64) -> Self {
        Self {
            default_rank,
            threshold: AtomicI64::new(threshold),
        }
    }

    /// Rank used for absent levels and unknown names.
    #[must_use]
    pub const fn default_rank(&self) -> i64 {
        self.default_rank
    }

    /// Current admission threshold.
    #[must_use]
    pub fn threshold(&self) -> i64 {
        self.threshold.load(Ordering::Relaxed)
    }

    /// Replaces the admission threshold.
    pub fn set_threshold(&self, rank: i64) {
        self.threshold.store(rank, Ordering::Relaxed);
    }

    /// Returns `true` when a record of `rank` passes the threshold.
    #[must_use]
    pub fn admits(&self, rank: i64) -> bool {
        rank >= self.threshold()
    }

    /// Resolves `input` against this registry's default rank.
    pub fn rank_of(&self, input: LevelInput<'_>) -> Result<i64, ParseSeverityError> {
        severity::rank_of(input, self.default_rank)
    }

    /// Returns `true` when `rank` selects the detailed location strategy.
    #[must_use]
    pub const fn is_verydetailed(rank: i64) -> bool {
        rank == Severity::VeryDetailed.rank()
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(severity::DEFAULT_RANK, severity::DEFAULT_RANK)
    }
}
