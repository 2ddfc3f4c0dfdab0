//! crates/ba-logger/src/config.rs
//! Construction-time settings for a [`Logger`](crate::Logger).

use crate::severity::DEFAULT_RANK;

/// Settings applied when a logger is built.
///
/// The defaults reproduce the classic behaviour: threshold and fallback rank
/// are both `verydetailed`, empty messages are dropped, and locations are
/// shown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Rank used for absent levels and unknown names.
    pub default_rank: i64,
    /// Threshold in effect before the first `set_loglevel`.
    pub initial_threshold: i64,
    /// Drop calls whose message is the empty string before any other work.
    pub check_empty: bool,
    /// Omit the location from every line except `verydetailed` ones.
    pub hide_location: bool,
}

impl LoggerConfig {
    /// Sets the fallback rank.
    pub fn with_default_rank(mut self, rank: i64) -> Self {
        self.default_rank = rank;
        self
    }

    /// Sets the starting threshold.
    pub fn with_initial_threshold(mut self, rank: i64) -> Self {
        self.initial_threshold = rank;
        self
    }

    /// Enables or disables the empty-message guard.
    pub fn with_check_empty(mut self, check_empty: bool) -> Self {
        self.check_empty = check_empty;
        self
    }

    /// Shows or hides locations on non-`verydetailed` lines.
    pub fn with_hide_location(mut self, hide_location: bool) -> Self {
        self.hide_location = hide_location;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_rank: DEFAULT_RANK,
            initial_threshold: DEFAULT_RANK,
            check_empty: true,
            hide_location: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_behaviour() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_rank, 4);
        assert_eq!(config.initial_threshold, 4);
        assert!(config.check_empty);
        assert!(!config.hide_location);
    }

    #[test]
    fn builders_override_fields() {
        let config = LoggerConfig::default()
            .with_default_rank(1)
            .with_initial_threshold(0)
            .with_check_empty(false)
            .with_hide_location(true);

        assert_eq!(config.default_rank, 1);
        assert_eq!(config.initial_threshold, 0);
        assert!(!config.check_empty);
        assert!(config.hide_location);
    }
}
