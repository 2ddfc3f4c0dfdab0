//! crates/ba-logger/src/severity.rs
//! Severity names, numeric ranks, and the rules that resolve caller input into them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Rank used whenever no level is supplied or an unknown name is received.
///
/// This is the rank of [`Severity::VeryDetailed`], so a fresh logger only
/// admits `verydetailed` records and custom ranks at or above it.
pub const DEFAULT_RANK: i64 = Severity::VeryDetailed.rank();

/// Named severity tiers in canonical order.
///
/// The discriminant order is the rank order. `VeryDetailed` sits at the top
/// even though it is the most verbose tier: combined with the `rank >= threshold`
/// admission rule this keeps it visible under every canonical threshold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Diagnostic chatter, rank 0.
    Debug,
    /// Normal progress, rank 1.
    Info,
    /// Recoverable problems, rank 2.
    Warn,
    /// Failures, rank 3.
    Error,
    /// Trace tier rendered with a multi-line location, rank 4.
    VeryDetailed,
}

impl Severity {
    /// All severities ordered by rank.
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::VeryDetailed,
    ];

    /// Numeric rank of the severity.
    #[must_use]
    pub const fn rank(self) -> i64 {
        match self {
            Self::Debug => 0,
            Self::Info => 1,
            Self::Warn => 2,
            Self::Error => 3,
            Self::VeryDetailed => 4,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::VeryDetailed => "verydetailed",
        }
    }

    /// Looks up the severity occupying `rank`, if any.
    #[must_use]
    pub fn from_rank(rank: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.rank() == rank)
    }

    /// Looks up a severity by its exact canonical name.
    ///
    /// Matching is case-sensitive: `"Warn"` is not a canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.name() == name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseSeverityError::new(s))
    }
}

/// A level name outside the canonical set.
///
/// The display text doubles as the diagnostic line the logger prints when it
/// falls back to [`DEFAULT_RANK`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid loglevel received: {name}")]
pub struct ParseSeverityError {
    name: String,
}

impl ParseSeverityError {
    /// Creates an error for the rejected `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Level argument accepted by the logger's generic entry points.
///
/// Callers may pass a canonical name, an arbitrary integer rank, or nothing at
/// all. Integer ranks outside `0..=4` are valid custom levels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LevelInput<'a> {
    /// A level name; only canonical names resolve to their rank.
    Name(&'a str),
    /// A numeric rank, used unchanged.
    Rank(i64),
    /// No level supplied.
    #[default]
    Default,
}

impl fmt::Display for LevelInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Rank(rank) => write!(f, "{rank}"),
            Self::Default => f.write_str("default"),
        }
    }
}

impl From<Severity> for LevelInput<'_> {
    fn from(severity: Severity) -> Self {
        Self::Name(severity.name())
    }
}

impl<'a> From<&'a str> for LevelInput<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for LevelInput<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl From<i64> for LevelInput<'_> {
    fn from(rank: i64) -> Self {
        Self::Rank(rank)
    }
}

impl From<i32> for LevelInput<'_> {
    fn from(rank: i32) -> Self {
        Self::Rank(i64::from(rank))
    }
}

impl From<u8> for LevelInput<'_> {
    fn from(rank: u8) -> Self {
        Self::Rank(i64::from(rank))
    }
}

impl<'a, T> From<Option<T>> for LevelInput<'a>
where
    T: Into<LevelInput<'a>>,
{
    fn from(level: Option<T>) -> Self {
        level.map_or(Self::Default, Into::into)
    }
}

/// Resolves `input` to a numeric rank.
///
/// Integers pass through unchanged and an absent level maps to `default_rank`.
/// Unknown names are reported as [`ParseSeverityError`]; callers that need a
/// total mapping fall back to `default_rank` after surfacing the error.
pub fn rank_of(input: LevelInput<'_>, default_rank: i64) -> Result<i64, ParseSeverityError> {
    match input {
        LevelInput::Name(name) => name.parse::<Severity>().map(Severity::rank),
        LevelInput::Rank(rank) => Ok(rank),
        LevelInput::Default => Ok(default_rank),
    }
}

/// Returns the display label for `input`.
///
/// Names are returned verbatim so custom labels survive. Ranks map to their
/// canonical name or to `custom level N`.
#[must_use]
pub fn label_of(input: LevelInput<'_>, default_rank: i64) -> Cow<'_, str> {
    match input {
        LevelInput::Name(name) => Cow::Borrowed(name),
        LevelInput::Rank(rank) => rank_label(rank),
        LevelInput::Default => rank_label(default_rank),
    }
}

/// Canonical name for `rank`, or `custom level N` outside the canonical range.
pub(crate) fn rank_label(rank: i64) -> Cow<'static, str> {
    Severity::from_rank(rank).map_or_else(
        || Cow::Owned(format!("custom level {rank}")),
        |severity| Cow::Borrowed(severity.name()),
    )
}
