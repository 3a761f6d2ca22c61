//! Error types for the Pig simulation.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`PigError`].
pub type Result<T> = std::result::Result<T, PigError>;

/// Top-level error type for all simulation input errors.
///
/// Every variant is an input-validation failure detected before any game is
/// simulated, so a run that fails produces no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PigError {
    /// Hold threshold outside `[1, 100]` or not a number.
    #[error("expect the strategy between 1 and 100, got '{0}'")]
    InvalidStrategy(String),

    /// Threshold range that cannot be swept.
    #[error("invalid strategy range '{range}': {fault}")]
    InvalidRange {
        /// The range token as given.
        range: String,
        /// What is wrong with it.
        fault: RangeFault,
    },

    /// Game configuration that cannot produce a game.
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
}

impl PigError {
    pub(crate) fn range(range: impl Into<String>, fault: RangeFault) -> Self {
        Self::InvalidRange {
            range: range.into(),
            fault,
        }
    }
}

/// Reason a range token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFault {
    /// Not of the form `start-end`.
    Malformed,
    /// An endpoint is not a number in `[1, 100]`.
    OutOfBounds,
    /// Start is not below end.
    Inverted,
}

impl fmt::Display for RangeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "expect the strategy in range format e.g. 1-100"),
            Self::OutOfBounds => write!(f, "expect the strategy between 1 and 100"),
            Self::Inverted => write!(f, "start must be below end"),
        }
    }
}
