//! Classify a pair of strategy tokens.
//!
//! Tokens containing `-` are ranges. Two ranges give a range-vs-range sweep;
//! otherwise the first token must be a single threshold and the second picks
//! between a single match and a fixed-vs-range sweep.

use std::fmt;

use serde::{Deserialize, Serialize};

use pig_core::error::{PigError, Result};
use pig_core::strategy::{HoldThreshold, StrategySpec, ThresholdRange};
use pig_core::sweep::SweepPlan;

/// What a run will simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    /// One batch between two thresholds.
    Single {
        /// Player 1's threshold.
        threshold1: HoldThreshold,
        /// Player 2's threshold.
        threshold2: HoldThreshold,
    },
    /// Player 1 fixed, player 2 over a range.
    FixedVsRange {
        /// Player 1's threshold.
        fixed: HoldThreshold,
        /// Player 2's thresholds.
        range: ThresholdRange,
    },
    /// Both players over ranges.
    RangeVsRange {
        /// Player 1's thresholds.
        range1: ThresholdRange,
        /// Player 2's thresholds.
        range2: ThresholdRange,
    },
}

impl Invocation {
    /// Parse player 1 and player 2 tokens.
    pub fn parse(player1: &str, player2: &str) -> Result<Self> {
        if player1.contains('-') && player2.contains('-') {
            return Ok(Self::RangeVsRange {
                range1: ThresholdRange::parse(player1)?,
                range2: ThresholdRange::parse(player2)?,
            });
        }

        let fixed: HoldThreshold = player1.parse()?;
        match player2.parse::<StrategySpec>()? {
            StrategySpec::Fixed(threshold2) => Ok(Self::Single {
                threshold1: fixed,
                threshold2,
            }),
            StrategySpec::Range(range) => Ok(Self::FixedVsRange { fixed, range }),
        }
    }

    /// Parse two tokens that must both be single thresholds.
    pub fn parse_single(player1: &str, player2: &str) -> Result<(HoldThreshold, HoldThreshold)> {
        match Self::parse(player1, player2)? {
            Self::Single {
                threshold1,
                threshold2,
            } => Ok((threshold1, threshold2)),
            _ => Err(PigError::InvalidStrategy(format!("{player1} {player2}"))),
        }
    }

    /// Batches this invocation expands to.
    pub fn work(&self) -> Work {
        match *self {
            Self::Single {
                threshold1,
                threshold2,
            } => Work::Match(threshold1, threshold2),
            Self::FixedVsRange { fixed, range } => {
                Work::Sweep(SweepPlan::fixed_vs_range(fixed, range))
            }
            Self::RangeVsRange { range1, range2 } => {
                Work::Sweep(SweepPlan::range_vs_range(range1, range2))
            }
        }
    }

    /// Sweep plan, or `None` for a single match.
    pub fn plan(&self) -> Option<SweepPlan> {
        match self.work() {
            Work::Match(..) => None,
            Work::Sweep(plan) => Some(plan),
        }
    }
}

/// Simulation work behind an [`Invocation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Work {
    /// One batch between two thresholds.
    Match(HoldThreshold, HoldThreshold),
    /// A sweep over pairings.
    Sweep(SweepPlan),
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single {
                threshold1,
                threshold2,
            } => write!(f, "{threshold1} vs {threshold2}"),
            Self::FixedVsRange { fixed, range } => write!(f, "{fixed} vs {range}"),
            Self::RangeVsRange { range1, range2 } => write!(f, "{range1} vs {range2}"),
        }
    }
}
