//! Hold-threshold strategies and threshold ranges.
//!
//! A strategy is a single number `K`: keep rolling until the turn is worth at
//! least `K` points, then hold. Ranges of strategies are written `start-end`
//! on the command line and are inclusive.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PigError, RangeFault, Result};

/// Smallest allowed hold threshold.
pub const MIN_THRESHOLD: u32 = 1;

/// Largest allowed hold threshold.
pub const MAX_THRESHOLD: u32 = 100;

/// What a player does before each roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Bank the turn score and pass the die.
    Hold,
    /// Roll again.
    Roll,
}

/// A validated hold threshold in `[1, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HoldThreshold(u32);

impl HoldThreshold {
    /// Validate a raw threshold.
    pub fn new(value: u32) -> Result<Self> {
        if (MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PigError::InvalidStrategy(value.to_string()))
        }
    }

    /// Raw threshold value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for HoldThreshold {
    type Error = PigError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<HoldThreshold> for u32 {
    fn from(threshold: HoldThreshold) -> Self {
        threshold.0
    }
}

impl FromStr for HoldThreshold {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| PigError::InvalidStrategy(s.to_string()))?;
        Self::new(value).map_err(|_| PigError::InvalidStrategy(s.to_string()))
    }
}

impl fmt::Display for HoldThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of hold thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr")]
pub struct ThresholdRange {
    start: HoldThreshold,
    end: HoldThreshold,
}

/// Unchecked serde shape of [`ThresholdRange`].
#[derive(Deserialize)]
struct RangeRepr {
    start: HoldThreshold,
    end: HoldThreshold,
}

impl TryFrom<RangeRepr> for ThresholdRange {
    type Error = PigError;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        Self::inclusive(repr.start, repr.end)
    }
}

impl ThresholdRange {
    /// Build a range from already validated endpoints.
    ///
    /// Unlike [`ThresholdRange::parse`], a single-value range (`start == end`)
    /// is accepted here.
    pub fn inclusive(start: HoldThreshold, end: HoldThreshold) -> Result<Self> {
        if start > end {
            return Err(PigError::range(
                format!("{start}-{end}"),
                RangeFault::Inverted,
            ));
        }
        Ok(Self { start, end })
    }

    /// The full `1-100` range.
    pub fn all() -> Self {
        Self {
            start: HoldThreshold(MIN_THRESHOLD),
            end: HoldThreshold(MAX_THRESHOLD),
        }
    }

    /// Parse a `start-end` token.
    ///
    /// Both endpoints must be numbers in `[1, 100]` and `start` must be
    /// strictly below `end`.
    pub fn parse(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(PigError::range(token, RangeFault::Malformed));
        };

        let endpoint = |raw: &str| -> Result<HoldThreshold> {
            raw.trim()
                .parse::<u32>()
                .ok()
                .and_then(|v| HoldThreshold::new(v).ok())
                .ok_or_else(|| PigError::range(token, RangeFault::OutOfBounds))
        };
        let start = endpoint(*start)?;
        let end = endpoint(*end)?;

        if start >= end {
            return Err(PigError::range(token, RangeFault::Inverted));
        }
        Ok(Self { start, end })
    }

    /// First threshold in the range.
    pub fn start(&self) -> HoldThreshold {
        self.start
    }

    /// Last threshold in the range.
    pub fn end(&self) -> HoldThreshold {
        self.end
    }

    /// Number of thresholds covered.
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0 + 1) as usize
    }

    /// Always false; a range holds at least one threshold.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Thresholds in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = HoldThreshold> {
        self.raw().map(HoldThreshold)
    }

    fn raw(&self) -> RangeInclusive<u32> {
        self.start.0..=self.end.0
    }
}

impl FromStr for ThresholdRange {
    type Err = PigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One side of a match: a single strategy or a sweep over strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategySpec {
    /// One fixed threshold.
    Fixed(HoldThreshold),
    /// Every threshold in a range.
    Range(ThresholdRange),
}

impl FromStr for StrategySpec {
    type Err = PigError;

    /// Tokens containing `-` are ranges, everything else a single threshold.
    fn from_str(s: &str) -> Result<Self> {
        if s.contains('-') {
            ThresholdRange::parse(s).map(Self::Range)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

impl fmt::Display for StrategySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(t) => write!(f, "{t}"),
            Self::Range(r) => write!(f, "{r}"),
        }
    }
}
