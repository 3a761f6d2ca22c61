//! Game and match configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PigError, Result};

/// Default score needed to win a game.
pub const DEFAULT_WINNING_SCORE: u32 = 100;

/// Default number of games played per strategy pairing.
pub const DEFAULT_GAMES_PER_MATCH: u32 = 10;

/// Largest accepted winning score. Keeps `total + turn` well inside `u32`.
pub const MAX_WINNING_SCORE: u32 = 1_000_000;

/// Largest accepted games per match. A sweep row sums up to 99 batches in a
/// `u32`, so this keeps row totals below `u32::MAX`.
pub const MAX_GAMES_PER_MATCH: u32 = 10_000_000;

/// Who opens each game of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// Player 1 always rolls first.
    #[default]
    Player1,
    /// Player 1 opens even-numbered games, player 2 odd-numbered ones.
    Alternate,
}

/// Parameters shared by every game in a batch or sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Total a player must reach to win.
    pub winning_score: u32,
    /// Games played for each pair of thresholds.
    pub games_per_match: u32,
    /// Opening player rule.
    pub start_policy: StartPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            games_per_match: DEFAULT_GAMES_PER_MATCH,
            start_policy: StartPolicy::Player1,
        }
    }
}

impl GameConfig {
    /// Set the winning score.
    pub fn with_winning_score(mut self, winning_score: u32) -> Self {
        self.winning_score = winning_score;
        self
    }

    /// Set the number of games per match.
    pub fn with_games_per_match(mut self, games: u32) -> Self {
        self.games_per_match = games;
        self
    }

    /// Set the opening player rule.
    pub fn with_start_policy(mut self, policy: StartPolicy) -> Self {
        self.start_policy = policy;
        self
    }

    /// Reject configurations that cannot produce a result or would overflow
    /// the score and tally counters.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WINNING_SCORE).contains(&self.winning_score) {
            return Err(PigError::InvalidConfig(format!(
                "winning score must be between 1 and {MAX_WINNING_SCORE}, got {}",
                self.winning_score
            )));
        }
        if !(1..=MAX_GAMES_PER_MATCH).contains(&self.games_per_match) {
            return Err(PigError::InvalidConfig(format!(
                "games per match must be between 1 and {MAX_GAMES_PER_MATCH}, got {}",
                self.games_per_match
            )));
        }
        Ok(())
    }
}
