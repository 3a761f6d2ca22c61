//! Players and their per-game score state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::strategy::{Decision, HoldThreshold};

/// Seat at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    /// First seat.
    Player1,
    /// Second seat.
    Player2,
}

impl PlayerId {
    /// The other seat.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }

    /// Stable string identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player1 => "player1",
            Self::Player2 => "player2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player following a fixed hold-threshold strategy.
///
/// The threshold never changes; `total_score` is reset between games and
/// `turn_score` at the start of every turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    hold_threshold: HoldThreshold,
    /// Points banked this game.
    pub total_score: u32,
    /// Points accumulated in the turn in progress.
    pub turn_score: u32,
}

impl Player {
    /// Fresh player with zeroed scores.
    pub fn new(id: PlayerId, hold_threshold: HoldThreshold) -> Self {
        Self {
            id,
            hold_threshold,
            total_score: 0,
            turn_score: 0,
        }
    }

    /// Seat identifier.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Strategy threshold.
    pub fn hold_threshold(&self) -> HoldThreshold {
        self.hold_threshold
    }

    /// Decide whether to roll again.
    ///
    /// Holds when banking now would win, or once the turn is worth the
    /// strategy threshold.
    pub fn decide(&self, winning_score: u32) -> Decision {
        if self.total_score + self.turn_score >= winning_score
            || self.turn_score >= self.hold_threshold.get()
        {
            Decision::Hold
        } else {
            Decision::Roll
        }
    }

    /// Clear scores for a new game.
    pub fn reset(&mut self) {
        self.total_score = 0;
        self.turn_score = 0;
    }
}
