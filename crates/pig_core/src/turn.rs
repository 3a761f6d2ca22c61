//! The turn engine.
//!
//! A turn is a run of rolls that ends either when the player decides to hold
//! or when a 1 comes up. Holding banks the turn score; a bust banks nothing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dice::{RollSource, BUST_FACE};
use crate::player::{Player, PlayerId};
use crate::strategy::Decision;

/// How a turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Player held with this many points.
    Held(u32),
    /// Player rolled a 1 and lost the turn.
    Bust,
}

impl TurnOutcome {
    /// Points the turn adds to the player's total.
    pub fn points(self) -> u32 {
        match self {
            Self::Held(points) => points,
            Self::Bust => 0,
        }
    }
}

/// Every face rolled in one turn and how it ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who rolled.
    pub player: PlayerId,
    /// Faces in roll order, including a final 1 on a bust.
    pub rolls: Vec<u8>,
    /// Result of the turn.
    pub outcome: TurnOutcome,
    /// Player's banked total after the turn.
    pub total_after: u32,
}

/// Play one turn and return the points gained (0 on a bust).
///
/// Does not touch `player.total_score`; the game loop banks the return value.
pub fn play_turn(player: &mut Player, dice: &mut impl RollSource, winning_score: u32) -> u32 {
    run_turn(player, dice, winning_score, |_| {}).points()
}

/// Play one turn, keeping every face rolled.
///
/// `total_after` assumes the caller banks the outcome.
pub fn play_turn_recorded(
    player: &mut Player,
    dice: &mut impl RollSource,
    winning_score: u32,
) -> TurnRecord {
    let mut rolls = Vec::new();
    let outcome = run_turn(player, dice, winning_score, |face| rolls.push(face));
    TurnRecord {
        player: player.id(),
        rolls,
        outcome,
        total_after: player.total_score + outcome.points(),
    }
}

fn run_turn(
    player: &mut Player,
    dice: &mut impl RollSource,
    winning_score: u32,
    mut on_roll: impl FnMut(u8),
) -> TurnOutcome {
    player.turn_score = 0;

    while player.decide(winning_score) == Decision::Roll {
        let face = dice.roll();
        on_roll(face);
        if face == BUST_FACE {
            trace!(player = %player.id(), lost = player.turn_score, "bust");
            return TurnOutcome::Bust;
        }
        player.turn_score += face as u32;
    }

    trace!(player = %player.id(), points = player.turn_score, "hold");
    TurnOutcome::Held(player.turn_score)
}
