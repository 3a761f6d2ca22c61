//! The game loop.
//!
//! Two players alternate turns until one banks enough to reach the winning
//! score. The loop is a small state machine: one state per seat to move plus a
//! terminal state carrying the winner. There are no draws.

use serde::{Deserialize, Serialize};

use crate::dice::RollSource;
use crate::player::{Player, PlayerId};
use crate::turn::{play_turn, play_turn_recorded, TurnRecord};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Player 1 is to roll.
    Player1Turn,
    /// Player 2 is to roll.
    Player2Turn,
    /// The game is decided.
    GameOver(PlayerId),
}

impl GameState {
    /// State in which `id` is to move.
    pub fn turn_of(id: PlayerId) -> Self {
        match id {
            PlayerId::Player1 => Self::Player1Turn,
            PlayerId::Player2 => Self::Player2Turn,
        }
    }

    /// State after `id` banks a turn and now holds `total`.
    fn after_turn(id: PlayerId, total: u32, winning_score: u32) -> Self {
        if total >= winning_score {
            Self::GameOver(id)
        } else {
            Self::turn_of(id.opponent())
        }
    }
}

/// Result of one completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Who reached the winning score.
    pub winner: PlayerId,
    /// Turns played by both players together.
    pub turns: u32,
    /// Final banked totals, player 1 then player 2.
    pub final_scores: (u32, u32),
}

/// Turn-by-turn account of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    /// Every turn in order.
    pub turns: Vec<TurnRecord>,
    /// How the game ended.
    pub outcome: GameOutcome,
}

/// Play a game with player 1 opening.
///
/// Both players are reset before the first roll.
pub fn play_game(
    player1: &mut Player,
    player2: &mut Player,
    dice: &mut impl RollSource,
    winning_score: u32,
) -> GameOutcome {
    play_game_from(player1, player2, dice, winning_score, PlayerId::Player1)
}

/// Play a game with the given seat opening.
pub fn play_game_from(
    player1: &mut Player,
    player2: &mut Player,
    dice: &mut impl RollSource,
    winning_score: u32,
    opener: PlayerId,
) -> GameOutcome {
    drive(player1, player2, winning_score, opener, |player| {
        play_turn(player, &mut *dice, winning_score)
    })
}

/// Play a game with the given seat opening, recording every turn.
pub fn play_game_recorded(
    player1: &mut Player,
    player2: &mut Player,
    dice: &mut impl RollSource,
    winning_score: u32,
    opener: PlayerId,
) -> GameLog {
    let mut turns = Vec::new();
    let outcome = drive(player1, player2, winning_score, opener, |player| {
        let record = play_turn_recorded(player, &mut *dice, winning_score);
        let points = record.outcome.points();
        turns.push(record);
        points
    });
    GameLog { turns, outcome }
}

fn drive(
    player1: &mut Player,
    player2: &mut Player,
    winning_score: u32,
    opener: PlayerId,
    mut take_turn: impl FnMut(&mut Player) -> u32,
) -> GameOutcome {
    player1.reset();
    player2.reset();

    let mut state = GameState::turn_of(opener);
    let mut turns = 0;

    let winner = loop {
        let player = match state {
            GameState::Player1Turn => &mut *player1,
            GameState::Player2Turn => &mut *player2,
            GameState::GameOver(winner) => break winner,
        };

        let gained = take_turn(player);
        player.total_score += gained;
        turns += 1;
        state = GameState::after_turn(player.id(), player.total_score, winning_score);
    };

    GameOutcome {
        winner,
        turns,
        final_scores: (player1.total_score, player2.total_score),
    }
}
