//! Batches of games between two fixed strategies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{GameConfig, StartPolicy};
use crate::dice::RollSource;
use crate::error::Result;
use crate::game::play_game_from;
use crate::player::{Player, PlayerId};
use crate::strategy::HoldThreshold;

/// Win tally for one pairing of thresholds.
///
/// `player1_wins + player2_wins == games_played` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Player 1's threshold.
    pub threshold1: HoldThreshold,
    /// Player 2's threshold.
    pub threshold2: HoldThreshold,
    /// Games won by player 1.
    pub player1_wins: u32,
    /// Games won by player 2.
    pub player2_wins: u32,
    /// Games played.
    pub games_played: u32,
}

impl BatchResult {
    fn empty(threshold1: HoldThreshold, threshold2: HoldThreshold) -> Self {
        Self {
            threshold1,
            threshold2,
            player1_wins: 0,
            player2_wins: 0,
            games_played: 0,
        }
    }

    fn record(&mut self, winner: PlayerId) {
        match winner {
            PlayerId::Player1 => self.player1_wins += 1,
            PlayerId::Player2 => self.player2_wins += 1,
        }
        self.games_played += 1;
    }

    /// Games won by `id`.
    pub fn wins(&self, id: PlayerId) -> u32 {
        match id {
            PlayerId::Player1 => self.player1_wins,
            PlayerId::Player2 => self.player2_wins,
        }
    }

    /// Fraction of games won by `id`.
    pub fn win_rate(&self, id: PlayerId) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins(id) as f64 / self.games_played as f64
    }
}

/// Seat that opens game number `index` of a batch.
pub fn opener_for(policy: StartPolicy, index: u32) -> PlayerId {
    match policy {
        StartPolicy::Player1 => PlayerId::Player1,
        StartPolicy::Alternate if index % 2 == 1 => PlayerId::Player2,
        StartPolicy::Alternate => PlayerId::Player1,
    }
}

/// Play `config.games_per_match` games between two thresholds.
///
/// Each game starts from fresh scores; the die is shared across games.
pub fn run_batch(
    threshold1: HoldThreshold,
    threshold2: HoldThreshold,
    config: &GameConfig,
    dice: &mut impl RollSource,
) -> Result<BatchResult> {
    config.validate()?;

    let mut player1 = Player::new(PlayerId::Player1, threshold1);
    let mut player2 = Player::new(PlayerId::Player2, threshold2);
    let mut result = BatchResult::empty(threshold1, threshold2);

    for index in 0..config.games_per_match {
        let opener = opener_for(config.start_policy, index);
        let outcome = play_game_from(
            &mut player1,
            &mut player2,
            &mut *dice,
            config.winning_score,
            opener,
        );
        result.record(outcome.winner);
    }

    debug!(
        threshold1 = %threshold1,
        threshold2 = %threshold2,
        player1_wins = result.player1_wins,
        games = result.games_played,
        "Batch complete"
    );

    debug_assert_eq!(result.player1_wins + result.player2_wins, result.games_played);
    Ok(result)
}
