//! Player and threshold fixtures.

use pig_core::player::{Player, PlayerId};
use pig_core::strategy::{HoldThreshold, ThresholdRange};

/// Threshold from a raw value.
///
/// # Panics
///
/// Panics if `value` is outside `[1, 100]`.
pub fn threshold(value: u32) -> HoldThreshold {
    HoldThreshold::new(value).unwrap_or_else(|e| panic!("bad fixture threshold: {e}"))
}

/// Range parsed from a `start-end` token.
///
/// # Panics
///
/// Panics if the token is not a valid range.
pub fn range(token: &str) -> ThresholdRange {
    ThresholdRange::parse(token).unwrap_or_else(|e| panic!("bad fixture range: {e}"))
}

/// Player 1 holding at `hold`.
pub fn player1(hold: u32) -> Player {
    Player::new(PlayerId::Player1, threshold(hold))
}

/// Player 2 holding at `hold`.
pub fn player2(hold: u32) -> Player {
    Player::new(PlayerId::Player2, threshold(hold))
}

/// Player 1 mid-game with the given scores.
pub fn player_with_scores(hold: u32, total_score: u32, turn_score: u32) -> Player {
    let mut player = player1(hold);
    player.total_score = total_score;
    player.turn_score = turn_score;
    player
}
