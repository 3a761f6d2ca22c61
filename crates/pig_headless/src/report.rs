//! Plain-text rendering of results.
//!
//! One line per match or sweep row, percentages to one decimal place:
//!
//! ```text
//! Result: Holding at   10 vs Holding at   15: wins: 3/10 (30.0%), losses: 7/10 (70.0%)
//! Result: Wins, losses staying at k =   10: 300/990 (30.3%), 690/990 (69.7%)
//! ```

use std::fmt::Write as _;

use pig_core::batch::BatchResult;
use pig_core::game::GameLog;
use pig_core::player::PlayerId;
use pig_core::sweep::{SweepKey, SweepRecord, SweepResult};
use pig_core::turn::TurnOutcome;

use crate::batch::MatchOutcome;

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}

/// Line for one pairing of thresholds.
pub fn pair_line(threshold1: u32, threshold2: u32, wins: u32, games: u32) -> String {
    let win_percent = percent(wins, games);
    format!(
        "Result: Holding at {:>4} vs Holding at {:>4}: wins: {}/{} ({:.1}%), losses: {}/{} ({:.1}%)",
        threshold1,
        threshold2,
        wins,
        games,
        win_percent,
        games - wins,
        games,
        100.0 - win_percent,
    )
}

/// Line for one player 1 threshold summed over its opponents.
pub fn aggregate_line(threshold: u32, wins: u32, games: u32) -> String {
    let win_percent = percent(wins, games);
    format!(
        "Result: Wins, losses staying at k = {:>4}: {}/{} ({:.1}%), {}/{} ({:.1}%)",
        threshold,
        wins,
        games,
        win_percent,
        games - wins,
        games,
        100.0 - win_percent,
    )
}

/// Line for a single match.
pub fn format_batch(result: &BatchResult) -> String {
    pair_line(
        result.threshold1.get(),
        result.threshold2.get(),
        result.wins(PlayerId::Player1),
        result.games_played,
    )
}

/// Line for a sweep row.
pub fn format_record(record: &SweepRecord) -> String {
    match record.key {
        SweepKey::Pair {
            threshold1,
            threshold2,
        } => pair_line(
            threshold1.get(),
            threshold2.get(),
            record.wins,
            record.games_played,
        ),
        SweepKey::Threshold(threshold) => {
            aggregate_line(threshold.get(), record.wins, record.games_played)
        }
    }
}

/// Lines for a whole sweep, in record order.
pub fn format_sweep(result: &SweepResult) -> Vec<String> {
    result.records.iter().map(format_record).collect()
}

/// Lines for whatever a run produced.
pub fn render(outcome: &MatchOutcome) -> Vec<String> {
    match outcome {
        MatchOutcome::Single(result) => vec![format_batch(result)],
        MatchOutcome::Sweep(result) => format_sweep(result),
    }
}

/// Closing summary for a sweep: the strongest row.
pub fn sweep_summary(result: &SweepResult) -> Option<String> {
    let best = result.best()?;
    Some(format!(
        "Best: {} with {:.1}% wins over {} games",
        best.key,
        best.win_percent(),
        best.games_played
    ))
}

/// Turn-by-turn account of one game.
pub fn format_game_log(log: &GameLog) -> String {
    let mut out = String::new();
    for (i, turn) in log.turns.iter().enumerate() {
        let rolls = turn
            .rolls
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let result = match turn.outcome {
            TurnOutcome::Held(points) => format!("holds +{points}"),
            TurnOutcome::Bust => "busts".to_string(),
        };
        let _ = writeln!(
            out,
            "Turn {:>3} {}: [{}] {} -> {}",
            i + 1,
            turn.player,
            rolls,
            result,
            turn.total_after
        );
    }
    let (score1, score2) = log.outcome.final_scores;
    let _ = write!(
        out,
        "Winner: {} ({} to {}) after {} turns",
        log.outcome.winner, score1, score2, log.outcome.turns
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pig_core::game::GameOutcome;
    use pig_core::strategy::HoldThreshold;
    use pig_core::sweep::SweepKind;
    use pig_core::turn::TurnRecord;

    fn t(v: u32) -> HoldThreshold {
        HoldThreshold::new(v).unwrap()
    }

    #[test]
    fn test_pair_line_matches_classic_format() {
        assert_eq!(
            pair_line(10, 15, 3, 10),
            "Result: Holding at   10 vs Holding at   15: wins: 3/10 (30.0%), losses: 7/10 (70.0%)"
        );
    }

    #[test]
    fn test_aggregate_line_rounds_to_one_decimal() {
        assert_eq!(
            aggregate_line(10, 300, 990),
            "Result: Wins, losses staying at k =   10: 300/990 (30.3%), 690/990 (69.7%)"
        );
    }

    #[test]
    fn test_format_batch() {
        let result = BatchResult {
            threshold1: t(21),
            threshold2: t(100),
            player1_wins: 10,
            player2_wins: 0,
            games_played: 10,
        };
        assert_eq!(
            format_batch(&result),
            "Result: Holding at   21 vs Holding at  100: wins: 10/10 (100.0%), losses: 0/10 (0.0%)"
        );
    }

    #[test]
    fn test_render_sweep_rows() {
        let result = SweepResult {
            kind: SweepKind::RangeVsRange,
            records: vec![
                SweepRecord {
                    key: SweepKey::Threshold(t(1)),
                    wins: 1,
                    games_played: 20,
                },
                SweepRecord {
                    key: SweepKey::Threshold(t(2)),
                    wins: 19,
                    games_played: 20,
                },
            ],
        };

        let lines = render(&MatchOutcome::Sweep(result.clone()));
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("k =    1: 1/20 (5.0%), 19/20 (95.0%)"));
        assert_eq!(
            sweep_summary(&result).unwrap(),
            "Best: 2 with 95.0% wins over 20 games"
        );
    }

    #[test]
    fn test_empty_sweep_has_no_summary() {
        let result = SweepResult {
            kind: SweepKind::FixedVsRange,
            records: Vec::new(),
        };
        assert!(render(&MatchOutcome::Sweep(result.clone())).is_empty());
        assert!(sweep_summary(&result).is_none());
    }

    #[test]
    fn test_game_log_rendering() {
        let log = GameLog {
            turns: vec![
                TurnRecord {
                    player: PlayerId::Player1,
                    rolls: vec![6, 1],
                    outcome: TurnOutcome::Bust,
                    total_after: 0,
                },
                TurnRecord {
                    player: PlayerId::Player2,
                    rolls: vec![4, 6],
                    outcome: TurnOutcome::Held(10),
                    total_after: 10,
                },
            ],
            outcome: GameOutcome {
                winner: PlayerId::Player2,
                turns: 2,
                final_scores: (0, 10),
            },
        };

        let text = format_game_log(&log);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Turn   1 player1: [6 1] busts -> 0");
        assert_eq!(lines[1], "Turn   2 player2: [4 6] holds +10 -> 10");
        assert_eq!(lines[2], "Winner: player2 (0 to 10) after 2 turns");
    }
}
