//! Threshold sweeps.
//!
//! A sweep plays one batch per pairing of thresholds. Two shapes exist:
//!
//! - **fixed vs range**: player 1 keeps one threshold while player 2 walks a
//!   range; one record per player 2 threshold.
//! - **range vs range**: player 1 walks a range and meets every threshold in
//!   player 2's range; wins and games are summed into one record per player 1
//!   threshold.
//!
//! Pairings with equal thresholds are never played. [`SweepPlan`] lists the
//! pairings in order so sequential and parallel runners share the skip rule
//! and the aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::{run_batch, BatchResult};
use crate::config::GameConfig;
use crate::dice::RollSource;
use crate::error::Result;
use crate::strategy::{HoldThreshold, ThresholdRange};

/// Shape of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepKind {
    /// Player 1 fixed, player 2 over a range.
    FixedVsRange,
    /// Both players over ranges, aggregated per player 1 threshold.
    RangeVsRange,
}

/// What a sweep record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepKey {
    /// A single pairing.
    Pair {
        /// Player 1's threshold.
        threshold1: HoldThreshold,
        /// Player 2's threshold.
        threshold2: HoldThreshold,
    },
    /// Player 1's threshold, summed over the opponent range.
    Threshold(HoldThreshold),
}

impl SweepKey {
    /// Player 1's threshold for this record.
    pub fn threshold1(&self) -> HoldThreshold {
        match *self {
            Self::Pair { threshold1, .. } | Self::Threshold(threshold1) => threshold1,
        }
    }
}

impl fmt::Display for SweepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair {
                threshold1,
                threshold2,
            } => write!(f, "{threshold1} vs {threshold2}"),
            Self::Threshold(t) => write!(f, "{t}"),
        }
    }
}

/// Player 1's wins for one sweep row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// Row identity.
    pub key: SweepKey,
    /// Games won by player 1.
    pub wins: u32,
    /// Games played.
    pub games_played: u32,
}

impl SweepRecord {
    /// Games lost by player 1.
    pub fn losses(&self) -> u32 {
        self.games_played - self.wins
    }

    /// Player 1's win percentage.
    pub fn win_percent(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        100.0 * self.wins as f64 / self.games_played as f64
    }

    /// Player 1's loss percentage.
    pub fn loss_percent(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        100.0 - self.win_percent()
    }
}

/// Ordered records of a finished sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Sweep shape.
    pub kind: SweepKind,
    /// One record per row, in ascending threshold order.
    pub records: Vec<SweepRecord>,
}

impl SweepResult {
    /// Total games across all records.
    pub fn total_games(&self) -> u64 {
        self.records.iter().map(|r| r.games_played as u64).sum()
    }

    /// Record with the highest player 1 win rate, earliest on ties.
    pub fn best(&self) -> Option<&SweepRecord> {
        self.records.iter().fold(None, |best, record| match best {
            Some(b) if b.win_percent() >= record.win_percent() => Some(b),
            _ => Some(record),
        })
    }
}

/// One batch to play within a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    /// Index of the row this batch contributes to.
    pub row: usize,
    /// Player 1's threshold.
    pub threshold1: HoldThreshold,
    /// Player 2's threshold.
    pub threshold2: HoldThreshold,
}

/// Ordered pairings and result rows of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    kind: SweepKind,
    rows: Vec<SweepKey>,
    pairings: Vec<Pairing>,
}

impl SweepPlan {
    /// Player 1 fixed at `fixed`, player 2 over `range`.
    pub fn fixed_vs_range(fixed: HoldThreshold, range: ThresholdRange) -> Self {
        let mut rows = Vec::new();
        let mut pairings = Vec::new();

        for threshold2 in range.iter().filter(|&t| t != fixed) {
            pairings.push(Pairing {
                row: rows.len(),
                threshold1: fixed,
                threshold2,
            });
            rows.push(SweepKey::Pair {
                threshold1: fixed,
                threshold2,
            });
        }

        Self {
            kind: SweepKind::FixedVsRange,
            rows,
            pairings,
        }
    }

    /// Player 1 over `range1`, each meeting every threshold of `range2`.
    ///
    /// A player 1 threshold with no distinct opponent gets no row.
    pub fn range_vs_range(range1: ThresholdRange, range2: ThresholdRange) -> Self {
        let mut rows = Vec::new();
        let mut pairings = Vec::new();

        for threshold1 in range1.iter() {
            let row = rows.len();
            let before = pairings.len();
            pairings.extend(
                range2
                    .iter()
                    .filter(|&t| t != threshold1)
                    .map(|threshold2| Pairing {
                        row,
                        threshold1,
                        threshold2,
                    }),
            );
            if pairings.len() > before {
                rows.push(SweepKey::Threshold(threshold1));
            }
        }

        Self {
            kind: SweepKind::RangeVsRange,
            rows,
            pairings,
        }
    }

    /// Sweep shape.
    pub fn kind(&self) -> SweepKind {
        self.kind
    }

    /// Result rows in output order.
    pub fn rows(&self) -> &[SweepKey] {
        &self.rows
    }

    /// Batches to play, grouped by row.
    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    /// Games the sweep will play under `config`.
    pub fn total_games(&self, config: &GameConfig) -> u64 {
        self.pairings.len() as u64 * config.games_per_match as u64
    }

    /// Fold batch results, given in pairing order, into sweep records.
    pub fn aggregate<'a>(&self, results: impl IntoIterator<Item = &'a BatchResult>) -> SweepResult {
        let mut records: Vec<SweepRecord> = self
            .rows
            .iter()
            .map(|&key| SweepRecord {
                key,
                wins: 0,
                games_played: 0,
            })
            .collect();

        for (pairing, result) in self.pairings.iter().zip(results) {
            let record = &mut records[pairing.row];
            record.wins += result.player1_wins;
            record.games_played += result.games_played;
        }

        SweepResult {
            kind: self.kind,
            records,
        }
    }
}

/// Play every pairing of `plan` in order on one die.
pub fn run_sweep(
    plan: &SweepPlan,
    config: &GameConfig,
    dice: &mut impl RollSource,
) -> Result<SweepResult> {
    config.validate()?;

    info!(
        kind = ?plan.kind(),
        pairings = plan.pairings().len(),
        games = plan.total_games(config),
        "Starting sweep"
    );

    let results = plan
        .pairings()
        .iter()
        .map(|p| run_batch(p.threshold1, p.threshold2, config, &mut *dice))
        .collect::<Result<Vec<_>>>()?;

    Ok(plan.aggregate(&results))
}

/// Player 1 fixed at `fixed` against every other threshold in `range`.
pub fn sweep_fixed_vs_range(
    fixed: HoldThreshold,
    range: ThresholdRange,
    config: &GameConfig,
    dice: &mut impl RollSource,
) -> Result<SweepResult> {
    run_sweep(&SweepPlan::fixed_vs_range(fixed, range), config, dice)
}

/// Every threshold in `range1` against every other threshold in `range2`.
pub fn sweep_range_vs_range(
    range1: ThresholdRange,
    range2: ThresholdRange,
    config: &GameConfig,
    dice: &mut impl RollSource,
) -> Result<SweepResult> {
    run_sweep(&SweepPlan::range_vs_range(range1, range2), config, dice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Die;

    fn t(v: u32) -> HoldThreshold {
        HoldThreshold::new(v).unwrap()
    }

    fn range(token: &str) -> ThresholdRange {
        ThresholdRange::parse(token).unwrap()
    }

    #[test]
    fn test_fixed_vs_range_skips_equal_threshold() {
        let plan = SweepPlan::fixed_vs_range(t(5), range("3-7"));
        let opponents: Vec<u32> = plan.pairings().iter().map(|p| p.threshold2.get()).collect();
        assert_eq!(opponents, vec![3, 4, 6, 7]);
        assert_eq!(plan.rows().len(), 4);
        assert_eq!(plan.kind(), SweepKind::FixedVsRange);
    }

    #[test]
    fn test_fixed_vs_single_equal_value_is_empty() {
        let only = ThresholdRange::inclusive(t(20), t(20)).unwrap();
        let plan = SweepPlan::fixed_vs_range(t(20), only);
        assert!(plan.pairings().is_empty());

        let result = run_sweep(&plan, &GameConfig::default(), &mut Die::seeded(0)).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.total_games(), 0);
    }

    #[test]
    fn test_full_range_plan_never_pairs_equal_thresholds() {
        let plan = SweepPlan::range_vs_range(ThresholdRange::all(), ThresholdRange::all());
        assert_eq!(plan.pairings().len(), 100 * 99);
        assert_eq!(plan.rows().len(), 100);
        assert!(plan.pairings().iter().all(|p| p.threshold1 != p.threshold2));
        assert_eq!(plan.total_games(&GameConfig::default()), 99_000);
    }

    #[test]
    fn test_range_vs_range_rows_are_grouped() {
        let plan = SweepPlan::range_vs_range(range("1-3"), range("2-3"));
        let rows: Vec<u32> = plan.rows().iter().map(|k| k.threshold1().get()).collect();
        assert_eq!(rows, vec![1, 2, 3]);

        let pairs: Vec<(usize, u32, u32)> = plan
            .pairings()
            .iter()
            .map(|p| (p.row, p.threshold1.get(), p.threshold2.get()))
            .collect();
        assert_eq!(pairs, vec![(0, 1, 2), (0, 1, 3), (1, 2, 3), (2, 3, 2)]);
    }

    #[test]
    fn test_range_vs_range_drops_rows_without_opponents() {
        let opponent = ThresholdRange::inclusive(t(4), t(4)).unwrap();
        let plan = SweepPlan::range_vs_range(range("3-5"), opponent);
        let rows: Vec<u32> = plan.rows().iter().map(|k| k.threshold1().get()).collect();
        assert_eq!(rows, vec![3, 5]);
    }

    #[test]
    fn test_fixed_sweep_records_one_batch_each() {
        let config = GameConfig::default();
        let result =
            sweep_fixed_vs_range(t(21), range("18-24"), &config, &mut Die::seeded(4)).unwrap();

        assert_eq!(result.kind, SweepKind::FixedVsRange);
        assert_eq!(result.records.len(), 6);
        for record in &result.records {
            assert_eq!(record.games_played, 10);
            assert!(record.wins <= 10);
            assert!(matches!(record.key, SweepKey::Pair { threshold1, .. } if threshold1 == t(21)));
        }
    }

    #[test]
    fn test_range_sweep_sums_over_opponents() {
        let config = GameConfig::default().with_games_per_match(4);
        let result =
            sweep_range_vs_range(range("10-12"), range("10-13"), &config, &mut Die::seeded(9))
                .unwrap();

        assert_eq!(result.kind, SweepKind::RangeVsRange);
        assert_eq!(result.records.len(), 3);
        for record in &result.records {
            // Four opponents minus the mirror match, four games each.
            assert_eq!(record.games_played, 12);
            assert_eq!(record.wins + record.losses(), 12);
        }
        assert_eq!(result.total_games(), 36);
    }

    #[test]
    fn test_aggregate_sums_in_pairing_order() {
        let plan = SweepPlan::range_vs_range(range("1-2"), range("1-3"));
        let batches: Vec<BatchResult> = plan
            .pairings()
            .iter()
            .enumerate()
            .map(|(i, p)| BatchResult {
                threshold1: p.threshold1,
                threshold2: p.threshold2,
                player1_wins: i as u32,
                player2_wins: 10 - i as u32,
                games_played: 10,
            })
            .collect();

        let result = plan.aggregate(&batches);
        assert_eq!(result.records[0].wins, 1);
        assert_eq!(result.records[1].wins, 5);
        assert_eq!(result.records[1].games_played, 20);
    }

    #[test]
    fn test_record_percentages_and_best() {
        let record = |t1, wins| SweepRecord {
            key: SweepKey::Threshold(t(t1)),
            wins,
            games_played: 8,
        };
        let result = SweepResult {
            kind: SweepKind::RangeVsRange,
            records: vec![record(1, 2), record(2, 6), record(3, 6)],
        };

        assert_eq!(result.records[0].win_percent(), 25.0);
        assert_eq!(result.records[0].loss_percent(), 75.0);
        assert_eq!(result.best().unwrap().key.threshold1(), t(2));
        assert_eq!(SweepKey::Threshold(t(7)).to_string(), "7");
    }

    #[test]
    fn test_empty_record_percent_is_zero() {
        let record = SweepRecord {
            key: SweepKey::Threshold(t(1)),
            wins: 0,
            games_played: 0,
        };
        assert_eq!(record.win_percent(), 0.0);
        assert_eq!(record.loss_percent(), 0.0);
    }
}
