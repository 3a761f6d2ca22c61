//! Batch and sweep runner.
//!
//! Single matches run on one seeded die. Sweeps run their pairings in
//! parallel using rayon; pairing `i` gets a die seeded with `seed + i`, so a
//! sweep with a given seed gives the same records however many threads run
//! it.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use pig_core::batch::{run_batch, BatchResult};
use pig_core::config::GameConfig;
use pig_core::dice::Die;
use pig_core::game::{play_game_recorded, GameLog};
use pig_core::player::{Player, PlayerId};
use pig_core::strategy::HoldThreshold;
use pig_core::sweep::{SweepPlan, SweepResult};

use crate::error::HeadlessError;
use crate::invocation::{Invocation, Work};
use crate::settings::Settings;

/// Configuration for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Game rules and batch size
    pub game: GameConfig,
    /// Base seed for every die in the run
    pub seed: u64,
    /// Maximum parallel pairings (0 = use rayon default)
    pub parallel: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: 0,
            parallel: 0,
        }
    }
}

impl BatchConfig {
    /// Create config from settings, drawing a seed from the clock if none is set
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            game: settings.game,
            seed: settings.seed.unwrap_or_else(clock_seed),
            parallel: settings.parallel,
        }
    }

    /// Set games per match
    pub fn with_games(mut self, games: u32) -> Self {
        self.game.games_per_match = games;
        self
    }

    /// Set seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set worker count
    pub fn with_parallel(mut self, parallel: u32) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Seed derived from the current time.
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// Result of a single match
    Single(BatchResult),
    /// Records of a sweep
    Sweep(SweepResult),
}

impl MatchOutcome {
    /// Games simulated
    pub fn total_games(&self) -> u64 {
        match self {
            Self::Single(result) => result.games_played as u64,
            Self::Sweep(result) => result.total_games(),
        }
    }
}

/// Complete record of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// What was asked for
    pub invocation: Invocation,
    /// Configuration used
    pub config: BatchConfig,
    /// What came out
    pub outcome: MatchOutcome,
    /// Total runtime
    pub duration_seconds: f64,
}

impl SweepReport {
    /// Save report to JSON file
    pub fn save(&self, path: &Path) -> Result<(), HeadlessError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load report from JSON file
    pub fn load(path: &Path) -> Result<Self, HeadlessError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Progress tracking for sweeps
#[derive(Debug)]
pub struct SweepProgress {
    /// Total pairings
    pub total: u32,
    completed: AtomicU32,
    start_time: Instant,
}

impl SweepProgress {
    /// Create new progress tracker
    pub fn new(total: u32) -> Self {
        Self {
            total,
            completed: AtomicU32::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a finished pairing, returning the new count
    pub fn record_completion(&self) -> u32 {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Get current completion count
    pub fn current(&self) -> u32 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Get completion percentage
    pub fn percentage(&self) -> f64 {
        self.current() as f64 / self.total.max(1) as f64 * 100.0
    }

    /// Get estimated time remaining
    pub fn eta(&self) -> Duration {
        let completed = self.current();
        if completed == 0 {
            return Duration::from_secs(0);
        }

        let elapsed = self.start_time.elapsed();
        let per_pairing = elapsed.as_secs_f64() / completed as f64;
        let remaining = self.total.saturating_sub(completed);
        Duration::from_secs_f64(per_pairing * remaining as f64)
    }

    fn log_every(&self) -> u32 {
        (self.total / 10).max(1)
    }
}

/// Run whatever `invocation` asks for
pub fn run_invocation(
    invocation: &Invocation,
    config: &BatchConfig,
) -> Result<SweepReport, HeadlessError> {
    config.game.validate()?;
    let start = Instant::now();

    let outcome = match invocation.work() {
        Work::Match(threshold1, threshold2) => {
            MatchOutcome::Single(run_match(threshold1, threshold2, config)?)
        }
        Work::Sweep(plan) => MatchOutcome::Sweep(run_sweep_parallel(&plan, config)?),
    };

    let duration_seconds = start.elapsed().as_secs_f64();
    info!(
        invocation = %invocation,
        games = outcome.total_games(),
        seed = config.seed,
        "Run complete in {:.2}s",
        duration_seconds
    );

    Ok(SweepReport {
        invocation: *invocation,
        config: *config,
        outcome,
        duration_seconds,
    })
}

/// Play one match on a die seeded with `config.seed`
pub fn run_match(
    threshold1: HoldThreshold,
    threshold2: HoldThreshold,
    config: &BatchConfig,
) -> Result<BatchResult, HeadlessError> {
    let mut die = Die::seeded(config.seed);
    Ok(run_batch(threshold1, threshold2, &config.game, &mut die)?)
}

/// Play one recorded game on a die seeded with `config.seed`, player 1 opening
pub fn play_single(
    threshold1: HoldThreshold,
    threshold2: HoldThreshold,
    config: &BatchConfig,
) -> Result<GameLog, HeadlessError> {
    config.game.validate()?;
    let mut die = Die::seeded(config.seed);
    let mut player1 = Player::new(PlayerId::Player1, threshold1);
    let mut player2 = Player::new(PlayerId::Player2, threshold2);
    let log = play_game_recorded(
        &mut player1,
        &mut player2,
        &mut die,
        config.game.winning_score,
        PlayerId::Player1,
    );
    debug!(
        winner = %log.outcome.winner,
        turns = log.outcome.turns,
        "Single game finished"
    );
    Ok(log)
}

/// Run every pairing of `plan` across a rayon pool
pub fn run_sweep_parallel(
    plan: &SweepPlan,
    config: &BatchConfig,
) -> Result<SweepResult, HeadlessError> {
    config.game.validate()?;

    let progress = SweepProgress::new(plan.pairings().len() as u32);
    info!(
        kind = ?plan.kind(),
        pairings = progress.total,
        games = plan.total_games(&config.game),
        parallel = config.parallel,
        "Starting sweep"
    );

    let sweep = || -> Result<Vec<BatchResult>, HeadlessError> {
        plan.pairings()
            .par_iter()
            .enumerate()
            .map(|(i, pairing)| -> Result<BatchResult, HeadlessError> {
                let mut die = Die::seeded(config.seed.wrapping_add(i as u64));
                let result =
                    run_batch(pairing.threshold1, pairing.threshold2, &config.game, &mut die)?;

                let completed = progress.record_completion();
                if completed % progress.log_every() == 0 {
                    debug!(
                        "Progress: {}/{} ({:.0}%, eta {}s)",
                        completed,
                        progress.total,
                        progress.percentage(),
                        progress.eta().as_secs()
                    );
                }
                Ok(result)
            })
            .collect()
    };

    let results = if config.parallel > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.parallel as usize)
            .build()?
            .install(sweep)?
    } else {
        sweep()?
    };

    Ok(plan.aggregate(&results))
}

/// Verify determinism by running the same seed multiple times
pub fn verify_determinism(
    threshold1: HoldThreshold,
    threshold2: HoldThreshold,
    config: &BatchConfig,
    runs: u32,
) -> Result<bool, HeadlessError> {
    let results = (0..runs.max(1))
        .map(|_| run_match(threshold1, threshold2, config))
        .collect::<Result<Vec<_>, _>>()?;

    let first = &results[0];
    Ok(results.iter().all(|r| r == first))
}
