//! # Pig Core
//!
//! Simulation engine for the dice game Pig played between fixed
//! hold-threshold strategies.
//!
//! This crate contains **only** simulation logic:
//! - No IO
//! - No global randomness (every die owns an injected, seedable RNG)
//! - No threads (callers parallelise with one die per worker)
//!
//! ## Crate Structure
//!
//! - [`dice`] - The six-sided die and the [`dice::RollSource`] seam
//! - [`strategy`] - Hold thresholds, threshold ranges and decisions
//! - [`player`] - Players and per-game score state
//! - [`turn`] - The turn engine
//! - [`game`] - The game loop
//! - [`batch`] - Batches of games between two thresholds
//! - [`sweep`] - Sweeps across threshold ranges
//! - [`config`] - Winning score, games per match, opening player

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod player;
pub mod strategy;
pub mod sweep;
pub mod turn;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::batch::{run_batch, BatchResult};
    pub use crate::config::{GameConfig, StartPolicy};
    pub use crate::dice::{Die, RollSource};
    pub use crate::error::{PigError, RangeFault, Result};
    pub use crate::game::{play_game, GameLog, GameOutcome, GameState};
    pub use crate::player::{Player, PlayerId};
    pub use crate::strategy::{Decision, HoldThreshold, StrategySpec, ThresholdRange};
    pub use crate::sweep::{
        run_sweep, sweep_fixed_vs_range, sweep_range_vs_range, SweepKey, SweepKind, SweepPlan,
        SweepRecord, SweepResult,
    };
    pub use crate::turn::{play_turn, TurnOutcome, TurnRecord};
}
