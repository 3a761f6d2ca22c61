//! Headless runner for Pig strategy matches and threshold sweeps.
//!
//! This crate wraps [`pig_core`] with everything a command-line run needs:
//!
//! - **Invocation parsing**: turn two strategy tokens into a match or a sweep
//! - **Parallel sweeps**: one rayon task per pairing, each with its own seeded die
//! - **Reporting**: the classic one-line-per-result text output plus JSON reports
//! - **Settings**: RON files for game configuration, overridden by flags
//!
//! # Example
//!
//! ```bash
//! # Holding at 10 against holding at 15
//! cargo run -p pig_headless -- 10 15
//!
//! # Holding at 21 against every other threshold
//! cargo run -p pig_headless -- 21 1-100
//!
//! # Every threshold against every other, aggregated per threshold
//! cargo run -p pig_headless -- 1-100 1-100 --json results/sweep.json
//!
//! # Watch a single game
//! cargo run -p pig_headless -- play 20 25 --seed 7
//! ```

pub mod batch;
pub mod error;
pub mod invocation;
pub mod report;
pub mod settings;

pub use batch::{
    play_single, run_invocation, run_match, run_sweep_parallel, verify_determinism, BatchConfig,
    MatchOutcome, SweepProgress, SweepReport,
};
pub use error::HeadlessError;
pub use invocation::{Invocation, Work};
pub use settings::{Settings, SettingsError};
