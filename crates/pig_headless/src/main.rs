//! Pig strategy simulator.
//!
//! # Usage
//!
//! ```bash
//! # Holding at 10 against holding at 15, ten games
//! pig 10 15
//!
//! # Holding at 21 against every other threshold, 1000 games per pairing
//! pig 21 1-100 --games 1000 --seed 42
//!
//! # Every threshold against every other, aggregated per threshold
//! pig 1-100 1-100 --parallel 8 --json results/sweep.json
//!
//! # One game, turn by turn
//! pig play 20 25 --seed 7
//!
//! # Same seed, same result
//! pig verify 10 15 --runs 5
//! ```
//!
//! Result lines go to stdout, logs to stderr. Invalid strategies exit with
//! status 2.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pig_core::config::StartPolicy;
use pig_headless::{
    batch::{play_single, run_invocation, verify_determinism, BatchConfig},
    invocation::Invocation,
    report, HeadlessError, MatchOutcome, Settings,
};

/// Seed for `verify` when neither flag nor settings give one.
const VERIFY_SEED: u64 = 12345;

#[derive(Parser)]
#[command(name = "pig")]
#[command(about = "Simulate the dice game Pig between hold-at-threshold strategies")]
#[command(version, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Player 1 strategy: a threshold (1-100) or a range such as 1-100
    p1: Option<String>,

    /// Player 2 strategy: a threshold (1-100) or a range such as 1-100
    p2: Option<String>,

    #[command(flatten)]
    options: RunOptions,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game and print every turn
    Play {
        /// Player 1 hold threshold
        p1: String,

        /// Player 2 hold threshold
        p2: String,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Verify determinism by running the same seed multiple times
    Verify {
        /// Player 1 hold threshold
        p1: String,

        /// Player 2 hold threshold
        p2: String,

        /// Number of verification runs
        #[arg(short, long, default_value = "5")]
        runs: u32,

        #[command(flatten)]
        options: RunOptions,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct RunOptions {
    /// Games per match (default 10)
    #[arg(short = 'n', long)]
    games: Option<u32>,

    /// Score needed to win a game (default 100)
    #[arg(long)]
    winning_score: Option<u32>,

    /// Random seed (default: taken from the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for sweeps (0 = auto)
    #[arg(short, long)]
    parallel: Option<u32>,

    /// Alternate the opening player between games
    #[arg(long)]
    alternate_start: bool,

    /// RON settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl RunOptions {
    /// Settings file first, then flags on top.
    fn settings(&self) -> Result<Settings, HeadlessError> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading settings from: {}", path.display());
                Settings::load(path)?
            }
            None => Settings::default(),
        };

        if let Some(games) = self.games {
            settings.game.games_per_match = games;
        }
        if let Some(score) = self.winning_score {
            settings.game.winning_score = score;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if self.alternate_start {
            settings.game.start_policy = StartPolicy::Alternate;
        }
        Ok(settings)
    }

    fn batch_config(&self) -> Result<BatchConfig, HeadlessError> {
        Ok(BatchConfig::from_settings(&self.settings()?))
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs to stderr, results to stdout
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    let result = match cli.command {
        Some(Commands::Play { p1, p2, options }) => cmd_play(&p1, &p2, &options),
        Some(Commands::Verify {
            p1,
            p2,
            runs,
            options,
        }) => cmd_verify(&p1, &p2, runs, &options),
        None => match (cli.p1, cli.p2) {
            (Some(p1), Some(p2)) => cmd_simulate(&p1, &p2, &cli.options),
            _ => {
                let _ = Cli::command().print_help();
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Run failed");
        eprintln!("{e}");
        std::process::exit(if e.is_input_error() { 2 } else { 1 });
    }
}

/// Run a match or a sweep and print one line per result
fn cmd_simulate(p1: &str, p2: &str, options: &RunOptions) -> Result<(), HeadlessError> {
    let invocation = Invocation::parse(p1, p2)?;
    let config = options.batch_config()?;

    tracing::info!(
        invocation = %invocation,
        games_per_match = config.game.games_per_match,
        winning_score = config.game.winning_score,
        start_policy = ?config.game.start_policy,
        seed = config.seed,
        parallel = config.parallel,
        "Run configuration"
    );

    let report = run_invocation(&invocation, &config)?;

    for line in report::render(&report.outcome) {
        println!("{line}");
    }
    if let MatchOutcome::Sweep(result) = &report.outcome {
        if let Some(summary) = report::sweep_summary(result) {
            eprintln!("{summary}");
        }
    }

    if let Some(path) = &options.json {
        report.save(path)?;
        eprintln!("Report saved to: {}", path.display());
    }
    Ok(())
}

/// Play one game and print it turn by turn
fn cmd_play(p1: &str, p2: &str, options: &RunOptions) -> Result<(), HeadlessError> {
    let (threshold1, threshold2) = Invocation::parse_single(p1, p2)?;
    let config = options.batch_config()?;
    tracing::info!(seed = config.seed, "Playing {} vs {}", threshold1, threshold2);

    let log = play_single(threshold1, threshold2, &config)?;
    println!("{}", report::format_game_log(&log));

    if let Some(path) = &options.json {
        std::fs::write(path, serde_json::to_string_pretty(&log)?)?;
        eprintln!("Game log saved to: {}", path.display());
    }
    Ok(())
}

/// Verify determinism
fn cmd_verify(p1: &str, p2: &str, runs: u32, options: &RunOptions) -> Result<(), HeadlessError> {
    let (threshold1, threshold2) = Invocation::parse_single(p1, p2)?;
    let settings = options.settings()?;
    let seed = settings.seed.unwrap_or(VERIFY_SEED);
    let config = BatchConfig::from_settings(&settings).with_seed(seed);

    tracing::info!(
        "Verifying determinism: {} vs {} with seed {} ({} runs)",
        threshold1,
        threshold2,
        seed,
        runs
    );

    if verify_determinism(threshold1, threshold2, &config, runs)? {
        eprintln!("PASS: All {runs} runs produced identical results");
        Ok(())
    } else {
        eprintln!("FAIL: Non-determinism detected!");
        std::process::exit(1);
    }
}
