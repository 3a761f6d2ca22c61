//! End-to-end runs through the headless library: parse, simulate, render, save.

use pig_core::prelude::*;
use pig_headless::{
    report, run_invocation, BatchConfig, HeadlessError, Invocation, MatchOutcome, Settings,
    SweepReport,
};
use pig_test_utils::fixtures::threshold;

fn run(p1: &str, p2: &str, config: &BatchConfig) -> SweepReport {
    let invocation = Invocation::parse(p1, p2).unwrap();
    run_invocation(&invocation, config).unwrap()
}

#[test]
fn test_single_match_prints_one_line() {
    let config = BatchConfig::default().with_seed(10);
    let report = run("10", "15", &config);

    let lines = report::render(&report.outcome);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Result: Holding at   10 vs Holding at   15: wins: "));
    assert!(lines[0].contains("/10 ("));
}

#[test]
fn test_fixed_vs_range_lists_each_opponent_in_order() {
    let config = BatchConfig::default().with_seed(11);
    let report = run("21", "18-24", &config);

    let MatchOutcome::Sweep(result) = &report.outcome else {
        panic!("expected a sweep");
    };
    let opponents: Vec<_> = result
        .records
        .iter()
        .map(|r| match r.key {
            SweepKey::Pair { threshold2, .. } => threshold2.get(),
            SweepKey::Threshold(_) => panic!("fixed sweeps keep pairs"),
        })
        .collect();
    assert_eq!(opponents, vec![18, 19, 20, 22, 23, 24]);
    assert!(result.records.iter().all(|r| r.games_played == 10));
}

#[test]
fn test_range_vs_range_aggregates_per_threshold() {
    let config = BatchConfig::default().with_seed(12).with_parallel(2);
    let report = run("1-10", "1-10", &config);

    let MatchOutcome::Sweep(result) = &report.outcome else {
        panic!("expected a sweep");
    };
    assert_eq!(result.kind, SweepKind::RangeVsRange);
    assert_eq!(result.records.len(), 10);
    for record in &result.records {
        // nine opponents, ten games each
        assert_eq!(record.games_played, 90);
        assert!(record.wins <= record.games_played);
    }

    let lines = report::render(&report.outcome);
    assert!(lines[0].starts_with("Result: Wins, losses staying at k =    1: "));
}

#[test]
fn test_degenerate_fixed_sweep_is_empty() {
    let only = ThresholdRange::inclusive(threshold(20), threshold(20)).unwrap();
    let plan = SweepPlan::fixed_vs_range(threshold(20), only);
    let result = pig_headless::run_sweep_parallel(&plan, &BatchConfig::default()).unwrap();
    assert!(result.records.is_empty());
    assert!(report::sweep_summary(&result).is_none());
}

#[test]
fn test_same_seed_same_report() {
    let config = BatchConfig::default().with_seed(99).with_games(50);
    let first = run("5-15", "5-15", &config.with_parallel(1));
    let second = run("5-15", "5-15", &config.with_parallel(3));
    assert_eq!(first.outcome, second.outcome);
}

#[test]
fn test_invalid_tokens_are_input_errors() {
    for (p1, p2) in [("0", "15"), ("10", "101"), ("abc-50", "1-100"), ("100-1", "1-100")] {
        let err: HeadlessError = Invocation::parse(p1, p2).unwrap_err().into();
        assert!(err.is_input_error(), "{p1} {p2}");
    }
}

#[test]
fn test_settings_file_drives_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.ron");
    std::fs::write(
        &path,
        "(game: (winning_score: 50, games_per_match: 40, start_policy: alternate), seed: Some(3))",
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    let config = BatchConfig::from_settings(&settings);
    assert_eq!(config.seed, 3);
    assert_eq!(config.game.start_policy, StartPolicy::Alternate);

    let report = run("20", "25", &config);
    let MatchOutcome::Single(result) = report.outcome else {
        panic!("expected a single match");
    };
    assert_eq!(result.games_played, 40);
    assert_eq!(result.player1_wins + result.player2_wins, 40);
}

#[test]
fn test_json_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("report.json");

    let report = run("30", "28-32", &BatchConfig::default().with_seed(4));
    report.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"fixed_vs_range\""));

    let loaded = SweepReport::load(&path).unwrap();
    assert_eq!(loaded.outcome, report.outcome);
    assert_eq!(loaded.config, report.config);
}

#[test]
fn test_loading_bad_json_is_not_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = SweepReport::load(&path).unwrap_err();
    assert!(matches!(err, HeadlessError::Json(_)));
    assert!(!err.is_input_error());
}

#[test]
fn test_oversized_config_is_rejected_before_running() {
    use pig_core::config::{MAX_GAMES_PER_MATCH, MAX_WINNING_SCORE};

    let mut huge_score = BatchConfig::default();
    huge_score.game.winning_score = MAX_WINNING_SCORE + 1;
    let err = run_invocation(&Invocation::parse("10", "15").unwrap(), &huge_score).unwrap_err();
    assert!(err.is_input_error());

    let huge_batches = BatchConfig::default().with_games(MAX_GAMES_PER_MATCH + 1);
    let plan = Invocation::parse("1-100", "1-100").unwrap().plan().unwrap();
    let err = pig_headless::run_sweep_parallel(&plan, &huge_batches).unwrap_err();
    assert!(matches!(err, HeadlessError::Simulation(PigError::InvalidConfig(_))));
}

#[test]
fn test_report_with_inverted_range_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let report = run("30", "28-32", &BatchConfig::default().with_seed(4));
    report.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let tampered = text.replacen("\"start\": 28", "\"start\": 40", 1);
    assert_ne!(text, tampered);
    std::fs::write(&path, tampered).unwrap();

    assert!(matches!(SweepReport::load(&path), Err(HeadlessError::Json(_))));
}
