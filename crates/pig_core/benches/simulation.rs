//! Simulation benchmarks for pig_core.
//!
//! Run with: `cargo bench -p pig_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pig_core::prelude::*;

fn threshold(v: u32) -> HoldThreshold {
    HoldThreshold::new(v).unwrap()
}

/// Batch throughput for a few representative pairings.
pub fn batch_benchmark(c: &mut Criterion) {
    let config = GameConfig::default().with_games_per_match(1_000);
    let mut group = c.benchmark_group("run_batch_1000");

    for (h1, h2) in [(10, 15), (20, 25), (2, 90)] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{h1}v{h2}")),
            &(h1, h2),
            |b, &(h1, h2)| {
                let mut die = Die::seeded(42);
                b.iter(|| {
                    black_box(run_batch(threshold(h1), threshold(h2), &config, &mut die).unwrap())
                });
            },
        );
    }
    group.finish();
}

/// One row of the classic 1-100 sweep.
pub fn sweep_benchmark(c: &mut Criterion) {
    let config = GameConfig::default();
    let plan = SweepPlan::fixed_vs_range(threshold(21), ThresholdRange::all());

    c.bench_function("sweep_fixed_21_vs_1_100", |b| {
        let mut die = Die::seeded(7);
        b.iter(|| black_box(run_sweep(&plan, &config, &mut die).unwrap()));
    });
}

criterion_group!(benches, batch_benchmark, sweep_benchmark);
criterion_main!(benches);
