//! Criterion micro-benchmarks for single lattice steps.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use strata_bench::bench_state;
use strata_core::Alphabet;
use strata_engine::stepper::{step, step_parallel};
use strata_rule::RuleFamily;

/// Benchmark: one binary step, sequential vs parallel, across lattice sizes.
fn bench_step_binary(c: &mut Criterion) {
    let table = RuleFamily::lexicographic(Alphabet::Binary).table(30).unwrap();
    let mut group = c.benchmark_group("step_binary_rule30");

    for len in [1_000usize, 10_000, 100_000, 1_000_000] {
        let state = bench_state(len, Alphabet::Binary, 42);
        group.bench_with_input(BenchmarkId::new("sequential", len), &state, |b, s| {
            b.iter(|| std::hint::black_box(step(s, &table).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", len), &state, |b, s| {
            b.iter(|| std::hint::black_box(step_parallel(s, &table).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: one ternary step on 100K cells.
fn bench_step_ternary_100k(c: &mut Criterion) {
    let table = RuleFamily::lexicographic(Alphabet::Ternary)
        .table(12_345)
        .unwrap();
    let state = bench_state(100_000, Alphabet::Ternary, 42);

    c.bench_function("step_ternary_100k", |b| {
        b.iter(|| std::hint::black_box(step(&state, &table).unwrap()));
    });
}

criterion_group!(benches, bench_step_binary, bench_step_ternary_100k);
criterion_main!(benches);
