//! Criterion benchmarks for whole simulation runs.

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::{reference_profile, stress_profile, ternary_profile};
use strata_engine::Simulation;
use strata_render::{Glyphs, GrayscaleRenderer, TextSink};

fn bench_run_10k(c: &mut Criterion) {
    let sim = Simulation::new(reference_profile(42)).unwrap();

    c.bench_function("run_10k_x100", |b| {
        b.iter(|| {
            let result = sim.run().unwrap();
            std::hint::black_box(&result);
        });
    });
}

fn bench_run_100k_parallel(c: &mut Criterion) {
    let sim = Simulation::new(stress_profile(42)).unwrap();

    c.bench_function("run_100k_x100_parallel", |b| {
        b.iter(|| {
            let result = sim.run().unwrap();
            std::hint::black_box(&result);
        });
    });
}

fn bench_run_ternary_10k(c: &mut Criterion) {
    let sim = Simulation::new(ternary_profile(42)).unwrap();

    c.bench_function("run_ternary_10k_x100", |b| {
        b.iter(|| {
            let result = sim.run().unwrap();
            std::hint::black_box(&result);
        });
    });
}

fn bench_render_10k(c: &mut Criterion) {
    let field = Simulation::new(reference_profile(42))
        .unwrap()
        .run()
        .unwrap()
        .field;
    let renderer = GrayscaleRenderer::new(1);

    c.bench_function("render_gray_10k_x100", |b| {
        b.iter(|| {
            let img = renderer.render(&field).unwrap();
            std::hint::black_box(&img);
        });
    });

    c.bench_function("render_text_10k_x100", |b| {
        b.iter(|| {
            let mut sink = TextSink::new(std::io::sink(), Glyphs::DIGITS);
            strata_core::FieldSink::consume(&mut sink, &field).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_run_10k,
    bench_run_100k_parallel,
    bench_run_ternary_10k,
    bench_render_10k
);
criterion_main!(benches);
