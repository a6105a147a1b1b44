//! Benchmarks for streamstat accumulators and roots
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamstat::prelude::*;

// ============================================================================
// Native float accumulators
// ============================================================================

fn bench_running_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_moments");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut acc = RunningMoments::new();
        let mut x = 0.0f64;
        b.iter(|| {
            acc.add(black_box(x));
            x += 1.0;
        });
    });

    group.bench_function("variance", |b| {
        let acc: RunningMoments<f64> = (0..10_000).map(f64::from).collect();
        b.iter(|| black_box(acc.variance(Normalization::Sample)));
    });

    group.bench_function("full_pass_10k", |b| {
        let data: Vec<f64> = (0..10_000).map(f64::from).collect();
        b.iter(|| black_box(std_dev(data.iter().copied(), Normalization::Sample)));
    });

    group.finish();
}

fn bench_running_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_mean");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut acc = RunningMean::new();
        let mut x = 0.0f64;
        b.iter(|| {
            acc.add(black_box(x));
            x += 1.0;
        });
    });

    group.finish();
}

// ============================================================================
// Seeded accumulators
// ============================================================================

fn bench_seeded(c: &mut Criterion) {
    let mut group = c.benchmark_group("seeded");
    group.throughput(Throughput::Elements(1));

    group.bench_function("moments_add_i64", |b| {
        let mut acc = SeededMoments::new(0i64);
        let mut x = 0i64;
        b.iter(|| {
            acc.update(black_box(x));
            x = (x + 7) % 1000;
        });
    });

    group.bench_function("mean_full_pass_10k_i64", |b| {
        let data: Vec<i64> = (0..10_000).collect();
        b.iter(|| black_box(seeded_mean(data.iter().copied(), 0)));
    });

    group.finish();
}

// ============================================================================
// Square roots
// ============================================================================

fn bench_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots");

    group.bench_function("binary_sqrt_u64", |b| {
        let mut x = 1u64;
        b.iter(|| {
            black_box(binary_sqrt(black_box(x), &0));
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1) >> 1;
        });
    });

    group.bench_function("newton_sqrt_f64", |b| {
        let mut x = 1.0f64;
        b.iter(|| {
            black_box(newton_sqrt(black_box(x), &0.0));
            x = (x * 1.37) % 1e9 + 1.0;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_running_moments,
    bench_running_mean,
    bench_seeded,
    bench_roots
);
criterion_main!(benches);
