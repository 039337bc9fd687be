//! Benchmarks for the Strongin search: sequential against parallel
//! characteristic evaluation, on a cheap and on an artificially expensive
//! objective.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use strongin::{minimize, StronginOptions};

/// Weighted sum of inverse quadratics with wells of distinct depths.
fn shekel(x: f64) -> f64 {
    const ROWS: [[f64; 3]; 10] = [
        [0.394344, 1.393876, 0.126179],
        [0.295838, 0.655881, 0.087775],
        [0.635375, 1.040491, 0.075923],
        [0.225777, 1.296672, 0.086019],
        [0.570740, 0.247111, 0.034143],
        [0.448298, 0.509802, 0.156708],
        [0.944544, 0.396264, 0.072744],
        [0.577814, 1.345561, 0.065791],
        [0.927328, 0.385115, 0.176967],
        [0.500884, 2.850398, 0.030718],
    ];
    -ROWS
        .iter()
        .map(|c| 1.0 / (c[0] * (x - c[1]) * (x - c[1]) + c[2]))
        .sum::<f64>()
}

/// Shekel with busywork bolted on, standing in for a costly simulation.
fn expensive_shekel(x: f64) -> f64 {
    let mut extra = 0.0;
    for _ in 0..2_000 {
        extra += (x.sin() * x.cos()).abs();
    }
    shekel(x) + extra * 1e-18
}

fn opts(parallel: bool) -> StronginOptions {
    StronginOptions {
        reliability: 2.0,
        tolerance: 1e-5,
        parallel,
        min_parallel_intervals: 1,
        ..Default::default()
    }
}

fn bench_sequential(c: &mut Criterion) {
    c.bench_function("shekel_sequential", |b| {
        b.iter(|| minimize(black_box(shekel), (0.0, 4.0), opts(false)).unwrap())
    });
}

fn bench_parallel(c: &mut Criterion) {
    c.bench_function("shekel_parallel", |b| {
        b.iter(|| minimize(black_box(shekel), (0.0, 4.0), opts(true)).unwrap())
    });
}

fn bench_expensive_sequential(c: &mut Criterion) {
    c.bench_function("expensive_shekel_sequential", |b| {
        b.iter(|| minimize(black_box(expensive_shekel), (0.0, 4.0), opts(false)).unwrap())
    });
}

fn bench_expensive_parallel(c: &mut Criterion) {
    c.bench_function("expensive_shekel_parallel", |b| {
        b.iter(|| minimize(black_box(expensive_shekel), (0.0, 4.0), opts(true)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_sequential,
    bench_parallel,
    bench_expensive_sequential,
    bench_expensive_parallel
);
criterion_main!(benches);
