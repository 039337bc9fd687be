//! Parallel stress test for the Strongin search.
//!
//! The per-interval characteristic computation is cheap, so parallelism only
//! pays off once the interval list is long. This driver runs a tight
//! tolerance (thousands of intervals by the end of the run) across worker
//! counts and reports wall-clock times.
//!
//! Run with: cargo run --example parallel_stress_test --release

use std::time::Instant;

use strongin::{Strongin, StronginOptions};

/// Oscillatory objective with a slight downward trend; thousands of local
/// minima over the domain keep the interval list growing.
fn rippled(x: f64) -> f64 {
    (40.0 * x).sin() * 0.3 + (7.0 * x).cos() * 0.5 + 0.02 * (x - 6.0) * (x - 6.0)
}

fn run(parallel: bool, num_threads: usize) -> (f64, f64, usize, std::time::Duration) {
    let opts = StronginOptions {
        reliability: 3.0,
        tolerance: 1e-7,
        max_iterations: 200_000,
        parallel,
        num_threads,
        ..Default::default()
    };
    let mut solver = Strongin::new(rippled, (0.0, 12.0), opts).expect("valid parameters");

    let start = Instant::now();
    let result = solver.minimize().expect("search converges");
    (result.x, result.fun, result.nit, start.elapsed())
}

fn main() {
    println!("Strongin search stress test, eps = 1e-7 on [0, 12]\n");

    let (x, fun, nit, elapsed) = run(false, 0);
    println!("sequential         x = {x:.8}  f = {fun:.8}  nit = {nit}  in {elapsed:.2?}");
    let baseline = elapsed;

    for workers in [2, 4, 8] {
        let (px, pfun, pnit, pelapsed) = run(true, workers);
        assert_eq!(px.to_bits(), x.to_bits(), "modes diverged");
        assert_eq!(pnit, nit);
        let speedup = baseline.as_secs_f64() / pelapsed.as_secs_f64();
        println!(
            "parallel x{workers:<2}        x = {px:.8}  f = {pfun:.8}  nit = {pnit}  in {pelapsed:.2?}  ({speedup:.2}x)"
        );
    }
}
