#![cfg(feature = "trace")]

//! Line-by-line comparison of sequential and parallel iteration traces.
//!
//! Stronger than comparing final results: every iteration's `m`, selected
//! interval, and split point must match, proving the parallel mode walks the
//! exact same search trajectory.
//!
//! Run with: cargo test --features trace --test test_trace_comparison

use strongin::trace::TraceWriter;
use strongin::{Strongin, StronginOptions};

fn traced_run(parallel: bool) -> Vec<String> {
    let opts = StronginOptions {
        reliability: 2.5,
        tolerance: 1e-5,
        parallel,
        num_threads: if parallel { 4 } else { 0 },
        min_parallel_intervals: 1,
        ..Default::default()
    };
    let mut solver = Strongin::new(
        |x: f64| (3.0 * x).sin() / (1.0 + 0.2 * x) + 0.1 * (x - 3.0).abs(),
        (0.0, 7.0),
        opts,
    )
    .unwrap();
    solver.tracer = Some(TraceWriter::new());
    solver.minimize().unwrap();
    solver.tracer.as_ref().unwrap().lines()
}

#[test]
fn test_sequential_and_parallel_traces_are_identical() {
    let serial = traced_run(false);
    let parallel = traced_run(true);

    assert_eq!(serial.len(), parallel.len(), "trace length mismatch");
    for (i, (s, p)) in serial.iter().zip(parallel.iter()).enumerate() {
        assert_eq!(s, p, "trace diverges at line {i}");
    }
}

#[test]
fn test_trace_records_every_iteration() {
    let lines = traced_run(false);
    assert!(lines[0].starts_with("TRACE INIT"));
    assert!(lines.last().unwrap().starts_with("TRACE DONE"));

    let iters = lines.iter().filter(|l| l.starts_with("TRACE ITER")).count();
    let selects = lines
        .iter()
        .filter(|l| l.starts_with("TRACE SELECT"))
        .count();
    assert_eq!(iters, selects, "one selection per iteration");
    assert!(iters > 0);
}

#[test]
fn test_each_split_lands_inside_its_interval() {
    // Parse lo/hi/xk back out of the SELECT lines; {:.17e} round-trips f64.
    for line in traced_run(false) {
        if !line.starts_with("TRACE SELECT") {
            continue;
        }
        let field = |key: &str| -> f64 {
            line.split_whitespace()
                .find_map(|tok| tok.strip_prefix(key))
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| panic!("missing {key} in {line}"))
        };
        let (lo, hi, xk) = (field("lo="), field("hi="), field("xk="));
        assert!(lo < hi, "bad interval in {line}");
        assert!(
            xk > lo && xk < hi,
            "split point escaped its interval in {line}"
        );
    }
}
