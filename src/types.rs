//! Core type definitions: objective signature, run options, and result.

use std::fmt;

// ──────────────────────────────────────────────────────────────────────────────
// Type Aliases
// ──────────────────────────────────────────────────────────────────────────────

/// Objective function signature.
///
/// A one-dimensional real function `x -> f(x)`. Evaluation is assumed to be
/// the expensive primitive; the solver calls it at most once per distinct
/// abscissa and caches the value on the trial. `Send + Sync` so a stateful
/// evaluator shared by the caller stays safe to hold across the solver's
/// worker pool, even though only the control thread ever invokes it.
pub type ObjectiveFn = dyn Fn(f64) -> f64 + Send + Sync;

// ──────────────────────────────────────────────────────────────────────────────
// Options
// ──────────────────────────────────────────────────────────────────────────────

/// Configuration options for the Strongin search.
///
/// The search interval `(a, b)` is passed to [`crate::Strongin::new`]
/// separately; everything else about a run lives here. Immutable once the
/// solver is constructed.
#[derive(Debug, Clone)]
pub struct StronginOptions {
    /// Reliability coefficient `r > 1` applied to the adaptive Lipschitz
    /// estimate. Larger values trust the global slope estimate over local
    /// detail: the search becomes more conservative and explores more.
    /// Smaller values make it more locally greedy. Default: 2.0.
    pub reliability: f64,

    /// Positional tolerance `eps > 0`: the search stops once the interval it
    /// just chose to refine is narrower than this. Default: 1e-4.
    pub tolerance: f64,

    /// Iteration ceiling guarding against objectives that violate the
    /// Lipschitz assumption (discontinuities can keep the slope estimate
    /// oscillating without the winning interval shrinking below `tolerance`).
    /// Exceeding it fails the run with `NonConvergence`. Must be positive.
    /// Default: 10 000.
    pub max_iterations: usize,

    /// Compute per-interval slopes and characteristics on a rayon worker
    /// pool. Selection and new-point generation stay single-threaded, so
    /// results are bit-identical to the sequential mode. Default: false.
    pub parallel: bool,

    /// Degree of parallelism: number of worker threads in the dedicated pool.
    /// 0 uses rayon's default (available hardware parallelism), matching
    /// rayon's own `num_threads` convention. Ignored unless `parallel` is
    /// set. Default: 0.
    pub num_threads: usize,

    /// Minimum number of intervals required to take the parallel path. Below
    /// this the serial path is used even when `parallel` is set: rayon task
    /// spawns cost on the order of microseconds each, and a per-interval
    /// characteristic costs a handful of flops, so short interval lists are
    /// faster to score in place. The fallback is observationally invisible
    /// because both paths produce bit-identical annotations.
    /// Default: 64.
    pub min_parallel_intervals: usize,
}

impl Default for StronginOptions {
    fn default() -> Self {
        Self {
            reliability: 2.0,
            tolerance: 1e-4,
            max_iterations: 10_000,
            parallel: false,
            num_threads: 0,
            min_parallel_intervals: 64,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────────────────────────

/// Result of a completed search.
///
/// `x`/`fun` are the most recently resolved point: the split point of the
/// interval whose width fell below the tolerance. The algorithm does not
/// claim this is the best trial of the whole run; callers that want the
/// best-seen pair over every evaluation can track it through their objective
/// closure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StronginResult {
    /// Estimated minimizer location.
    pub x: f64,

    /// Objective value at `x`.
    pub fun: f64,

    /// Total number of objective evaluations.
    pub nfev: usize,

    /// Total number of iterations.
    pub nit: usize,
}

impl fmt::Display for StronginResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StronginResult {{")?;
        writeln!(f, "  x: {:.15e}", self.x)?;
        writeln!(f, "  fun: {:.15e}", self.fun)?;
        writeln!(f, "  nfev: {}", self.nfev)?;
        writeln!(f, "  nit: {}", self.nit)?;
        write!(f, "}}")
    }
}
