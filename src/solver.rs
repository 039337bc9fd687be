//! Adaptive global search driver: the iteration loop shared by the
//! sequential and parallel execution modes.
//!
//! One iteration flows one way: trial set → intervals → characteristics →
//! selected interval → new trial appended to the set. The only step the
//! parallel mode distributes is the per-interval characteristic computation
//! ([`crate::characteristics`]); selection, new-point generation, and the
//! stopping rule run single-threaded in both modes, so for a given problem
//! the two modes generate the same trial sequence and the same result.

use std::sync::Arc;

use crate::characteristics::{self, Characteristics, Interval};
use crate::error::{Result, StronginError};
use crate::trials::TrialSet;
use crate::types::{ObjectiveFn, StronginOptions, StronginResult};

/// Strongin search over a closed interval.
///
/// Holds the objective, the domain, the run options, and the evolving search
/// state (trial set, best trial seen, evaluation and iteration counters).
pub struct Strongin {
    /// Objective function. Only the control thread ever calls it; the
    /// workers read values already cached on trials.
    func: Arc<ObjectiveFn>,

    /// Left domain boundary `a`.
    lower: f64,

    /// Right domain boundary `b`.
    upper: f64,

    options: StronginOptions,

    /// All trials of the current run, ascending by abscissa. Doubles as the
    /// evaluation cache.
    trials: TrialSet,

    /// Best trial seen so far, for `NonConvergence` diagnostics.
    best_x: f64,
    best_f: f64,

    /// Total objective evaluations.
    pub nfev: usize,

    /// Total iterations.
    pub nit: usize,

    /// Dedicated worker pool when a thread count was configured; `None`
    /// falls through to rayon's global pool.
    pool: Option<rayon::ThreadPool>,

    /// Iteration trace sink.
    #[cfg(feature = "trace")]
    pub tracer: Option<crate::trace::TraceWriter>,
}

impl std::fmt::Debug for Strongin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strongin")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("options", &self.options)
            .field("nfev", &self.nfev)
            .field("nit", &self.nit)
            .finish_non_exhaustive()
    }
}

impl Strongin {
    /// Create a solver for `func` over `bounds = (a, b)`.
    ///
    /// Validation is eager and happens before any objective evaluation:
    ///
    /// # Errors
    /// - `InvalidInterval` if `a >= b` or either bound is not finite
    /// - `InvalidReliability` if `reliability <= 1`
    /// - `InvalidTolerance` if `tolerance <= 0`
    /// - `InvalidIterationLimit` if `max_iterations == 0`
    /// - `WorkerPool` if the dedicated rayon pool cannot be built
    pub fn new(
        func: impl Fn(f64) -> f64 + Send + Sync + 'static,
        bounds: (f64, f64),
        options: StronginOptions,
    ) -> Result<Self> {
        let (lower, upper) = bounds;
        if !(lower < upper) || !lower.is_finite() || !upper.is_finite() {
            return Err(StronginError::InvalidInterval { lower, upper });
        }
        if !(options.reliability > 1.0) {
            return Err(StronginError::InvalidReliability(options.reliability));
        }
        if !(options.tolerance > 0.0) {
            return Err(StronginError::InvalidTolerance(options.tolerance));
        }
        if options.max_iterations == 0 {
            return Err(StronginError::InvalidIterationLimit);
        }

        let pool = if options.parallel && options.num_threads > 0 {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(options.num_threads)
                    .build()
                    .map_err(|e| StronginError::WorkerPool(e.to_string()))?,
            )
        } else {
            None
        };

        Ok(Self {
            func: Arc::new(func),
            lower,
            upper,
            options,
            trials: TrialSet::new(),
            best_x: f64::NAN,
            best_f: f64::INFINITY,
            nfev: 0,
            nit: 0,
            pool,
            #[cfg(feature = "trace")]
            tracer: None,
        })
    }

    /// Objective value at `x`: the cached trial value when `x` was already
    /// sampled, one fresh evaluation otherwise. Every distinct abscissa is
    /// evaluated at most once per run.
    fn evaluate(&mut self, x: f64) -> f64 {
        if let Some(f) = self.trials.value_at(x) {
            return f;
        }
        let f = (self.func)(x);
        self.nfev += 1;
        if f < self.best_f {
            self.best_f = f;
            self.best_x = x;
        }
        f
    }

    /// Score the current intervals, dispatching to the configured execution
    /// mode. Short interval lists take the serial path even in parallel mode;
    /// both paths produce bit-identical annotations.
    fn annotate(&self) -> Result<Characteristics> {
        let bounds = (self.lower, self.upper);
        let r = self.options.reliability;
        if self.options.parallel && self.trials.interval_count() >= self.options.min_parallel_intervals
        {
            match &self.pool {
                Some(pool) => pool.install(|| characteristics::annotate_parallel(&self.trials, bounds, r)),
                None => characteristics::annotate_parallel(&self.trials, bounds, r),
            }
        } else {
            characteristics::annotate(&self.trials, bounds, r)
        }
    }

    /// New trial abscissa inside the winning interval.
    ///
    /// An interval touching exactly one domain boundary is bisected: there is
    /// no neighbor on the boundary side to support the slope correction. All
    /// other intervals are bisected with a correction toward the side with
    /// the lower sampled value, scaled by the confidence estimate `m`.
    fn split_point(&self, interval: &Interval, m: f64) -> f64 {
        let Interval { lower, upper, .. } = *interval;
        let mid = 0.5 * (lower.x + upper.x);
        if (lower.x == self.lower) ^ (upper.x == self.upper) {
            return mid;
        }
        let corrected =
            mid - (upper.f - lower.f) / (2.0 * self.options.reliability * m);
        if corrected > lower.x && corrected < upper.x {
            corrected
        } else {
            // r > 1 bounds the correction strictly inside the interval in
            // exact arithmetic; only floating collapse lands here.
            mid
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the most recently resolved point: the split point of the
    /// interval whose width fell below the tolerance, with its objective
    /// value (cached if that abscissa was already sampled).
    ///
    /// # Errors
    /// - `NegativeSlope` if a relative first difference comes out negative
    ///   or NaN (misbehaving objective)
    /// - `NonConvergence` if the iteration ceiling trips first; carries the
    ///   best trial seen
    pub fn minimize(&mut self) -> Result<StronginResult> {
        self.trials = TrialSet::with_capacity(self.options.max_iterations.min(65_534) + 2);
        self.best_x = f64::NAN;
        self.best_f = f64::INFINITY;
        self.nfev = 0;
        self.nit = 0;

        let fa = self.evaluate(self.lower);
        self.trials.insert(self.lower, fa);
        let fb = self.evaluate(self.upper);
        self.trials.insert(self.upper, fb);

        crate::trace_write!(
            self.tracer,
            "TRACE INIT a={:.17e} fa={:.17e} b={:.17e} fb={:.17e}",
            self.lower,
            fa,
            self.upper,
            fb
        );

        while self.nit < self.options.max_iterations {
            self.nit += 1;

            let chars = self.annotate()?;
            crate::trace_write!(
                self.tracer,
                "TRACE ITER t={} m={:.17e} intervals={}",
                self.nit,
                chars.m,
                chars.intervals.len()
            );

            let winner = chars.intervals[select_max_characteristic(&chars.intervals)];
            let xk = self.split_point(&winner, chars.m);
            crate::trace_write!(
                self.tracer,
                "TRACE SELECT t={} lo={:.17e} hi={:.17e} r={:.17e} xk={:.17e}",
                self.nit,
                winner.lower.x,
                winner.upper.x,
                winner.characteristic,
                xk
            );

            // Stopping rule: the width of the interval that was just chosen
            // for refinement, not a global minimum-width or best-value test.
            if winner.width() < self.options.tolerance {
                return Ok(self.finish(xk));
            }

            if xk <= winner.lower.x || xk >= winner.upper.x {
                // The winner has collapsed to adjacent floats: no
                // representable interior point is left to place a trial at.
                return Ok(self.finish(xk));
            }

            let fk = self.evaluate(xk);
            let inserted = self.trials.insert(xk, fk);
            debug_assert!(inserted, "split point must be a new abscissa");
        }

        Err(StronginError::NonConvergence {
            x: self.best_x,
            fun: self.best_f,
            nit: self.nit,
            nfev: self.nfev,
        })
    }

    fn finish(&mut self, x: f64) -> StronginResult {
        let fun = self.evaluate(x);
        crate::trace_write!(
            self.tracer,
            "TRACE DONE t={} x={:.17e} fun={:.17e} nfev={}",
            self.nit,
            x,
            fun,
            self.nfev
        );
        StronginResult {
            x,
            fun,
            nfev: self.nfev,
            nit: self.nit,
        }
    }
}

/// Index of the interval with the largest characteristic. Exact ties go to
/// the first interval in ascending-abscissa order; the strict `>` keeps the
/// scan deterministic across execution modes.
fn select_max_characteristic(intervals: &[Interval]) -> usize {
    let mut best = 0;
    for i in 1..intervals.len() {
        if intervals[i].characteristic > intervals[best].characteristic {
            best = i;
        }
    }
    best
}

/// One-call convenience wrapper around [`Strongin::new`] + [`Strongin::minimize`].
pub fn minimize(
    func: impl Fn(f64) -> f64 + Send + Sync + 'static,
    bounds: (f64, f64),
    options: StronginOptions,
) -> Result<StronginResult> {
    Strongin::new(func, bounds, options)?.minimize()
}
