//! Per-interval search characteristics.
//!
//! The numerically delicate heart of the method: given the current trial set,
//! annotate every interval between consecutive trials with its empirical
//! slope M_i and its characteristic R_i, and derive the scalar `m` (the
//! reliability-scaled Lipschitz estimate) that both quantities are read
//! against.
//!
//! Two passes per call:
//!
//! 1. **Slope pass**: `M_i = |f_hi − f_lo| / (x_hi − x_lo)` per interval,
//!    then `M = max(M_i)` and `m = r·M` (or `m = 1` while the sampled
//!    function is still flat). `m` is never zero or negative.
//! 2. **Characteristic pass**: R_i per interval, reading `m`.
//!
//! The passes cannot be fused because every R_i reads the global `m`, which
//! is only known once all slopes are in. In the parallel variant each pass is
//! a rayon map over disjoint intervals and the `collect()` between them is
//! the synchronization barrier; the `M` reduction, the domain check, and the
//! formulas themselves are the same code as the sequential variant, so both
//! produce bit-identical annotations.

use rayon::prelude::*;

use crate::error::{Result, StronginError};
use crate::trials::{Trial, TrialSet};

/// One interval between consecutive trials, annotated for this iteration.
///
/// Intervals are derived fresh from the trial set every iteration and never
/// outlive it; nothing here is mutated incrementally.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Left endpoint trial.
    pub lower: Trial,

    /// Right endpoint trial.
    pub upper: Trial,

    /// Empirical relative first-difference magnitude M_i over this interval.
    pub slope: f64,

    /// Search characteristic R_i: the larger it is, the more likely the
    /// global minimum lies in this interval.
    pub characteristic: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.upper.x - self.lower.x
    }
}

/// Annotated interval list plus the scalar `m` it was scored against.
#[derive(Debug, Clone)]
pub struct Characteristics {
    pub intervals: Vec<Interval>,
    pub m: f64,
}

/// `M_i = |f_hi − f_lo| / (x_hi − x_lo)`. Positive denominator by the
/// trial-set ordering invariant.
fn local_slope(lower: Trial, upper: Trial) -> f64 {
    (upper.f - lower.f).abs() / (upper.x - lower.x)
}

/// Characteristic R of one interval.
///
/// Boundary intervals have no neighbor on one side to bound the estimated
/// minimum, so they are scored asymmetrically, favoring exploration near the
/// domain edges. A single initial interval spanning the whole domain scores
/// through the leftmost branch.
fn characteristic(lower: Trial, upper: Trial, bounds: (f64, f64), m: f64) -> f64 {
    let width = upper.x - lower.x;
    if lower.x == bounds.0 {
        2.0 * width - 4.0 * upper.f / m
    } else if upper.x == bounds.1 {
        2.0 * width - 4.0 * lower.f / m
    } else {
        width + (upper.f - lower.f) * (upper.f - lower.f) / (m * m * width)
            - 2.0 * (upper.f + lower.f) / m
    }
}

/// Validate the slope pass and derive `m`.
///
/// The scan runs ascending so that, when several slopes are bad at once, the
/// reported interval does not depend on the execution mode.
fn interpret_slopes(pairs: &[(Trial, Trial)], slopes: &[f64], reliability: f64) -> Result<f64> {
    if let Some(i) = slopes.iter().position(|s| !(*s >= 0.0)) {
        let (lower, upper) = pairs[i];
        return Err(StronginError::NegativeSlope {
            lower: lower.x,
            upper: upper.x,
        });
    }
    let max = slopes.iter().fold(0.0_f64, |acc, &s| acc.max(s));
    Ok(if max == 0.0 { 1.0 } else { reliability * max })
}

fn assemble(
    pairs: Vec<(Trial, Trial)>,
    slopes: Vec<f64>,
    characteristics: Vec<f64>,
    m: f64,
) -> Characteristics {
    let intervals = pairs
        .into_iter()
        .zip(slopes)
        .zip(characteristics)
        .map(|(((lower, upper), slope), characteristic)| Interval {
            lower,
            upper,
            slope,
            characteristic,
        })
        .collect();
    Characteristics { intervals, m }
}

/// Annotate every interval of the trial set, sequentially.
///
/// Pure function of its inputs: no objective evaluation happens here, only
/// reads of values already cached on the trials.
pub fn annotate(trials: &TrialSet, bounds: (f64, f64), reliability: f64) -> Result<Characteristics> {
    let pairs: Vec<(Trial, Trial)> = trials.pairs().collect();

    let slopes: Vec<f64> = pairs
        .iter()
        .map(|&(lower, upper)| local_slope(lower, upper))
        .collect();
    let m = interpret_slopes(&pairs, &slopes, reliability)?;

    let characteristics: Vec<f64> = pairs
        .iter()
        .map(|&(lower, upper)| characteristic(lower, upper, bounds, m))
        .collect();

    Ok(assemble(pairs, slopes, characteristics, m))
}

/// Annotate every interval of the trial set, fanning the two per-interval
/// maps out over the current rayon pool.
///
/// Each interval's derived values are written by exactly one worker (its
/// output slot in the collected vector); the reduction of `M` and the domain
/// check run single-threaded on identical inputs, so the result is
/// bit-identical to [`annotate`].
pub fn annotate_parallel(
    trials: &TrialSet,
    bounds: (f64, f64),
    reliability: f64,
) -> Result<Characteristics> {
    let pairs: Vec<(Trial, Trial)> = trials.pairs().collect();

    // Slope pass: embarrassingly parallel map, no cross-interval dependency.
    let slopes: Vec<f64> = pairs
        .par_iter()
        .map(|&(lower, upper)| local_slope(lower, upper))
        .collect();

    // Barrier: `m` is only known once every slope is in.
    let m = interpret_slopes(&pairs, &slopes, reliability)?;

    // Characteristic pass: every worker reads the now-fixed `m`.
    let characteristics: Vec<f64> = pairs
        .par_iter()
        .map(|&(lower, upper)| characteristic(lower, upper, bounds, m))
        .collect();

    Ok(assemble(pairs, slopes, characteristics, m))
}
