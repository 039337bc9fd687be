//! # strongin: Information-Statistical Global Search in Rust
//!
//! A Rust implementation of Strongin's information-statistical algorithm for
//! global optimization of a one-dimensional, Lipschitz-continuous black-box
//! function over a closed interval, with rayon parallelization where
//! appropriate.
//!
//! ## Overview
//!
//! The method maintains an ordered set of trials (sampled abscissas with
//! cached objective values). Each iteration it scores every interval between
//! consecutive trials with a *characteristic* R — an estimate of how likely
//! that interval is to contain the global minimum — selects the interval with
//! the largest characteristic, and places one new trial inside it. The
//! Lipschitz constant is never supplied by the caller; it is estimated
//! adaptively from the sampled relative first differences, scaled by a
//! reliability coefficient `r > 1`.
//!
//! Two execution modes are provided:
//!
//! - **Sequential**: every per-interval computation runs on the calling thread.
//! - **Parallel**: the per-interval slope and characteristic passes are
//!   distributed over a bounded rayon worker pool. Selection, new-point
//!   generation, and the stopping rule stay single-threaded, so both modes
//!   produce bit-identical results.
//!
//! ## Example
//!
//! ```
//! use strongin::{Strongin, StronginOptions};
//!
//! let mut solver = Strongin::new(
//!     |x| (x - 2.0) * (x - 2.0),
//!     (0.0, 4.0),
//!     StronginOptions::default(),
//! )
//! .unwrap();
//! let result = solver.minimize().unwrap();
//! assert!((result.x - 2.0).abs() < 1e-3);
//! ```
//!
//! ## References
//!
//! - Strongin, R.G. "Numerical Methods in Multiextremal Problems
//!   (Information-Statistical Algorithms)." Nauka, Moscow (1978).
//! - Strongin, R.G. & Sergeyev, Ya.D. "Global Optimization with Non-Convex
//!   Constraints: Sequential and Parallel Algorithms." Kluwer (2000).

pub mod characteristics;
pub mod error;
pub mod solver;
pub mod trace;
pub mod trials;
pub mod types;

// Re-export main types
pub use error::{Result, StronginError};
pub use solver::{minimize, Strongin};
pub use trials::{Trial, TrialSet};
pub use types::{ObjectiveFn, StronginOptions, StronginResult};
