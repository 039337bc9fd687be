//! Error types for the Strongin global search.
//!
//! Three failure families: malformed run parameters (rejected eagerly, before
//! any objective evaluation), a negative relative first difference (an
//! internal-consistency violation that invalidates the Lipschitz estimate the
//! whole method relies on), and iteration-ceiling exhaustion.

use thiserror::Error;

/// Errors that can occur when configuring or running the search.
#[derive(Error, Debug)]
pub enum StronginError {
    #[error("invalid search interval: lower bound {lower} must be strictly below upper bound {upper}")]
    InvalidInterval { lower: f64, upper: f64 },

    #[error("reliability coefficient must be greater than 1, got {0}")]
    InvalidReliability(f64),

    #[error("tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("iteration limit must be positive")]
    InvalidIterationLimit,

    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// A relative first difference came out negative (or NaN). Cannot occur
    /// for a deterministic real-valued objective; indicates the objective is
    /// misbehaving (non-deterministic, or returning NaN).
    #[error("negative relative first difference on [{lower}, {upper}]")]
    NegativeSlope { lower: f64, upper: f64 },

    /// The iteration ceiling was exceeded before the winning interval shrank
    /// below the tolerance. Carries the best trial seen for diagnostics.
    #[error("no convergence within {nit} iterations ({nfev} evaluations); best so far f({x:e}) = {fun:e}")]
    NonConvergence {
        x: f64,
        fun: f64,
        nit: usize,
        nfev: usize,
    },
}

impl StronginError {
    /// Returns true if this error was raised by eager parameter validation,
    /// before any objective evaluation took place.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidInterval { .. }
                | Self::InvalidReliability(_)
                | Self::InvalidTolerance(_)
                | Self::InvalidIterationLimit
        )
    }
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, StronginError>;
