//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: categorised errors from pricing operations
//! - `SolverError`: errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// The top-level error family every engine converges to, with descriptive
/// context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: invalid market data or parameters
/// - `NumericalInstability`: computation failed or degenerated
/// - `ModelFailure`: model assumptions violated
/// - `UnsupportedInstrument`: instrument not supported by the chosen engine
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce a valid result.
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// Instrument not supported by the chosen engine.
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Root-finding solver errors.
///
/// # Variants
/// - `InvalidBracket`: the endpoints do not bracket a root
/// - `DidNotConverge`: iteration budget exhausted before the tolerance was met
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum SolverError {
    /// The function has the same sign at both bracket endpoints.
    #[error("Invalid bracket: f({lo}) and f({hi}) have the same sign")]
    InvalidBracket {
        /// Lower bracket endpoint
        lo: f64,
        /// Upper bracket endpoint
        hi: f64,
    },

    /// Iteration budget exhausted.
    #[error("Did not converge within {iterations} iterations")]
    DidNotConverge {
        /// Number of iterations performed
        iterations: usize,
    },
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::NumericalInstability(err.to_string())
    }
}
