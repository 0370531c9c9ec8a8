//! Lattice pricing errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised by tree construction and rollback.
///
/// # Variants
/// - `InvalidSpot`: non-positive spot
/// - `InvalidVolatility`: non-positive volatility
/// - `InvalidStepCount`: step count outside [1, 50_000]
/// - `ArbitrageableStep`: the risk-neutral probability left (0, 1)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Non-positive spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Step count outside the supported range.
    #[error("Invalid step count: {steps} (must be in [1, 50000])")]
    InvalidStepCount {
        /// The rejected step count
        steps: usize,
    },

    /// The per-step risk-neutral probability is not in (0, 1).
    ///
    /// Happens when the drift over one step exceeds the up/down move,
    /// i.e. the time step is too coarse for the carry.
    #[error("Risk-neutral probability {probability} outside (0, 1); increase step count")]
    ArbitrageableStep {
        /// The offending probability
        probability: f64,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::ArbitrageableStep { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = LatticeError::InvalidStepCount { steps: 0 };
        assert_eq!(
            format!("{}", err),
            "Invalid step count: 0 (must be in [1, 50000])"
        );
    }

    #[test]
    fn arbitrage_maps_to_numerical_instability() {
        let err: PricingError = LatticeError::ArbitrageableStep { probability: 1.2 }.into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
