//! Instrument validation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while constructing instruments.
///
/// # Variants
/// - `InvalidStrike`: non-positive strike
/// - `InvalidExpiry`: non-positive time to expiry
/// - `InvalidMultiplier`: non-positive contract multiplier
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Non-positive strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The rejected strike value
        strike: f64,
    },

    /// Non-positive time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry value in years
        expiry: f64,
    },

    /// Non-positive contract multiplier.
    #[error("Invalid contract multiplier: {multiplier}")]
    InvalidMultiplier {
        /// The rejected multiplier value
        multiplier: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
