//! Errors for analytical pricing operations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidVolatility`: non-positive volatility
/// - `TargetOutOfBounds`: implied volatility target violates no-arbitrage bounds
/// - `UnsupportedExerciseStyle`: the closed form only covers European exercise
/// - `NumericalInstability`: iteration failure while inverting
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
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

    /// Implied volatility target outside the attainable price range.
    #[error("Target price {price} is outside the no-arbitrage bounds [{lower}, {upper}]")]
    TargetOutOfBounds {
        /// The requested option price
        price: f64,
        /// Lowest attainable price
        lower: f64,
        /// Highest attainable price
        upper: f64,
    },

    /// Exercise style the analytical formula cannot price.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Name of the offending style
        style: String,
    },

    /// Numerical failure during inversion.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the failure
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::TargetOutOfBounds { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: sigma = -0.2");

        let err = AnalyticalError::UnsupportedExerciseStyle {
            style: "american".to_string(),
        };
        assert!(format!("{}", err).contains("american"));
    }

    #[test]
    fn pricing_error_mapping() {
        let err: PricingError = AnalyticalError::InvalidSpot { spot: -1.0 }.into();
        assert!(matches!(err, PricingError::InvalidInput(_)));

        let err: PricingError = AnalyticalError::UnsupportedExerciseStyle {
            style: "american".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::UnsupportedInstrument(_)));

        let err: PricingError = AnalyticalError::NumericalInstability {
            message: "flat vega".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
