//! Monte Carlo simulation errors.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors from Monte Carlo configuration and simulation.
///
/// # Variants
/// - `InvalidPathCount` / `InvalidStepCount`: limits violated
/// - `MissingParameter`: builder field not set
/// - `InvalidMarketParams`: non-positive spot or negative volatility
/// - `UnsupportedExerciseStyle`: American contracts are not simulated
#[derive(Debug, Clone, Error, PartialEq)]
pub enum McError {
    /// Path count outside [1, MAX_PATHS].
    #[error("Invalid path count: {0}")]
    InvalidPathCount(usize),

    /// Step count outside [1, MAX_STEPS].
    #[error("Invalid step count: {0}")]
    InvalidStepCount(usize),

    /// Required builder parameter missing.
    #[error("Missing Monte Carlo parameter: {name}")]
    MissingParameter {
        /// Name of the unset field
        name: &'static str,
    },

    /// Market parameters rejected by the GBM dynamics.
    #[error("Invalid market parameters: {message}")]
    InvalidMarketParams {
        /// Description of the rejected input
        message: String,
    },

    /// Exercise style the simulator cannot handle.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Name of the offending style
        style: String,
    },
}

impl From<McError> for PricingError {
    fn from(err: McError) -> Self {
        match err {
            McError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
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
        assert_eq!(
            format!("{}", McError::InvalidPathCount(0)),
            "Invalid path count: 0"
        );
        assert_eq!(
            format!("{}", McError::MissingParameter { name: "n_paths" }),
            "Missing Monte Carlo parameter: n_paths"
        );
    }

    #[test]
    fn exercise_style_maps_to_unsupported_instrument() {
        let err: PricingError = McError::UnsupportedExerciseStyle {
            style: "american".to_string(),
        }
        .into();
        assert!(matches!(err, PricingError::UnsupportedInstrument(_)));
    }
}
