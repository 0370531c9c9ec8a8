//! Common option parameters with validation.

use num_traits::Float;

use super::error::InstrumentError;

/// Strike, expiry, and contract multiplier for a vanilla option.
///
/// Listed equity options conventionally carry a multiplier of 100 shares
/// per contract; over-the-counter quotes use 1. All three values must be
/// strictly positive.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use pricer_vanilla::instruments::OptionParams;
///
/// let params = OptionParams::new(100.0_f64, 0.5, 100.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.expiry(), 0.5);
/// assert_eq!(params.multiplier(), 100.0);
///
/// assert!(OptionParams::new(100.0_f64, -0.5, 100.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams<T: Float> {
    strike: T,
    expiry: T,
    multiplier: T,
}

impl<T: Float> OptionParams<T> {
    /// Creates validated option parameters.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    /// * `multiplier` - Contract multiplier (must be positive)
    ///
    /// # Errors
    /// Returns the matching `InstrumentError` variant for the first
    /// non-positive argument.
    pub fn new(strike: T, expiry: T, multiplier: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= zero {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if multiplier <= zero {
            return Err(InstrumentError::InvalidMultiplier {
                multiplier: multiplier.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            expiry,
            multiplier,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the contract multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }
}
