//! Vanilla option contract.

use num_traits::Float;
use pricer_core::types::{ExerciseStyle, OptionType};

use super::params::OptionParams;

/// A vanilla call or put with European or American exercise.
///
/// # Examples
/// ```
/// use pricer_core::types::{ExerciseStyle, OptionType};
/// use pricer_vanilla::instruments::{OptionParams, VanillaOption};
///
/// let params = OptionParams::new(100.0_f64, 1.0, 100.0).unwrap();
/// let call = VanillaOption::new(params, OptionType::Call, ExerciseStyle::European);
///
/// // Intrinsic payoff scaled by the contract multiplier
/// assert_eq!(call.payoff(110.0), 1000.0);
/// assert_eq!(call.payoff(90.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption<T: Float> {
    params: OptionParams<T>,
    option_type: OptionType,
    exercise_style: ExerciseStyle,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a vanilla option from validated parameters.
    pub fn new(
        params: OptionParams<T>,
        option_type: OptionType,
        exercise_style: ExerciseStyle,
    ) -> Self {
        Self {
            params,
            option_type,
            exercise_style,
        }
    }

    /// Exercise payoff at the given spot, scaled by the multiplier.
    ///
    /// max(S - K, 0) for calls and max(K - S, 0) for puts.
    #[inline]
    pub fn payoff(&self, spot: T) -> T {
        let zero = T::zero();
        let intrinsic = match self.option_type {
            OptionType::Call => (spot - self.params.strike()).max(zero),
            OptionType::Put => (self.params.strike() - spot).max(zero),
        };
        self.params.multiplier() * intrinsic
    }

    /// Returns the option parameters.
    #[inline]
    pub fn params(&self) -> &OptionParams<T> {
        &self.params
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params.expiry()
    }

    /// Returns the contract multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.params.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_params() -> OptionParams<f64> {
        OptionParams::new(100.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn call_payoff() {
        let call = VanillaOption::new(unit_params(), OptionType::Call, ExerciseStyle::European);
        assert_relative_eq!(call.payoff(112.5), 12.5);
        assert_eq!(call.payoff(100.0), 0.0);
        assert_eq!(call.payoff(87.5), 0.0);
    }

    #[test]
    fn put_payoff() {
        let put = VanillaOption::new(unit_params(), OptionType::Put, ExerciseStyle::American);
        assert_relative_eq!(put.payoff(80.0), 20.0);
        assert_eq!(put.payoff(120.0), 0.0);
    }

    #[test]
    fn multiplier_scales_payoff() {
        let params = OptionParams::new(100.0, 1.0, 100.0).unwrap();
        let call = VanillaOption::new(params, OptionType::Call, ExerciseStyle::European);
        assert_relative_eq!(call.payoff(105.0), 500.0);
    }

    #[test]
    fn accessors() {
        let opt = VanillaOption::new(unit_params(), OptionType::Put, ExerciseStyle::American);
        assert_eq!(opt.strike(), 100.0);
        assert_eq!(opt.expiry(), 1.0);
        assert_eq!(opt.multiplier(), 1.0);
        assert!(opt.option_type().is_put());
        assert!(opt.exercise_style().is_american());
    }
}
