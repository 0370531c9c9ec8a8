//! Black-Scholes pricing for European options.
//!
//! Closed-form prices and Greeks under lognormal dynamics with a
//! continuous dividend yield q:
//!
//! **Call**: C = S e^(-qT) N(d1) - K e^(-rT) N(d2)
//! **Put**:  P = K e^(-rT) N(-d2) - S e^(-qT) N(-d1)
//!
//! where
//! - d1 = (ln(S/K) + (r - q + sigma^2/2) T) / (sigma sqrt(T))
//! - d2 = d1 - sigma sqrt(T)
//!
//! Setting q = 0 recovers the dividend-free textbook formula.

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::OptionType;

use super::error::AnalyticalError;
use crate::instruments::VanillaOption;

/// Expiries below this are treated as expired (intrinsic value).
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model over (spot, rate, dividend yield, volatility).
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float`
///
/// # Examples
/// ```
/// use pricer_vanilla::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `rate` - Continuously compounded risk-free rate
    /// * `dividend_yield` - Continuous dividend yield
    /// * `volatility` - Annualised volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(
        spot: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();
        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn epsilon() -> T {
        T::from(EXPIRY_EPSILON).unwrap()
    }

    /// The d1 term.
    ///
    /// At `expiry <= epsilon` the limit is +/- a large constant by
    /// moneyness, keeping the CDF saturated at 0 or 1.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let carry = self.rate - self.dividend_yield + half * self.volatility * self.volatility;
        ((self.spot / strike).ln() + carry * expiry) / vol_sqrt_t
    }

    /// The d2 term: d1 - sigma sqrt(T).
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return (self.spot - strike).max(T::zero());
        }
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();
        self.spot * df_q * norm_cdf(self.d1(strike, expiry))
            - strike * df_r * norm_cdf(self.d2(strike, expiry))
    }

    /// European put price.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return (strike - self.spot).max(T::zero());
        }
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();
        strike * df_r * norm_cdf(-self.d2(strike, expiry))
            - self.spot * df_q * norm_cdf(-self.d1(strike, expiry))
    }

    /// Price by option type.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Delta: dV/dS.
    ///
    /// e^(-qT) N(d1) for calls, e^(-qT) (N(d1) - 1) for puts.
    #[inline]
    pub fn delta(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            let one = T::one();
            let zero = T::zero();
            return match option_type {
                OptionType::Call => {
                    if self.spot > strike {
                        one
                    } else {
                        zero
                    }
                }
                OptionType::Put => {
                    if self.spot < strike {
                        -one
                    } else {
                        zero
                    }
                }
            };
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        let n_d1 = norm_cdf(self.d1(strike, expiry));
        match option_type {
            OptionType::Call => df_q * n_d1,
            OptionType::Put => df_q * (n_d1 - T::one()),
        }
    }

    /// Gamma: d2V/dS2, identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return T::zero();
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        df_q * norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega: dV/dsigma, identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return T::zero();
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        self.spot * df_q * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// Theta: dV/dt (time decay, typically negative).
    #[inline]
    pub fn theta(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return T::zero();
        }
        let two = T::from(2.0).unwrap();
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let decay = -(self.spot * df_q * self.volatility * norm_pdf(d1)) / (two * expiry.sqrt());
        match option_type {
            OptionType::Call => {
                decay - self.rate * strike * df_r * norm_cdf(d2)
                    + self.dividend_yield * self.spot * df_q * norm_cdf(d1)
            }
            OptionType::Put => {
                decay + self.rate * strike * df_r * norm_cdf(-d2)
                    - self.dividend_yield * self.spot * df_q * norm_cdf(-d1)
            }
        }
    }

    /// Rho: dV/dr.
    #[inline]
    pub fn rho(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        if expiry <= Self::epsilon() {
            return T::zero();
        }
        let df_r = (-self.rate * expiry).exp();
        let d2 = self.d2(strike, expiry);
        match option_type {
            OptionType::Call => strike * expiry * df_r * norm_cdf(d2),
            OptionType::Put => -strike * expiry * df_r * norm_cdf(-d2),
        }
    }

    /// Prices a [`VanillaOption`], scaling by its contract multiplier.
    ///
    /// # Errors
    /// `AnalyticalError::UnsupportedExerciseStyle` for American contracts:
    /// the closed form has no early-exercise premium.
    pub fn price_option(&self, option: &VanillaOption<T>) -> Result<T, AnalyticalError> {
        if !option.exercise_style().is_european() {
            return Err(AnalyticalError::UnsupportedExerciseStyle {
                style: option.exercise_style().to_string(),
            });
        }
        let unit = self.price(option.option_type(), option.strike(), option.expiry());
        Ok(option.multiplier() * unit)
    }
}
