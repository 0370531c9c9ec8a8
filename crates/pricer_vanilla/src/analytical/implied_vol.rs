//! Implied volatility inversion.
//!
//! Recovers the volatility that reproduces an observed option price using
//! Newton-Raphson on vega with a bisection fallback. The search is
//! bracketed in [`VOL_MIN`, `VOL_MAX`]; prices outside the no-arbitrage
//! bounds are rejected before iterating.

use pricer_core::math::solvers::{newton_raphson, SolverConfig};
use pricer_core::types::OptionType;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;

/// Lower edge of the volatility search bracket.
pub const VOL_MIN: f64 = 1e-4;

/// Upper edge of the volatility search bracket (500% annualised).
pub const VOL_MAX: f64 = 5.0;

/// Solves for the volatility reproducing `target_price`.
///
/// # Arguments
/// * `target_price` - Observed option premium (per unit, not per contract)
/// * `option_type` - Call or put
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `rate` - Continuously compounded risk-free rate
/// * `dividend_yield` - Continuous dividend yield
/// * `expiry` - Time to expiry in years
///
/// # Errors
/// - `AnalyticalError::TargetOutOfBounds` when the price sits outside the
///   range attainable inside the bracket
/// - `AnalyticalError::NumericalInstability` when iteration fails
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_vanilla::analytical::{implied_volatility, BlackScholes};
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.35).unwrap();
/// let price = bs.price_call(110.0, 0.5);
///
/// let vol = implied_volatility(price, OptionType::Call, 100.0, 110.0, 0.05, 0.0, 0.5).unwrap();
/// assert!((vol - 0.35).abs() < 1e-6);
/// ```
pub fn implied_volatility(
    target_price: f64,
    option_type: OptionType,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> Result<f64, AnalyticalError> {
    let price_at = |vol: f64| -> Result<f64, AnalyticalError> {
        let bs = BlackScholes::new(spot, rate, dividend_yield, vol)?;
        Ok(bs.price(option_type, strike, expiry))
    };

    let lower = price_at(VOL_MIN)?;
    let upper = price_at(VOL_MAX)?;
    if target_price < lower || target_price > upper {
        return Err(AnalyticalError::TargetOutOfBounds {
            price: target_price,
            lower,
            upper,
        });
    }

    let objective = |vol: f64| {
        BlackScholes::new(spot, rate, dividend_yield, vol)
            .map(|bs| bs.price(option_type, strike, expiry) - target_price)
            .unwrap_or(f64::NAN)
    };
    let vega = |vol: f64| {
        BlackScholes::new(spot, rate, dividend_yield, vol)
            .map(|bs| bs.vega(strike, expiry))
            .unwrap_or(f64::NAN)
    };

    let config = SolverConfig {
        max_iterations: 100,
        tolerance: 1e-10,
    };

    newton_raphson(objective, vega, 0.2, VOL_MIN, VOL_MAX, &config).map_err(|err| {
        AnalyticalError::NumericalInstability {
            message: err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn recovers_known_volatility() {
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let price = bs.price_call(100.0, 1.0);
        let vol = implied_volatility(price, OptionType::Call, 100.0, 100.0, 0.05, 0.0, 1.0).unwrap();
        assert_relative_eq!(vol, 0.2, epsilon = 1e-8);
    }

    #[test]
    fn recovers_put_volatility_with_dividends() {
        let bs = BlackScholes::new(250.0, 0.03, 0.015, 0.45).unwrap();
        let price = bs.price_put(240.0, 0.25);
        let vol =
            implied_volatility(price, OptionType::Put, 250.0, 240.0, 0.03, 0.015, 0.25).unwrap();
        assert_relative_eq!(vol, 0.45, epsilon = 1e-7);
    }

    #[test]
    fn rejects_price_below_intrinsic_bound() {
        // A call is never worth less than its discounted forward intrinsic
        let result = implied_volatility(0.0001, OptionType::Call, 150.0, 100.0, 0.05, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::TargetOutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_price_above_spot() {
        let result = implied_volatility(150.0, OptionType::Call, 100.0, 100.0, 0.05, 0.0, 1.0);
        assert!(matches!(
            result,
            Err(AnalyticalError::TargetOutOfBounds { .. })
        ));
    }

    proptest! {
        #[test]
        fn round_trips_across_surface(
            // Ranges kept where vega is healthy; deep-OTM short-dated
            // contracts have price differences below the solver tolerance
            vol in 0.1_f64..1.0,
            strike in 80.0_f64..120.0,
            expiry in 0.25_f64..2.0,
        ) {
            let bs = BlackScholes::new(100.0, 0.02, 0.0, vol).unwrap();
            let price = bs.price_call(strike, expiry);
            let recovered =
                implied_volatility(price, OptionType::Call, 100.0, strike, 0.02, 0.0, expiry)
                    .unwrap();
            prop_assert!((recovered - vol).abs() < 1e-5);
        }
    }
}
