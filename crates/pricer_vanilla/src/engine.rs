//! Valuation entry point.
//!
//! Builds an instrument from scalar inputs (spot, strike, days to maturity,
//! day count, rate, dividend yield, volatility, option type, exercise
//! style), forwards it to the chosen engine, and returns the net present
//! value. This is the single seam the service layer calls.

use pricer_core::types::{DayCount, ExerciseStyle, OptionType, PricingError};

use crate::analytical::BlackScholes;
use crate::instruments::{OptionParams, VanillaOption};
use crate::lattice::BinomialTree;
use crate::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer};

/// Pricing engine selection.
///
/// # Routing
/// - `Analytic`: European only (closed form)
/// - `Binomial`: European and American
/// - `MonteCarlo`: European only
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Engine {
    /// Black-Scholes closed form.
    Analytic,
    /// Cox-Ross-Rubinstein tree with the given step count.
    Binomial {
        /// Number of tree steps
        steps: usize,
    },
    /// GBM path simulation.
    MonteCarlo(MonteCarloConfig),
}

impl Default for Engine {
    fn default() -> Self {
        Engine::Analytic
    }
}

/// Scalar inputs for one valuation.
///
/// Construct with [`ValuationRequest::new`] and refine with the `with_*`
/// methods; unset fields keep conventional defaults (zero rate and yield,
/// ACT/365F, European exercise, unit multiplier, analytic engine).
///
/// # Examples
/// ```
/// use pricer_core::types::{ExerciseStyle, OptionType};
/// use pricer_vanilla::engine::{value, Engine, ValuationRequest};
///
/// let request = ValuationRequest::new(42.0, 40.0, 90, 0.25, OptionType::Put)
///     .with_rate(0.04)
///     .with_exercise_style(ExerciseStyle::American)
///     .with_engine(Engine::Binomial { steps: 500 });
///
/// let valuation = value(&request).unwrap();
/// assert!(valuation.npv > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValuationRequest {
    /// Spot price of the underlying.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Whole days to maturity.
    pub days_to_maturity: u32,
    /// Day count convention converting days to a year fraction.
    pub day_count: DayCount,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuous dividend yield.
    pub dividend_yield: f64,
    /// Annualised volatility.
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// European or American exercise.
    pub exercise_style: ExerciseStyle,
    /// Contract multiplier.
    pub multiplier: f64,
    /// Engine choice.
    pub engine: Engine,
}

impl ValuationRequest {
    /// Creates a request with conventional defaults for the remaining
    /// fields.
    pub fn new(
        spot: f64,
        strike: f64,
        days_to_maturity: u32,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            days_to_maturity,
            day_count: DayCount::default(),
            rate: 0.0,
            dividend_yield: 0.0,
            volatility,
            option_type,
            exercise_style: ExerciseStyle::European,
            multiplier: 1.0,
            engine: Engine::default(),
        }
    }

    /// Sets the risk-free rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the continuous dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Sets the day count convention.
    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the exercise style.
    pub fn with_exercise_style(mut self, exercise_style: ExerciseStyle) -> Self {
        self.exercise_style = exercise_style;
        self
    }

    /// Sets the contract multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the engine.
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Time to maturity in years under the request's day count.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.day_count.year_fraction(self.days_to_maturity)
    }
}

/// A priced contract.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation {
    /// Net present value, scaled by the contract multiplier.
    pub npv: f64,
    /// Standard error of the estimate (Monte Carlo only).
    pub std_error: Option<f64>,
}

impl Valuation {
    /// NPV rounded half away from zero to `dp` decimal places.
    ///
    /// # Examples
    /// ```
    /// use pricer_vanilla::engine::Valuation;
    ///
    /// let v = Valuation { npv: 10.456, std_error: None };
    /// assert_eq!(v.rounded(2), 10.46);
    /// ```
    #[inline]
    pub fn rounded(&self, dp: u32) -> f64 {
        let scale = 10.0_f64.powi(dp as i32);
        (self.npv * scale).round() / scale
    }
}

/// Values the requested contract with the requested engine.
///
/// Contracts with zero days to maturity settle at intrinsic value under
/// every engine. Otherwise the request is validated into a
/// [`VanillaOption`] and dispatched.
///
/// # Errors
/// - `PricingError::InvalidInput` for rejected scalars
/// - `PricingError::UnsupportedInstrument` when the engine cannot price
///   the exercise style (American via `Analytic` or `MonteCarlo`)
/// - `PricingError::NumericalInstability` from engine internals
pub fn value(request: &ValuationRequest) -> Result<Valuation, PricingError> {
    if request.days_to_maturity == 0 {
        let intrinsic = request
            .option_type
            .intrinsic(request.spot, request.strike);
        return Ok(Valuation {
            npv: request.multiplier * intrinsic,
            std_error: None,
        });
    }

    let expiry = request.year_fraction();
    let params = OptionParams::new(request.strike, expiry, request.multiplier)?;
    let option = VanillaOption::new(params, request.option_type, request.exercise_style);

    match request.engine {
        Engine::Analytic => {
            let model = BlackScholes::new(
                request.spot,
                request.rate,
                request.dividend_yield,
                request.volatility,
            )?;
            let npv = model.price_option(&option)?;
            Ok(Valuation {
                npv,
                std_error: None,
            })
        }
        Engine::Binomial { steps } => {
            let tree = BinomialTree::new(
                request.spot,
                request.rate,
                request.dividend_yield,
                request.volatility,
                steps,
            )?;
            let npv = tree.price_option(&option)?;
            Ok(Valuation {
                npv,
                std_error: None,
            })
        }
        Engine::MonteCarlo(config) => {
            let gbm = GbmParams::new(
                request.spot,
                request.rate,
                request.dividend_yield,
                request.volatility,
            )?;
            let mut pricer = MonteCarloPricer::new(config);
            let result = pricer.price_option(&option, &gbm)?;
            Ok(Valuation {
                npv: result.price,
                std_error: Some(result.std_error),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_call() -> ValuationRequest {
        ValuationRequest::new(100.0, 100.0, 365, 0.2, OptionType::Call).with_rate(0.05)
    }

    #[test]
    fn analytic_reference_value() {
        let valuation = value(&atm_call()).unwrap();
        assert_relative_eq!(valuation.npv, 10.4506, epsilon = 1e-3);
        assert_eq!(valuation.std_error, None);
    }

    #[test]
    fn rounding_matches_display_convention() {
        let valuation = value(&atm_call()).unwrap();
        assert_eq!(valuation.rounded(2), 10.45);
        let negative = Valuation {
            npv: -10.456,
            std_error: None,
        };
        assert_eq!(negative.rounded(2), -10.46);
    }

    #[test]
    fn binomial_and_analytic_agree_for_european() {
        let analytic = value(&atm_call()).unwrap();
        let tree = value(&atm_call().with_engine(Engine::Binomial { steps: 1000 })).unwrap();
        assert_relative_eq!(tree.npv, analytic.npv, epsilon = 0.02);
    }

    #[test]
    fn monte_carlo_reports_standard_error() {
        let config = MonteCarloConfig::builder()
            .n_paths(20_000)
            .n_steps(10)
            .seed(42)
            .build()
            .unwrap();
        let valuation = value(&atm_call().with_engine(Engine::MonteCarlo(config))).unwrap();
        let se = valuation.std_error.expect("MC must report a standard error");
        assert!(se > 0.0);
        assert!((valuation.npv - 10.4506).abs() < 4.0 * se);
    }

    #[test]
    fn analytic_rejects_american() {
        let request = atm_call().with_exercise_style(ExerciseStyle::American);
        assert!(matches!(
            value(&request),
            Err(PricingError::UnsupportedInstrument(_))
        ));
    }

    #[test]
    fn monte_carlo_rejects_american() {
        let config = MonteCarloConfig::builder()
            .n_paths(100)
            .n_steps(10)
            .build()
            .unwrap();
        let request = atm_call()
            .with_exercise_style(ExerciseStyle::American)
            .with_engine(Engine::MonteCarlo(config));
        assert!(matches!(
            value(&request),
            Err(PricingError::UnsupportedInstrument(_))
        ));
    }

    #[test]
    fn binomial_accepts_american() {
        let request = ValuationRequest::new(100.0, 110.0, 180, 0.25, OptionType::Put)
            .with_rate(0.05)
            .with_exercise_style(ExerciseStyle::American)
            .with_engine(Engine::Binomial { steps: 500 });
        let valuation = value(&request).unwrap();
        assert!(valuation.npv >= 10.0); // at least intrinsic
    }

    #[test]
    fn zero_days_settles_at_intrinsic() {
        let request = ValuationRequest::new(110.0, 100.0, 0, 0.2, OptionType::Call)
            .with_multiplier(100.0);
        let valuation = value(&request).unwrap();
        assert_relative_eq!(valuation.npv, 1000.0);
    }

    #[test]
    fn multiplier_scales_npv() {
        let unit = value(&atm_call()).unwrap();
        let contract = value(&atm_call().with_multiplier(100.0)).unwrap();
        assert_relative_eq!(contract.npv, 100.0 * unit.npv, epsilon = 1e-9);
    }

    #[test]
    fn invalid_scalars_are_rejected() {
        let request = ValuationRequest::new(100.0, -100.0, 365, 0.2, OptionType::Call);
        assert!(matches!(value(&request), Err(PricingError::InvalidInput(_))));

        let request = ValuationRequest::new(100.0, 100.0, 365, -0.2, OptionType::Call);
        assert!(matches!(value(&request), Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn day_count_changes_year_fraction() {
        let act365 = atm_call();
        let act252 = atm_call().with_day_count(DayCount::Act252);
        assert!(act252.year_fraction() > act365.year_fraction());
        let v365 = value(&act365).unwrap();
        let v252 = value(&act252).unwrap();
        assert!(v252.npv > v365.npv); // longer effective expiry, more time value
    }
}
