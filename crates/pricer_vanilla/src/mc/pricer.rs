//! Sequential Monte Carlo pricer.
//!
//! Simulates geometric Brownian motion in log space using the exact
//! per-step solution
//!
//! S(t + dt) = S(t) * exp((r - q - sigma^2/2) dt + sigma sqrt(dt) Z)
//!
//! and averages discounted payoffs at expiry. Sampling is sequential and
//! reproducible when a seed is supplied.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use pricer_core::types::ExerciseStyle;

use super::config::MonteCarloConfig;
use super::error::McError;
use crate::instruments::VanillaOption;

/// Market parameters for the GBM dynamics.
///
/// # Examples
/// ```
/// use pricer_vanilla::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// assert_eq!(params.spot, 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price.
    pub spot: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Continuous dividend yield.
    pub dividend_yield: f64,
    /// Annualised volatility.
    pub volatility: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    ///
    /// # Errors
    /// `McError::InvalidMarketParams` when spot <= 0 or volatility < 0.
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, McError> {
        if spot <= 0.0 {
            return Err(McError::InvalidMarketParams {
                message: format!("spot must be positive, got {}", spot),
            });
        }
        if volatility < 0.0 {
            return Err(McError::InvalidMarketParams {
                message: format!("volatility must be non-negative, got {}", volatility),
            });
        }
        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }
}

/// Monte Carlo estimate with sampling uncertainty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct McResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
}

impl McResult {
    /// 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Sequential Monte Carlo pricing engine.
///
/// # Examples
/// ```
/// use pricer_core::types::{ExerciseStyle, OptionType};
/// use pricer_vanilla::instruments::{OptionParams, VanillaOption};
/// use pricer_vanilla::mc::{GbmParams, MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// let mut pricer = MonteCarloPricer::new(config);
///
/// let params = OptionParams::new(100.0, 1.0, 1.0).unwrap();
/// let call = VanillaOption::new(params, OptionType::Call, ExerciseStyle::European);
/// let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
///
/// let result = pricer.price_option(&call, &gbm).unwrap();
/// assert!((result.price - 10.45).abs() < 3.0 * result.std_error + 0.5);
/// ```
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: StdRng,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    ///
    /// Without a seed the generator is initialised from OS entropy.
    pub fn new(config: MonteCarloConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a European [`VanillaOption`], scaling by its multiplier.
    ///
    /// # Errors
    /// `McError::UnsupportedExerciseStyle` for American contracts: plain
    /// path simulation carries no exercise boundary, so American contracts
    /// route to the lattice engine instead.
    pub fn price_option(
        &mut self,
        option: &VanillaOption<f64>,
        params: &GbmParams,
    ) -> Result<McResult, McError> {
        if option.exercise_style() != ExerciseStyle::European {
            return Err(McError::UnsupportedExerciseStyle {
                style: option.exercise_style().to_string(),
            });
        }

        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let expiry = option.expiry();
        let dt = expiry / n_steps as f64;

        let drift = (params.rate - params.dividend_yield
            - 0.5 * params.volatility * params.volatility)
            * dt;
        let diffusion = params.volatility * dt.sqrt();
        let discount = (-params.rate * expiry).exp();

        let mut sum = 0.0_f64;
        let mut sum_sq = 0.0_f64;

        for _ in 0..n_paths {
            let mut log_spot = params.spot.ln();
            for _ in 0..n_steps {
                let z: f64 = StandardNormal.sample(&mut self.rng);
                log_spot += drift + diffusion * z;
            }
            let payoff = discount * option.payoff(log_spot.exp());
            sum += payoff;
            sum_sq += payoff * payoff;
        }

        let n = n_paths as f64;
        let mean = sum / n;
        let variance = ((sum_sq / n) - mean * mean).max(0.0);
        let std_error = if n_paths > 1 {
            (variance / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(McResult {
            price: mean,
            std_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use crate::instruments::OptionParams;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    fn european(option_type: OptionType) -> VanillaOption<f64> {
        let params = OptionParams::new(100.0, 1.0, 1.0).unwrap();
        VanillaOption::new(params, option_type, ExerciseStyle::European)
    }

    fn seeded_pricer(n_paths: usize, seed: u64) -> MonteCarloPricer {
        let config = MonteCarloConfig::builder()
            .n_paths(n_paths)
            .n_steps(50)
            .seed(seed)
            .build()
            .unwrap();
        MonteCarloPricer::new(config)
    }

    #[test]
    fn estimates_call_within_three_standard_errors() {
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let result = seeded_pricer(50_000, 42)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();

        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let analytic = bs.price_call(100.0, 1.0);
        assert!(
            (result.price - analytic).abs() < 3.0 * result.std_error,
            "MC {} vs analytic {} (se {})",
            result.price,
            analytic,
            result.std_error
        );
    }

    #[test]
    fn estimates_put_within_three_standard_errors() {
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let result = seeded_pricer(50_000, 7)
            .price_option(&european(OptionType::Put), &gbm)
            .unwrap();

        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let analytic = bs.price_put(100.0, 1.0);
        assert!((result.price - analytic).abs() < 3.0 * result.std_error);
    }

    #[test]
    fn same_seed_reproduces_estimate() {
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let a = seeded_pricer(5_000, 123)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();
        let b = seeded_pricer(5_000, 123)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn standard_error_shrinks_with_paths() {
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let small = seeded_pricer(2_000, 1)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();
        let large = seeded_pricer(64_000, 1)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();
        assert!(large.std_error < small.std_error);
    }

    #[test]
    fn rejects_american_contract() {
        let params = OptionParams::new(100.0, 1.0, 1.0).unwrap();
        let american = VanillaOption::new(params, OptionType::Put, ExerciseStyle::American);
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.2).unwrap();
        assert!(matches!(
            seeded_pricer(100, 1).price_option(&american, &gbm),
            Err(McError::UnsupportedExerciseStyle { .. })
        ));
    }

    #[test]
    fn zero_volatility_is_deterministic_forward() {
        let gbm = GbmParams::new(100.0, 0.05, 0.0, 0.0).unwrap();
        let result = seeded_pricer(100, 9)
            .price_option(&european(OptionType::Call), &gbm)
            .unwrap();
        // S_T = 100 e^{0.05}; payoff discounted back is 100 - 100 e^{-0.05}
        let expected = (100.0 * 0.05_f64.exp() - 100.0) * (-0.05_f64).exp();
        assert_relative_eq!(result.price, expected, epsilon = 1e-9);
        assert_relative_eq!(result.std_error, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn gbm_params_validation() {
        assert!(GbmParams::new(0.0, 0.05, 0.0, 0.2).is_err());
        assert!(GbmParams::new(100.0, 0.05, 0.0, -0.1).is_err());
        assert!(GbmParams::new(100.0, -0.01, 0.02, 0.0).is_ok());
    }

    #[test]
    fn confidence_interval_scales_standard_error() {
        let result = McResult {
            price: 10.0,
            std_error: 0.1,
        };
        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-12);
    }
}
