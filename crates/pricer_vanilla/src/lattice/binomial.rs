//! Cox-Ross-Rubinstein binomial tree.
//!
//! Recombining tree with up factor u = e^(sigma sqrt(dt)), d = 1/u, and
//! risk-neutral probability p = (e^((r - q) dt) - d) / (u - d). Terminal
//! payoffs are rolled back by discounted expectation; American contracts
//! compare the continuation value against immediate exercise at every node.

use pricer_core::types::{ExerciseStyle, OptionType};

use super::error::LatticeError;
use crate::instruments::VanillaOption;

/// Maximum number of tree steps allowed.
pub const MAX_STEPS: usize = 50_000;

/// Expiries below this are treated as expired (intrinsic value).
const EXPIRY_EPSILON: f64 = 1e-10;

/// Cox-Ross-Rubinstein binomial tree over (spot, rate, dividend yield,
/// volatility) with a fixed step count.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_vanilla::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(100.0, 0.05, 0.0, 0.2, 500).unwrap();
/// let european = tree.price_european(OptionType::Call, 100.0, 1.0).unwrap();
///
/// // Converges to the Black-Scholes value 10.4506
/// assert!((european - 10.4506).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinomialTree {
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    steps: usize,
}

impl BinomialTree {
    /// Creates a tree with validated market parameters and step count.
    ///
    /// # Errors
    /// - `LatticeError::InvalidSpot` if spot <= 0
    /// - `LatticeError::InvalidVolatility` if volatility <= 0
    /// - `LatticeError::InvalidStepCount` if steps is 0 or above [`MAX_STEPS`]
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        steps: usize,
    ) -> Result<Self, LatticeError> {
        if spot <= 0.0 {
            return Err(LatticeError::InvalidSpot { spot });
        }
        if volatility <= 0.0 {
            return Err(LatticeError::InvalidVolatility { volatility });
        }
        if steps == 0 || steps > MAX_STEPS {
            return Err(LatticeError::InvalidStepCount { steps });
        }
        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
            steps,
        })
    }

    /// Returns the configured step count.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a European vanilla (no early exercise in the rollback).
    pub fn price_european(
        &self,
        option_type: OptionType,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, LatticeError> {
        self.roll_back(option_type, strike, expiry, false)
    }

    /// Prices an American vanilla (early exercise at every node).
    pub fn price_american(
        &self,
        option_type: OptionType,
        strike: f64,
        expiry: f64,
    ) -> Result<f64, LatticeError> {
        self.roll_back(option_type, strike, expiry, true)
    }

    /// Prices a [`VanillaOption`] according to its exercise style, scaling
    /// by the contract multiplier.
    pub fn price_option(&self, option: &VanillaOption<f64>) -> Result<f64, LatticeError> {
        let unit = match option.exercise_style() {
            ExerciseStyle::European => {
                self.price_european(option.option_type(), option.strike(), option.expiry())?
            }
            ExerciseStyle::American => {
                self.price_american(option.option_type(), option.strike(), option.expiry())?
            }
        };
        Ok(option.multiplier() * unit)
    }

    fn roll_back(
        &self,
        option_type: OptionType,
        strike: f64,
        expiry: f64,
        early_exercise: bool,
    ) -> Result<f64, LatticeError> {
        if expiry <= EXPIRY_EPSILON {
            return Ok(option_type.intrinsic(self.spot, strike));
        }

        let n = self.steps;
        let dt = expiry / n as f64;
        let up = (self.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = ((self.rate - self.dividend_yield) * dt).exp();
        let discount = (-self.rate * dt).exp();

        let p_up = (growth - down) / (up - down);
        if !(p_up > 0.0 && p_up < 1.0) {
            return Err(LatticeError::ArbitrageableStep { probability: p_up });
        }
        let p_down = 1.0 - p_up;

        // Terminal layer: spot * u^i * d^(n - i) for i up-moves
        let mut values: Vec<f64> = (0..=n)
            .map(|i| {
                let node_spot = self.spot * up.powi(i as i32) * down.powi((n - i) as i32);
                option_type.intrinsic(node_spot, strike)
            })
            .collect();

        // Backward induction toward the root
        for step in (0..n).rev() {
            for i in 0..=step {
                let continuation = discount * (p_up * values[i + 1] + p_down * values[i]);
                values[i] = if early_exercise {
                    let node_spot = self.spot * up.powi(i as i32) * down.powi((step - i) as i32);
                    continuation.max(option_type.intrinsic(node_spot, strike))
                } else {
                    continuation
                };
            }
        }

        Ok(values[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;
    use pricer_core::types::ExerciseStyle;

    fn reference_tree(steps: usize) -> BinomialTree {
        BinomialTree::new(100.0, 0.05, 0.0, 0.2, steps).unwrap()
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            BinomialTree::new(0.0, 0.05, 0.0, 0.2, 100),
            Err(LatticeError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BinomialTree::new(100.0, 0.05, 0.0, -0.2, 100),
            Err(LatticeError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            BinomialTree::new(100.0, 0.05, 0.0, 0.2, 0),
            Err(LatticeError::InvalidStepCount { steps: 0 })
        ));
        assert!(matches!(
            BinomialTree::new(100.0, 0.05, 0.0, 0.2, MAX_STEPS + 1),
            Err(LatticeError::InvalidStepCount { .. })
        ));
    }

    #[test]
    fn european_converges_to_black_scholes() {
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let analytic = bs.price_call(100.0, 1.0);
        let tree = reference_tree(500)
            .price_european(OptionType::Call, 100.0, 1.0)
            .unwrap();
        assert_relative_eq!(tree, analytic, epsilon = 0.05);
    }

    #[test]
    fn convergence_improves_with_steps() {
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let analytic = bs.price_call(100.0, 1.0);
        let coarse = reference_tree(10)
            .price_european(OptionType::Call, 100.0, 1.0)
            .unwrap();
        let fine = reference_tree(1000)
            .price_european(OptionType::Call, 100.0, 1.0)
            .unwrap();
        assert!((fine - analytic).abs() < (coarse - analytic).abs());
    }

    #[test]
    fn american_put_carries_early_exercise_premium() {
        let tree = reference_tree(500);
        let european = tree.price_european(OptionType::Put, 100.0, 1.0).unwrap();
        let american = tree.price_american(OptionType::Put, 100.0, 1.0).unwrap();
        assert!(american > european);
    }

    #[test]
    fn american_call_without_dividends_matches_european() {
        // No dividends: early exercise of a call is never optimal
        let tree = reference_tree(500);
        let european = tree.price_european(OptionType::Call, 100.0, 1.0).unwrap();
        let american = tree.price_american(OptionType::Call, 100.0, 1.0).unwrap();
        assert_relative_eq!(american, european, epsilon = 1e-9);
    }

    #[test]
    fn american_call_with_dividends_exceeds_european() {
        let tree = BinomialTree::new(100.0, 0.05, 0.06, 0.2, 500).unwrap();
        let european = tree.price_european(OptionType::Call, 90.0, 1.0).unwrap();
        let american = tree.price_american(OptionType::Call, 90.0, 1.0).unwrap();
        assert!(american > european);
    }

    #[test]
    fn american_price_dominates_intrinsic() {
        let tree = BinomialTree::new(80.0, 0.05, 0.0, 0.2, 200).unwrap();
        let price = tree.price_american(OptionType::Put, 100.0, 1.0).unwrap();
        assert!(price >= 20.0);
    }

    #[test]
    fn expired_contract_returns_intrinsic() {
        let tree = BinomialTree::new(110.0, 0.05, 0.0, 0.2, 100).unwrap();
        assert_relative_eq!(
            tree.price_european(OptionType::Call, 100.0, 0.0).unwrap(),
            10.0
        );
    }

    #[test]
    fn single_step_tree_prices() {
        let tree = reference_tree(1);
        let price = tree.price_european(OptionType::Call, 100.0, 1.0).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn extreme_drift_reports_arbitrageable_step() {
        // One step, huge carry versus tiny volatility: p > 1
        let tree = BinomialTree::new(100.0, 3.0, 0.0, 0.01, 1).unwrap();
        assert!(matches!(
            tree.price_european(OptionType::Call, 100.0, 1.0),
            Err(LatticeError::ArbitrageableStep { .. })
        ));
    }

    #[test]
    fn prices_contract_with_multiplier() {
        use crate::instruments::OptionParams;

        let tree = reference_tree(200);
        let params = OptionParams::new(100.0, 1.0, 100.0).unwrap();
        let option = VanillaOption::new(params, OptionType::Put, ExerciseStyle::American);
        let contract = tree.price_option(&option).unwrap();
        let unit = tree.price_american(OptionType::Put, 100.0, 1.0).unwrap();
        assert_relative_eq!(contract, 100.0 * unit, epsilon = 1e-9);
    }
}
