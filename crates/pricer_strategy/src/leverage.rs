//! Option-versus-stock leverage comparison.
//!
//! For a fixed amount of capital, compares buying the underlying outright
//! against spending the same capital on calls (or puts). Options multiply
//! percentage moves in both directions; the comparison table makes the
//! asymmetry explicit across exit scenarios.

use pricer_core::types::OptionType;

use crate::error::StrategyError;
use crate::position::percent_return;

/// One exit scenario in a leverage comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverageRow {
    /// Underlying price at exit.
    pub exit_spot: f64,
    /// Percent return of the all-stock position.
    pub stock_return_pct: f64,
    /// Percent return of the all-option position.
    pub option_return_pct: f64,
}

impl LeverageRow {
    /// Option return divided by stock return, when the latter is non-zero.
    pub fn leverage_ratio(&self) -> Option<f64> {
        if self.stock_return_pct == 0.0 {
            None
        } else {
            Some(self.option_return_pct / self.stock_return_pct)
        }
    }
}

/// Capital split comparison between stock and options at expiry.
///
/// Whole contracts only: the option allocation buys
/// `floor(capital / (premium * multiplier))` contracts, and the stock
/// allocation buys `capital / spot` shares (fractional shares allowed).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_strategy::leverage::LeverageComparison;
///
/// let cmp = LeverageComparison::new(10_000.0, 100.0, OptionType::Call, 105.0, 4.0, 100.0)
///     .unwrap();
/// let rows = cmp.compare(&[90.0, 100.0, 110.0, 120.0]);
///
/// // A 20% rally turns into a much larger option return
/// let rally = rows.last().unwrap();
/// assert!(rally.option_return_pct > rally.stock_return_pct);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeverageComparison {
    capital: f64,
    spot: f64,
    option_type: OptionType,
    strike: f64,
    premium: f64,
    multiplier: f64,
    contracts: f64,
    shares: f64,
}

impl LeverageComparison {
    /// Creates a comparison for the given capital and contract.
    ///
    /// # Errors
    /// - `StrategyError::InvalidInput` for non-positive capital, spot, or
    ///   premium
    /// - `StrategyError::InsufficientCapital` when no whole contract is
    ///   affordable
    pub fn new(
        capital: f64,
        spot: f64,
        option_type: OptionType,
        strike: f64,
        premium: f64,
        multiplier: f64,
    ) -> Result<Self, StrategyError> {
        if capital <= 0.0 || spot <= 0.0 || premium <= 0.0 || multiplier <= 0.0 {
            return Err(StrategyError::InvalidInput {
                message: "capital, spot, premium, and multiplier must be positive".to_string(),
            });
        }

        let cost_per_contract = premium * multiplier;
        let contracts = (capital / cost_per_contract).floor();
        if contracts < 1.0 {
            return Err(StrategyError::InsufficientCapital {
                capital,
                cost_per_contract,
            });
        }

        Ok(Self {
            capital,
            spot,
            option_type,
            strike,
            premium,
            multiplier,
            contracts,
            shares: capital / spot,
        })
    }

    /// Number of whole contracts the capital buys.
    #[inline]
    pub fn contracts(&self) -> f64 {
        self.contracts
    }

    /// Number of shares the capital buys.
    #[inline]
    pub fn shares(&self) -> f64 {
        self.shares
    }

    /// Evaluates both allocations across the exit scenarios.
    ///
    /// Returns on capital: stock exits at the spot move; options settle at
    /// intrinsic value, with unspent premium change held as cash.
    pub fn compare(&self, exit_spots: &[f64]) -> Vec<LeverageRow> {
        exit_spots
            .iter()
            .map(|&exit_spot| {
                let stock_value = self.shares * exit_spot;

                let option_cost = self.contracts * self.premium * self.multiplier;
                let cash = self.capital - option_cost;
                let option_value = cash
                    + self.contracts
                        * self.multiplier
                        * self.option_type.intrinsic(exit_spot, self.strike);

                LeverageRow {
                    exit_spot,
                    // capital > 0 guaranteed by construction
                    stock_return_pct: percent_return(self.capital, stock_value).unwrap(),
                    option_return_pct: percent_return(self.capital, option_value).unwrap(),
                }
            })
            .collect()
    }
}
