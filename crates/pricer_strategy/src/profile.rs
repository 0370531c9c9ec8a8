//! Multi-leg payoff profiles over a spot grid.

use crate::error::StrategyError;
use crate::position::Position;

/// Evenly spaced spot grid over [lo, hi] with `points` entries.
///
/// # Errors
/// `StrategyError::InvalidGrid` when lo >= hi, bounds are non-positive,
/// or fewer than two points are requested.
///
/// # Examples
/// ```
/// use pricer_strategy::profile::spot_grid;
///
/// let grid = spot_grid(80.0, 120.0, 5).unwrap();
/// assert_eq!(grid, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
/// ```
pub fn spot_grid(lo: f64, hi: f64, points: usize) -> Result<Vec<f64>, StrategyError> {
    if lo <= 0.0 || hi <= 0.0 {
        return Err(StrategyError::InvalidGrid {
            message: format!("bounds must be positive, got [{}, {}]", lo, hi),
        });
    }
    if lo >= hi {
        return Err(StrategyError::InvalidGrid {
            message: format!("lo {} must be below hi {}", lo, hi),
        });
    }
    if points < 2 {
        return Err(StrategyError::InvalidGrid {
            message: format!("need at least 2 points, got {}", points),
        });
    }

    let step = (hi - lo) / (points - 1) as f64;
    Ok((0..points).map(|i| lo + step * i as f64).collect())
}

/// A basket of legs evaluated jointly at expiry.
///
/// # Examples
/// ```
/// use pricer_strategy::position::Position;
/// use pricer_strategy::profile::{spot_grid, PayoffProfile};
///
/// // Long straddle
/// let profile = PayoffProfile::new(vec![
///     Position::long_call(100.0, 4.0, 1.0, 100.0),
///     Position::long_put(100.0, 3.0, 1.0, 100.0),
/// ])
/// .unwrap();
///
/// let grid = spot_grid(70.0, 130.0, 121).unwrap();
/// // Worst case at the strike: both premiums lost
/// assert_eq!(profile.max_loss(&grid), -700.0);
/// assert_eq!(profile.breakevens(&grid).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffProfile {
    legs: Vec<Position>,
}

impl PayoffProfile {
    /// Creates a profile from one or more legs.
    ///
    /// # Errors
    /// `StrategyError::EmptyProfile` when `legs` is empty.
    pub fn new(legs: Vec<Position>) -> Result<Self, StrategyError> {
        if legs.is_empty() {
            return Err(StrategyError::EmptyProfile);
        }
        Ok(Self { legs })
    }

    /// Returns the legs.
    #[inline]
    pub fn legs(&self) -> &[Position] {
        &self.legs
    }

    /// Combined P&L at expiry for one spot.
    #[inline]
    pub fn pnl_at(&self, spot: f64) -> f64 {
        self.legs.iter().map(|leg| leg.pnl_at_expiry(spot)).sum()
    }

    /// Combined P&L across a grid of spots.
    pub fn evaluate(&self, grid: &[f64]) -> Vec<f64> {
        grid.iter().map(|&s| self.pnl_at(s)).collect()
    }

    /// Largest P&L attained on the grid.
    pub fn max_profit(&self, grid: &[f64]) -> f64 {
        self.evaluate(grid)
            .into_iter()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest P&L attained on the grid.
    pub fn max_loss(&self, grid: &[f64]) -> f64 {
        self.evaluate(grid).into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Spots where the P&L crosses zero, linearly interpolated between
    /// adjacent grid points.
    ///
    /// Grid nodes that are exactly zero are reported as-is; a crossing
    /// inside an interval is located by the secant through its endpoints.
    pub fn breakevens(&self, grid: &[f64]) -> Vec<f64> {
        let pnls = self.evaluate(grid);
        let mut crossings = Vec::new();

        for i in 0..pnls.len().saturating_sub(1) {
            let (p0, p1) = (pnls[i], pnls[i + 1]);
            if p0 == 0.0 {
                crossings.push(grid[i]);
            } else if p0.signum() != p1.signum() && p1 != 0.0 {
                // Secant interpolation inside (grid[i], grid[i+1])
                let t = p0 / (p0 - p1);
                crossings.push(grid[i] + t * (grid[i + 1] - grid[i]));
            }
        }
        if let Some(&last) = pnls.last() {
            if last == 0.0 {
                crossings.push(*grid.last().unwrap());
            }
        }

        crossings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn grid_construction() {
        let grid = spot_grid(90.0, 110.0, 3).unwrap();
        assert_eq!(grid, vec![90.0, 100.0, 110.0]);

        assert!(matches!(
            spot_grid(110.0, 90.0, 3),
            Err(StrategyError::InvalidGrid { .. })
        ));
        assert!(matches!(
            spot_grid(90.0, 110.0, 1),
            Err(StrategyError::InvalidGrid { .. })
        ));
        assert!(matches!(
            spot_grid(-5.0, 110.0, 3),
            Err(StrategyError::InvalidGrid { .. })
        ));
    }

    #[test]
    fn rejects_empty_profile() {
        assert!(matches!(
            PayoffProfile::new(vec![]),
            Err(StrategyError::EmptyProfile)
        ));
    }

    #[test]
    fn long_call_breakeven_at_strike_plus_premium() {
        let profile = PayoffProfile::new(vec![Position::long_call(100.0, 3.5, 1.0, 100.0)]).unwrap();
        let grid = spot_grid(80.0, 120.0, 401).unwrap();
        let breakevens = profile.breakevens(&grid);
        assert_eq!(breakevens.len(), 1);
        assert_relative_eq!(breakevens[0], 103.5, epsilon = 1e-9);
    }

    #[test]
    fn long_call_extremes() {
        let profile = PayoffProfile::new(vec![Position::long_call(100.0, 3.5, 1.0, 100.0)]).unwrap();
        let grid = spot_grid(50.0, 150.0, 101).unwrap();
        assert_relative_eq!(profile.max_loss(&grid), -350.0);
        assert_relative_eq!(profile.max_profit(&grid), (50.0 - 3.5) * 100.0);
    }

    #[test]
    fn straddle_has_two_breakevens() {
        let profile = PayoffProfile::new(vec![
            Position::long_call(100.0, 4.0, 1.0, 100.0),
            Position::long_put(100.0, 3.0, 1.0, 100.0),
        ])
        .unwrap();
        let grid = spot_grid(60.0, 140.0, 801).unwrap();
        let breakevens = profile.breakevens(&grid);
        assert_eq!(breakevens.len(), 2);
        assert_relative_eq!(breakevens[0], 93.0, epsilon = 1e-6);
        assert_relative_eq!(breakevens[1], 107.0, epsilon = 1e-6);
    }

    #[test]
    fn bull_spread_is_bounded_both_sides() {
        let profile = PayoffProfile::new(vec![
            Position::long_call(95.0, 7.0, 1.0, 100.0),
            Position::short_call(105.0, 3.0, 1.0, 100.0),
        ])
        .unwrap();
        let grid = spot_grid(70.0, 130.0, 241).unwrap();
        // Net debit 4: max loss -400, max profit (10 - 4) * 100
        assert_relative_eq!(profile.max_loss(&grid), -400.0);
        assert_relative_eq!(profile.max_profit(&grid), 600.0);
    }

    proptest! {
        #[test]
        fn profile_pnl_is_sum_of_legs(spot in 50.0_f64..150.0) {
            let call = Position::long_call(100.0, 4.0, 1.0, 100.0);
            let put = Position::short_put(95.0, 2.0, 1.0, 100.0);
            let profile = PayoffProfile::new(vec![call, put]).unwrap();
            let expected = call.pnl_at_expiry(spot) + put.pnl_at_expiry(spot);
            prop_assert!((profile.pnl_at(spot) - expected).abs() < 1e-9);
        }
    }
}
