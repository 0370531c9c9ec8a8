//! Put-call parity.
//!
//! For European options on the same underlying, strike, and expiry:
//!
//! C - P = S e^(-qT) - K e^(-rT)
//!
//! Analytical prices satisfy this identity to machine precision; market
//! prices satisfy it only up to spreads and carry, which makes the residual
//! a useful data-quality check.

/// Parity residual: C - P - (S e^(-qT) - K e^(-rT)).
///
/// Zero (to rounding) for consistent European prices.
///
/// # Examples
/// ```
/// use pricer_vanilla::analytical::{parity_gap, BlackScholes};
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let gap = parity_gap(
///     bs.price_call(105.0, 1.0),
///     bs.price_put(105.0, 1.0),
///     100.0,
///     105.0,
///     0.05,
///     0.0,
///     1.0,
/// );
/// assert!(gap.abs() < 1e-10);
/// ```
#[inline]
pub fn parity_gap(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
) -> f64 {
    let forward = spot * (-dividend_yield * expiry).exp() - strike * (-rate * expiry).exp();
    call - put - forward
}

/// Whether the parity residual is within `tolerance`.
#[inline]
pub fn parity_holds(
    call: f64,
    put: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    expiry: f64,
    tolerance: f64,
) -> bool {
    parity_gap(call, put, spot, strike, rate, dividend_yield, expiry).abs() <= tolerance
}
