//! Analytical (closed-form) pricing.
//!
//! This module provides:
//! - `BlackScholes`: European pricing and Greeks under lognormal dynamics
//! - `implied_volatility`: volatility inversion from an observed price
//! - `parity_gap`: put-call parity residual
//! - `AnalyticalError`: errors from analytical operations

mod black_scholes;
mod error;
mod implied_vol;
mod parity;

pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
pub use implied_vol::implied_volatility;
pub use parity::{parity_gap, parity_holds};
