//! # pricer_strategy: Payoff and P&L analysis
//!
//! Expiry analysis of option and stock positions:
//! - P&L and percent-return arithmetic (`position`)
//! - Multi-leg payoff profiles over a spot grid (`profile`)
//! - Text payoff diagrams (`chart`)
//! - Option-versus-stock leverage comparison (`leverage`)
//!
//! ## Usage example
//!
//! ```rust
//! use pricer_strategy::position::Position;
//! use pricer_strategy::profile::{spot_grid, PayoffProfile};
//!
//! // Long one 100-strike call for a 3.50 premium, 100 shares per contract
//! let leg = Position::long_call(100.0, 3.50, 1.0, 100.0);
//! let profile = PayoffProfile::new(vec![leg]).unwrap();
//!
//! let grid = spot_grid(80.0, 120.0, 81).unwrap();
//! let breakevens = profile.breakevens(&grid);
//! assert!((breakevens[0] - 103.5).abs() < 0.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chart;
mod error;
pub mod leverage;
pub mod position;
pub mod profile;

pub use error::StrategyError;
