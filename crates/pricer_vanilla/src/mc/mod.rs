//! Monte Carlo pricing under geometric Brownian motion.
//!
//! This module provides:
//! - `MonteCarloConfig`: builder-validated simulation settings
//! - `GbmParams`: market parameters for the GBM dynamics
//! - `MonteCarloPricer`: sequential pricing with standard error reporting
//! - `McError`: simulation errors

mod config;
mod error;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::McError;
pub use pricer::{GbmParams, McResult, MonteCarloPricer};
