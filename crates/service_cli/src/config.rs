//! CLI configuration.
//!
//! Defaults for pricing inputs and the market data layer, loadable from a
//! TOML file. A missing file yields the built-in defaults; a malformed file
//! is an error.

use anyhow::Context;
use pricer_core::types::DayCount;
use serde::Deserialize;
use std::path::Path;

/// Default quote API endpoint.
pub use adapter_quotes::client::DEFAULT_BASE_URL;

/// Pricing defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Risk-free rate used when the command line omits one.
    pub rate: f64,
    /// Continuous dividend yield default.
    pub dividend_yield: f64,
    /// Day count convention.
    pub day_count: DayCount,
    /// Contract multiplier.
    pub multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate: 0.05,
            dividend_yield: 0.0,
            day_count: DayCount::Act365Fixed,
            multiplier: 100.0,
        }
    }
}

/// Monte Carlo defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct McConfig {
    /// Simulation paths.
    pub paths: usize,
    /// Time steps per path.
    pub steps: usize,
}

impl Default for McConfig {
    fn default() -> Self {
        Self {
            paths: 100_000,
            steps: 50,
        }
    }
}

/// Market data defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Quote API base URL.
    pub base_url: String,
    /// Cache directory.
    pub cache_dir: String,
    /// Cache freshness window in hours.
    pub max_age_hours: i64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_dir: "./data/cache".to_string(),
            max_age_hours: 24,
        }
    }
}

/// Full CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Pricing defaults.
    pub pricing: PricingConfig,
    /// Monte Carlo defaults.
    pub mc: McConfig,
    /// Market data defaults.
    pub data: DataConfig,
}

impl CliConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            tracing::debug!(path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config file {}", path))
    }
}
