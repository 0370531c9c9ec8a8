//! Subcommand implementations.

pub mod chain;
pub mod history;
pub mod leverage;
pub mod parity;
pub mod payoff;
pub mod price;
pub mod quote;

use adapter_quotes::{CacheConfig, CachedQuoteClient, QuoteClient};

use crate::config::CliConfig;

/// Builds the fetch-through market data client from the configuration.
pub(crate) fn market_data_client(config: &CliConfig) -> anyhow::Result<CachedQuoteClient> {
    let client = QuoteClient::new(config.data.base_url.clone())?;
    let cache = CacheConfig {
        cache_dir: config.data.cache_dir.clone().into(),
        max_age_hours: config.data.max_age_hours,
        enabled: true,
    };
    Ok(CachedQuoteClient::new(client, cache)?)
}
