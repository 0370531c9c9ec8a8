//! Local quote cache and fetch-through client.
//!
//! Chains and spot quotes are cached as JSON, history bars as CSV. A cached
//! file is *fresh* while its age is under the configured maximum; the
//! fetch-through client serves fresh files without touching the network and
//! falls back to stale files when the network fails.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::QuoteClient;
use crate::error::QuoteError;
use crate::models::{HistoryBar, OptionChain, SpotQuote};

/// Cache location and freshness settings.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Directory holding cache files.
    pub cache_dir: PathBuf,
    /// Maximum age before a file stops being fresh.
    pub max_age_hours: i64,
    /// Whether caching is enabled at all.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("./data/cache"),
            max_age_hours: 24,
            enabled: true,
        }
    }
}

/// File-backed cache for quotes, chains, and history.
pub struct QuoteCache {
    config: CacheConfig,
}

impl QuoteCache {
    /// Creates the cache, making the directory if needed.
    pub fn new(config: CacheConfig) -> Result<Self, QuoteError> {
        if config.enabled && !config.cache_dir.exists() {
            fs::create_dir_all(&config.cache_dir)?;
        }
        Ok(Self { config })
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.config.cache_dir.join(name)
    }

    fn chain_file(symbol: &str, expiry: NaiveDate) -> String {
        format!("{}_{}_chain.json", symbol, expiry)
    }

    fn spot_file(symbol: &str) -> String {
        format!("{}_spot.json", symbol)
    }

    fn history_file(symbol: &str) -> String {
        format!("{}_history.csv", symbol)
    }

    fn is_fresh(&self, path: &Path) -> bool {
        if !self.config.enabled || !path.exists() {
            return false;
        }
        fs::metadata(path)
            .and_then(|m| m.modified())
            .map(|modified| {
                let modified: DateTime<Utc> = modified.into();
                Utc::now() - modified < Duration::hours(self.config.max_age_hours)
            })
            .unwrap_or(false)
    }

    /// Stores an option chain.
    pub fn save_chain(&self, chain: &OptionChain) -> Result<(), QuoteError> {
        if !self.config.enabled {
            return Ok(());
        }
        let path = self.path_for(&Self::chain_file(&chain.symbol, chain.expiry));
        let json = serde_json::to_string_pretty(chain)
            .map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        fs::write(&path, json)?;
        tracing::info!(symbol = %chain.symbol, path = %path.display(), "cached option chain");
        Ok(())
    }

    /// Loads an option chain; `allow_stale` ignores the freshness window.
    pub fn load_chain(
        &self,
        symbol: &str,
        expiry: NaiveDate,
        allow_stale: bool,
    ) -> Result<Option<OptionChain>, QuoteError> {
        let path = self.path_for(&Self::chain_file(symbol, expiry));
        if !self.config.enabled || !path.exists() {
            return Ok(None);
        }
        if !allow_stale && !self.is_fresh(&path) {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        let chain =
            serde_json::from_str(&json).map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        Ok(Some(chain))
    }

    /// Stores a spot quote.
    pub fn save_spot(&self, quote: &SpotQuote) -> Result<(), QuoteError> {
        if !self.config.enabled {
            return Ok(());
        }
        let path = self.path_for(&Self::spot_file(&quote.symbol));
        let json = serde_json::to_string_pretty(quote)
            .map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Loads a spot quote; `allow_stale` ignores the freshness window.
    pub fn load_spot(
        &self,
        symbol: &str,
        allow_stale: bool,
    ) -> Result<Option<SpotQuote>, QuoteError> {
        let path = self.path_for(&Self::spot_file(symbol));
        if !self.config.enabled || !path.exists() {
            return Ok(None);
        }
        if !allow_stale && !self.is_fresh(&path) {
            return Ok(None);
        }
        let json = fs::read_to_string(&path)?;
        let quote =
            serde_json::from_str(&json).map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        Ok(Some(quote))
    }

    /// Stores history bars as CSV.
    pub fn save_history(&self, symbol: &str, bars: &[HistoryBar]) -> Result<(), QuoteError> {
        if !self.config.enabled {
            return Ok(());
        }
        let path = self.path_for(&Self::history_file(symbol));
        let mut writer =
            csv::Writer::from_path(&path).map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        for bar in bars {
            writer
                .serialize(bar)
                .map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        tracing::info!(symbol, bars = bars.len(), "cached history");
        Ok(())
    }

    /// Loads history bars; `allow_stale` ignores the freshness window.
    pub fn load_history(
        &self,
        symbol: &str,
        allow_stale: bool,
    ) -> Result<Option<Vec<HistoryBar>>, QuoteError> {
        let path = self.path_for(&Self::history_file(symbol));
        if !self.config.enabled || !path.exists() {
            return Ok(None);
        }
        if !allow_stale && !self.is_fresh(&path) {
            return Ok(None);
        }
        let mut reader =
            csv::Reader::from_path(&path).map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        let bars = reader
            .deserialize()
            .collect::<Result<Vec<HistoryBar>, _>>()
            .map_err(|e| QuoteError::Serialisation(e.to_string()))?;
        Ok(Some(bars))
    }

    /// Removes every cache file for `symbol`.
    pub fn clear(&self, symbol: &str) -> Result<(), QuoteError> {
        if !self.config.cache_dir.exists() {
            return Ok(());
        }
        let prefix = format!("{}_", symbol);
        for entry in fs::read_dir(&self.config.cache_dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with(&prefix) {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}

/// Fetch-through client: fresh cache, then network, then stale cache.
pub struct CachedQuoteClient {
    client: QuoteClient,
    cache: QuoteCache,
}

impl CachedQuoteClient {
    /// Wraps `client` with a cache under `config`.
    pub fn new(client: QuoteClient, config: CacheConfig) -> Result<Self, QuoteError> {
        Ok(Self {
            client,
            cache: QuoteCache::new(config)?,
        })
    }

    /// Spot quote for `symbol` with cache fallback.
    pub fn spot_quote(&self, symbol: &str) -> Result<SpotQuote, QuoteError> {
        if let Some(quote) = self.cache.load_spot(symbol, false)? {
            return Ok(quote);
        }
        match self.client.spot_quote(symbol) {
            Ok(quote) => {
                self.cache.save_spot(&quote)?;
                Ok(quote)
            }
            Err(err) => self.fall_back(symbol, err, |c| c.load_spot(symbol, true)),
        }
    }

    /// Option chain for `symbol` at `expiry` with cache fallback.
    pub fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> Result<OptionChain, QuoteError> {
        if let Some(chain) = self.cache.load_chain(symbol, expiry, false)? {
            return Ok(chain);
        }
        match self.client.option_chain(symbol, expiry) {
            Ok(chain) => {
                self.cache.save_chain(&chain)?;
                Ok(chain)
            }
            Err(err) => self.fall_back(symbol, err, |c| c.load_chain(symbol, expiry, true)),
        }
    }

    /// Daily history for `symbol` with cache fallback.
    pub fn history(&self, symbol: &str, days: u32) -> Result<Vec<HistoryBar>, QuoteError> {
        if let Some(bars) = self.cache.load_history(symbol, false)? {
            return Ok(bars);
        }
        match self.client.history(symbol, days) {
            Ok(bars) => {
                self.cache.save_history(symbol, &bars)?;
                Ok(bars)
            }
            Err(err) => self.fall_back(symbol, err, |c| c.load_history(symbol, true)),
        }
    }

    fn fall_back<T>(
        &self,
        symbol: &str,
        fetch_err: QuoteError,
        load: impl FnOnce(&QuoteCache) -> Result<Option<T>, QuoteError>,
    ) -> Result<T, QuoteError> {
        tracing::warn!(symbol, error = %fetch_err, "fetch failed, trying stale cache");
        match load(&self.cache)? {
            Some(value) => Ok(value),
            None => Err(QuoteError::Unavailable {
                symbol: symbol.to_string(),
                reason: fetch_err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionQuote, SpotQuote};
    use pricer_core::types::OptionType;
    use tempfile::tempdir;

    fn temp_config(dir: &Path) -> CacheConfig {
        CacheConfig {
            cache_dir: dir.to_path_buf(),
            max_age_hours: 24,
            enabled: true,
        }
    }

    fn sample_chain() -> OptionChain {
        let expiry = NaiveDate::from_ymd_opt(2026, 9, 18).unwrap();
        let mut chain = OptionChain::new("TEST", 100.0, expiry);
        chain.push(OptionQuote {
            option_type: OptionType::Call,
            strike: 100.0,
            bid: Some(4.9),
            ask: Some(5.1),
            last: Some(5.0),
            volume: Some(12),
            open_interest: Some(34),
            implied_vol: Some(0.2),
        });
        chain
    }

    #[test]
    fn chain_round_trips_through_cache() {
        let dir = tempdir().unwrap();
        let cache = QuoteCache::new(temp_config(dir.path())).unwrap();
        let chain = sample_chain();

        cache.save_chain(&chain).unwrap();
        let loaded = cache.load_chain("TEST", chain.expiry, false).unwrap().unwrap();
        assert_eq!(loaded.symbol, "TEST");
        assert_eq!(loaded.calls.len(), 1);
    }

    #[test]
    fn history_round_trips_as_csv() {
        let dir = tempdir().unwrap();
        let cache = QuoteCache::new(temp_config(dir.path())).unwrap();
        let bars = vec![
            HistoryBar {
                date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(),
                open: 100.0,
                high: 101.5,
                low: 99.0,
                close: 101.0,
                volume: 1_000_000,
            },
            HistoryBar {
                date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
                open: 101.0,
                high: 102.0,
                low: 100.5,
                close: 101.8,
                volume: 900_000,
            },
        ];

        cache.save_history("TEST", &bars).unwrap();
        let loaded = cache.load_history("TEST", false).unwrap().unwrap();
        assert_eq!(loaded, bars);
    }

    #[test]
    fn zero_max_age_makes_everything_stale() {
        let dir = tempdir().unwrap();
        let mut config = temp_config(dir.path());
        config.max_age_hours = 0;
        let cache = QuoteCache::new(config).unwrap();
        let chain = sample_chain();

        cache.save_chain(&chain).unwrap();
        // Not fresh, but still loadable when staleness is allowed
        assert!(cache.load_chain("TEST", chain.expiry, false).unwrap().is_none());
        assert!(cache.load_chain("TEST", chain.expiry, true).unwrap().is_some());
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let dir = tempdir().unwrap();
        let mut config = temp_config(dir.path());
        config.enabled = false;
        let cache = QuoteCache::new(config).unwrap();

        cache.save_chain(&sample_chain()).unwrap();
        assert!(cache
            .load_chain("TEST", sample_chain().expiry, true)
            .unwrap()
            .is_none());
    }

    #[test]
    fn clear_removes_symbol_files() {
        let dir = tempdir().unwrap();
        let cache = QuoteCache::new(temp_config(dir.path())).unwrap();
        let chain = sample_chain();
        cache.save_chain(&chain).unwrap();

        cache.clear("TEST").unwrap();
        assert!(cache.load_chain("TEST", chain.expiry, true).unwrap().is_none());
    }

    #[test]
    fn network_failure_falls_back_to_stale_cache() {
        let dir = tempdir().unwrap();
        let mut config = temp_config(dir.path());
        config.max_age_hours = 0; // cached copy is immediately stale

        let cache = QuoteCache::new(config.clone()).unwrap();
        let quote = SpotQuote {
            symbol: "TEST".to_string(),
            price: 123.45,
            bid: None,
            ask: None,
            timestamp: Utc::now(),
        };
        cache.save_spot(&quote).unwrap();

        // Port 9 (discard) refuses connections immediately
        let client = QuoteClient::new("http://127.0.0.1:9").unwrap();
        let cached = CachedQuoteClient::new(client, config).unwrap();

        let served = cached.spot_quote("TEST").unwrap();
        assert_eq!(served.price, 123.45);
    }

    #[test]
    fn cold_cache_propagates_unavailable() {
        let dir = tempdir().unwrap();
        let client = QuoteClient::new("http://127.0.0.1:9").unwrap();
        let cached = CachedQuoteClient::new(client, temp_config(dir.path())).unwrap();

        assert!(matches!(
            cached.spot_quote("MISSING"),
            Err(QuoteError::Unavailable { .. })
        ));
    }
}
