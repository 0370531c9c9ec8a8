//! HTTP quote client.
//!
//! Talks to a Yahoo-style quote API over blocking HTTP. Endpoints:
//! - `/quote?symbols=SYM` for spot quotes
//! - `/options/SYM` for expiration lists, `/options/SYM?date=TS` for chains
//! - `/chart/SYM?range=Nd&interval=1d` for daily history
//!
//! Data is delayed roughly 15 minutes and is for research use.

use chrono::{DateTime, NaiveDate, Utc};
use pricer_core::types::OptionType;
use serde::Deserialize;
use std::time::Duration;

use crate::error::QuoteError;
use crate::models::{HistoryBar, OptionChain, OptionQuote, SpotQuote};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v7/finance";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// Blocking HTTP client for quotes, chains, and history.
pub struct QuoteClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl QuoteClient {
    /// Creates a client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, QuoteError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client against the default endpoint.
    pub fn with_default_endpoint() -> Result<Self, QuoteError> {
        Self::new(DEFAULT_BASE_URL)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, QuoteError> {
        self.client
            .get(url)
            .send()
            .map_err(|e| QuoteError::Network(e.to_string()))?
            .json()
            .map_err(|e| QuoteError::data(format!("failed to parse response: {}", e)))
    }

    /// Fetches the current (delayed) quote for `symbol`.
    pub fn spot_quote(&self, symbol: &str) -> Result<SpotQuote, QuoteError> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);
        let response: QuoteResponse = self.get_json(&url)?;

        let data = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::data(format!("no quote returned for {}", symbol)))?;

        Ok(SpotQuote {
            symbol: symbol.to_string(),
            price: data.regular_market_price,
            bid: data.bid,
            ask: data.ask,
            timestamp: Utc::now(),
        })
    }

    /// Fetches the available option expiration dates for `symbol`.
    pub fn expirations(&self, symbol: &str) -> Result<Vec<NaiveDate>, QuoteError> {
        let url = format!("{}/options/{}", self.base_url, symbol);
        let response: OptionsResponse = self.get_json(&url)?;
        let chain = first_chain(response, symbol)?;

        Ok(chain
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect())
    }

    /// Fetches the option chain for `symbol` at `expiry`.
    pub fn option_chain(&self, symbol: &str, expiry: NaiveDate) -> Result<OptionChain, QuoteError> {
        // Venue keys chains by the 16:00 UTC expiry timestamp
        let expiry_ts = expiry
            .and_hms_opt(16, 0, 0)
            .ok_or_else(|| QuoteError::data("invalid expiry date"))?
            .and_utc()
            .timestamp();

        let url = format!("{}/options/{}?date={}", self.base_url, symbol, expiry_ts);
        let response: OptionsResponse = self.get_json(&url)?;
        let data = first_chain(response, symbol)?;

        let mut chain = OptionChain::new(symbol, data.quote.regular_market_price, expiry);
        if let Some(options) = data.options.first() {
            for wire in &options.calls {
                if let Some(quote) = wire.to_quote(OptionType::Call) {
                    chain.push(quote);
                }
            }
            for wire in &options.puts {
                if let Some(quote) = wire.to_quote(OptionType::Put) {
                    chain.push(quote);
                }
            }
        }
        if chain.is_empty() {
            tracing::warn!(symbol, %expiry, "empty option chain returned");
        }
        Ok(chain)
    }

    /// Fetches `days` of daily history bars for `symbol`.
    pub fn history(&self, symbol: &str, days: u32) -> Result<Vec<HistoryBar>, QuoteError> {
        let url = format!(
            "{}/chart/{}?range={}d&interval=1d",
            self.base_url, symbol, days
        );
        let response: ChartResponse = self.get_json(&url)?;

        let data = response
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::data(format!("no history returned for {}", symbol)))?;
        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| QuoteError::data("history response missing quote block"))?;

        let mut bars = Vec::with_capacity(data.timestamp.len());
        for (i, &ts) in data.timestamp.iter().enumerate() {
            let date = match DateTime::from_timestamp(ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };
            // Skip half-populated sessions rather than inventing values
            match (
                value_at(&quote.open, i),
                value_at(&quote.high, i),
                value_at(&quote.low, i),
                value_at(&quote.close, i),
            ) {
                (Some(open), Some(high), Some(low), Some(close)) => bars.push(HistoryBar {
                    date,
                    open,
                    high,
                    low,
                    close,
                    volume: value_at(&quote.volume, i).unwrap_or(0),
                }),
                _ => tracing::debug!(symbol, %date, "skipping incomplete history bar"),
            }
        }
        Ok(bars)
    }
}

fn value_at<T: Copy>(series: &[Option<T>], i: usize) -> Option<T> {
    series.get(i).copied().flatten()
}

fn first_chain(response: OptionsResponse, symbol: &str) -> Result<OptionChainData, QuoteError> {
    response
        .option_chain
        .result
        .into_iter()
        .next()
        .ok_or_else(|| QuoteError::data(format!("no options data returned for {}", symbol)))
}

// Wire format structures

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
    bid: Option<f64>,
    ask: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: OptionChainResult,
}

#[derive(Debug, Deserialize)]
struct OptionChainResult {
    result: Vec<OptionChainData>,
}

#[derive(Debug, Deserialize)]
struct OptionChainData {
    #[serde(rename = "expirationDates", default)]
    expiration_dates: Vec<i64>,
    quote: QuoteData,
    #[serde(default)]
    options: Vec<OptionsBlock>,
}

#[derive(Debug, Deserialize)]
struct OptionsBlock {
    #[serde(default)]
    calls: Vec<OptionWire>,
    #[serde(default)]
    puts: Vec<OptionWire>,
}

#[derive(Debug, Deserialize)]
struct OptionWire {
    strike: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
    volume: Option<u64>,
    #[serde(rename = "openInterest")]
    open_interest: Option<u64>,
    #[serde(rename = "impliedVolatility")]
    implied_volatility: Option<f64>,
}

impl OptionWire {
    fn to_quote(&self, option_type: OptionType) -> Option<OptionQuote> {
        Some(OptionQuote {
            option_type,
            strike: self.strike?,
            bid: self.bid,
            ask: self.ask,
            last: self.last_price,
            volume: self.volume,
            open_interest: self.open_interest,
            implied_vol: self.implied_volatility,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Vec<ChartData>,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_wire_format() {
        let json = r#"{
            "optionChain": {
                "result": [{
                    "expirationDates": [1789689600],
                    "quote": {"regularMarketPrice": 500.5, "bid": 500.4, "ask": 500.6},
                    "options": [{
                        "calls": [{"strike": 495.0, "bid": 8.1, "ask": 8.4, "lastPrice": 8.2,
                                   "volume": 120, "openInterest": 900, "impliedVolatility": 0.21}],
                        "puts": [{"strike": 505.0, "bid": 9.0, "ask": 9.3, "lastPrice": 9.1}]
                    }]
                }]
            }
        }"#;
        let parsed: OptionsResponse = serde_json::from_str(json).unwrap();
        let chain = first_chain(parsed, "SPY").unwrap();
        assert_eq!(chain.options[0].calls.len(), 1);
        assert_eq!(chain.options[0].puts.len(), 1);
        assert_eq!(chain.quote.regular_market_price, 500.5);
    }

    #[test]
    fn quote_without_strike_is_dropped() {
        let wire = OptionWire {
            strike: None,
            bid: Some(1.0),
            ask: Some(1.1),
            last_price: None,
            volume: None,
            open_interest: None,
            implied_volatility: None,
        };
        assert!(wire.to_quote(OptionType::Call).is_none());
    }

    #[test]
    fn parses_chart_wire_format_with_gaps() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1722470400, 1722556800],
                    "indicators": {
                        "quote": [{
                            "open": [100.0, null],
                            "high": [101.0, 102.0],
                            "low": [99.5, 100.0],
                            "close": [100.5, 101.5],
                            "volume": [1000000, 900000]
                        }]
                    }
                }]
            }
        }"#;
        let parsed: ChartResponse = serde_json::from_str(json).unwrap();
        let data = &parsed.chart.result[0];
        assert_eq!(data.timestamp.len(), 2);
        // Second bar has a null open and would be skipped by `history`
        assert_eq!(data.indicators.quote[0].open[1], None);
    }

    #[test]
    #[ignore] // Requires network
    fn fetches_live_quote() {
        let client = QuoteClient::with_default_endpoint().unwrap();
        let quote = client.spot_quote("SPY").unwrap();
        assert!(quote.price > 0.0);
    }

    #[test]
    #[ignore] // Requires network
    fn fetches_live_chain() {
        let client = QuoteClient::with_default_endpoint().unwrap();
        let expiries = client.expirations("SPY").unwrap();
        let chain = client.option_chain("SPY", expiries[0]).unwrap();
        assert!(!chain.is_empty());
    }
}
