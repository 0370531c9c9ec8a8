//! Market data models.

use chrono::{DateTime, NaiveDate, Utc};
use pricer_core::types::OptionType;
use serde::{Deserialize, Serialize};

/// A real-time (delayed) underlying quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Last traded price.
    pub price: f64,
    /// Best bid, when the venue reports one.
    pub bid: Option<f64>,
    /// Best ask, when the venue reports one.
    pub ask: Option<f64>,
    /// When the quote was fetched.
    pub timestamp: DateTime<Utc>,
}

/// One option quote inside a chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: f64,
    /// Best bid.
    pub bid: Option<f64>,
    /// Best ask.
    pub ask: Option<f64>,
    /// Last traded premium.
    pub last: Option<f64>,
    /// Session volume.
    pub volume: Option<u64>,
    /// Open interest.
    pub open_interest: Option<u64>,
    /// Venue-reported implied volatility.
    pub implied_vol: Option<f64>,
}

impl OptionQuote {
    /// Mid price when both sides are quoted, otherwise the last trade.
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(bid), Some(ask)) if bid > 0.0 && ask > 0.0 => Some(0.5 * (bid + ask)),
            _ => self.last,
        }
    }
}

/// All quotes for one underlying and expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionChain {
    /// Underlying ticker.
    pub symbol: String,
    /// Underlying price when the chain was fetched.
    pub spot: f64,
    /// Expiry date of every contract in the chain.
    pub expiry: NaiveDate,
    /// Call quotes sorted by strike.
    pub calls: Vec<OptionQuote>,
    /// Put quotes sorted by strike.
    pub puts: Vec<OptionQuote>,
}

impl OptionChain {
    /// Creates an empty chain.
    pub fn new(symbol: impl Into<String>, spot: f64, expiry: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            spot,
            expiry,
            calls: Vec::new(),
            puts: Vec::new(),
        }
    }

    /// Adds a quote to the matching side.
    pub fn push(&mut self, quote: OptionQuote) {
        match quote.option_type {
            OptionType::Call => self.calls.push(quote),
            OptionType::Put => self.puts.push(quote),
        }
    }

    /// Total number of quotes in the chain.
    pub fn len(&self) -> usize {
        self.calls.len() + self.puts.len()
    }

    /// Whether the chain holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty() && self.puts.is_empty()
    }

    /// The call closest to at-the-money.
    pub fn atm_call(&self) -> Option<&OptionQuote> {
        self.calls.iter().min_by(|a, b| {
            (a.strike - self.spot)
                .abs()
                .total_cmp(&(b.strike - self.spot).abs())
        })
    }

    /// The put closest to at-the-money.
    pub fn atm_put(&self) -> Option<&OptionQuote> {
        self.puts.iter().min_by(|a, b| {
            (a.strike - self.spot)
                .abs()
                .total_cmp(&(b.strike - self.spot).abs())
        })
    }
}

/// One daily history bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryBar {
    /// Session date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Session volume.
    pub volume: u64,
}
