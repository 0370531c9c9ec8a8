//! # adapter_quotes: Market data adapter
//!
//! Blocking HTTP access to spot quotes, option chains, and daily history,
//! with a local file cache:
//! - `models`: serde data models for quotes, chains, and bars
//! - `client`: HTTP client against a quote API
//! - `cache`: JSON/CSV cache and the fetch-through `CachedQuoteClient`
//!
//! Quote data is delayed and intended for exploratory analysis, not
//! execution. When the network is unavailable the cached copy is served
//! even past its freshness window; only a cold cache propagates the error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod client;
mod error;
pub mod models;

pub use cache::{CacheConfig, CachedQuoteClient, QuoteCache};
pub use client::QuoteClient;
pub use error::QuoteError;
