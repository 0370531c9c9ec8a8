//! Chain command: option chain through the cache.

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use crate::config::CliConfig;

/// Runs the chain command.
pub fn run(config: &CliConfig, symbol: &str, expiry: &str) -> anyhow::Result<()> {
    let expiry: NaiveDate = expiry
        .parse()
        .with_context(|| format!("bad expiry date '{}', expected YYYY-MM-DD", expiry))?;

    let client = super::market_data_client(config)?;
    info!(symbol, %expiry, "fetching option chain");
    let chain = client.option_chain(symbol, expiry)?;

    println!(
        "{} {} (spot {:.2}): {} calls, {} puts",
        chain.symbol,
        chain.expiry,
        chain.spot,
        chain.calls.len(),
        chain.puts.len()
    );

    println!("{:>10} {:>8} {:>8} {:>8} {:>8} {:>8}", "strike", "side", "bid", "ask", "mid", "iv");
    for quote in chain.calls.iter().chain(chain.puts.iter()) {
        println!(
            "{:>10.2} {:>8} {:>8} {:>8} {:>8} {:>8}",
            quote.strike,
            quote.option_type.to_string(),
            fmt_opt(quote.bid),
            fmt_opt(quote.ask),
            fmt_opt(quote.mid()),
            fmt_opt(quote.implied_vol),
        );
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}
