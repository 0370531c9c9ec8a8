//! Quote command: spot quote through the cache.

use tracing::info;

use crate::config::CliConfig;

/// Runs the quote command.
pub fn run(config: &CliConfig, symbol: &str) -> anyhow::Result<()> {
    let client = super::market_data_client(config)?;

    info!(symbol, "fetching spot quote");
    let quote = client.spot_quote(symbol)?;

    println!("{}: {:.2}", quote.symbol, quote.price);
    if let (Some(bid), Some(ask)) = (quote.bid, quote.ask) {
        println!("  bid/ask: {:.2} / {:.2}", bid, ask);
    }
    println!("  as of:   {}", quote.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));

    Ok(())
}
