//! History command: daily bars through the cache.

use tracing::info;

use crate::config::CliConfig;

/// Runs the history command.
pub fn run(config: &CliConfig, symbol: &str, days: u32) -> anyhow::Result<()> {
    let client = super::market_data_client(config)?;

    info!(symbol, days, "fetching history");
    let bars = client.history(symbol, days)?;

    println!("{}: {} sessions", symbol, bars.len());
    println!(
        "{:>12} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "date", "open", "high", "low", "close", "volume"
    );
    for bar in &bars {
        println!(
            "{:>12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
        );
    }

    if let (Some(first), Some(last)) = (bars.first(), bars.last()) {
        let change = 100.0 * (last.close - first.open) / first.open;
        println!("period move: {:+.2}%", change);
    }

    Ok(())
}
