//! Parity command: put-call parity check.

use clap::Args;
use pricer_vanilla::analytical::{parity_gap, BlackScholes};

use crate::config::CliConfig;

/// Arguments for `optlab parity`.
#[derive(Args)]
pub struct ParityArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Days to maturity
    #[arg(long)]
    pub days: u32,

    /// Annualised volatility
    #[arg(long)]
    pub vol: f64,

    /// Risk-free rate override
    #[arg(long)]
    pub rate: Option<f64>,
}

/// Runs the parity command.
pub fn run(config: &CliConfig, args: &ParityArgs) -> anyhow::Result<()> {
    let rate = args.rate.unwrap_or(config.pricing.rate);
    let q = config.pricing.dividend_yield;
    let expiry = config.pricing.day_count.year_fraction(args.days);

    let model = BlackScholes::new(args.spot, rate, q, args.vol)?;
    let call = model.price_call(args.strike, expiry);
    let put = model.price_put(args.strike, expiry);
    let gap = parity_gap(call, put, args.spot, args.strike, rate, q, expiry);

    println!("call:          {:>10.4}", call);
    println!("put:           {:>10.4}", put);
    println!(
        "forward value: {:>10.4}",
        args.spot * (-q * expiry).exp() - args.strike * (-rate * expiry).exp()
    );
    println!("parity gap:    {:>10.2e}", gap);

    Ok(())
}
