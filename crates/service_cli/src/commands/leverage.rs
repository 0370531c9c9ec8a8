//! Leverage command: option-versus-stock comparison table.

use clap::Args;
use pricer_core::types::OptionType;
use pricer_strategy::leverage::LeverageComparison;

use crate::config::CliConfig;

/// Arguments for `optlab leverage`.
#[derive(Args)]
pub struct LeverageArgs {
    /// Capital to deploy
    #[arg(long)]
    pub capital: f64,

    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike of the option alternative
    #[arg(long)]
    pub strike: f64,

    /// Premium of the option alternative
    #[arg(long)]
    pub premium: f64,

    /// Option type: call or put
    #[arg(long, default_value = "call")]
    pub r#type: String,

    /// Exit spots to evaluate (defaults to -20%..+20% of spot)
    #[arg(long = "exit")]
    pub exits: Vec<f64>,
}

/// Runs the leverage command.
pub fn run(config: &CliConfig, args: &LeverageArgs) -> anyhow::Result<()> {
    let option_type: OptionType = args.r#type.parse().map_err(anyhow::Error::msg)?;

    let comparison = LeverageComparison::new(
        args.capital,
        args.spot,
        option_type,
        args.strike,
        args.premium,
        config.pricing.multiplier,
    )?;

    let exits: Vec<f64> = if args.exits.is_empty() {
        (-4..=4).map(|i| args.spot * (1.0 + 0.05 * i as f64)).collect()
    } else {
        args.exits.clone()
    };

    println!(
        "capital {:.2}: {:.0} shares vs {:.0} contract(s) of the {} {}",
        args.capital,
        comparison.shares(),
        comparison.contracts(),
        args.strike,
        option_type,
    );
    println!("{:>10} {:>12} {:>12} {:>10}", "exit", "stock %", "option %", "ratio");

    for row in comparison.compare(&exits) {
        let ratio = row
            .leverage_ratio()
            .map(|r| format!("{:.1}x", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>10.2} {:>12.1} {:>12.1} {:>10}",
            row.exit_spot, row.stock_return_pct, row.option_return_pct, ratio
        );
    }

    Ok(())
}
