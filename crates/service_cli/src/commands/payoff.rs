//! Payoff command: text payoff/P&L diagram.

use anyhow::{bail, Context};
use clap::Args;
use pricer_strategy::chart::{render_diagram, ChartConfig};
use pricer_strategy::position::Position;
use pricer_strategy::profile::{spot_grid, PayoffProfile};

/// Arguments for `optlab payoff`.
#[derive(Args)]
pub struct PayoffArgs {
    /// Legs as SIDE-KIND:STRIKE:PREMIUM, e.g. long-call:100:3.5
    /// (stock legs: long-stock:ENTRY:SHARES)
    #[arg(long = "leg", required = true)]
    pub legs: Vec<String>,

    /// Contract multiplier for option legs
    #[arg(long, default_value = "100")]
    pub multiplier: f64,

    /// Lower edge of the spot grid (defaults to 60% of the lowest strike)
    #[arg(long)]
    pub lo: Option<f64>,

    /// Upper edge of the spot grid (defaults to 140% of the highest strike)
    #[arg(long)]
    pub hi: Option<f64>,

    /// Number of grid points
    #[arg(long, default_value = "241")]
    pub points: usize,
}

fn parse_leg(spec: &str, multiplier: f64) -> anyhow::Result<Position> {
    let parts: Vec<&str> = spec.split(':').collect();
    if parts.len() != 3 {
        bail!("leg '{}' must be SIDE-KIND:STRIKE:PREMIUM", spec);
    }
    let level: f64 = parts[1]
        .parse()
        .with_context(|| format!("bad strike/entry in leg '{}'", spec))?;
    let price: f64 = parts[2]
        .parse()
        .with_context(|| format!("bad premium/quantity in leg '{}'", spec))?;

    Ok(match parts[0] {
        "long-call" => Position::long_call(level, price, 1.0, multiplier),
        "long-put" => Position::long_put(level, price, 1.0, multiplier),
        "short-call" => Position::short_call(level, price, 1.0, multiplier),
        "short-put" => Position::short_put(level, price, 1.0, multiplier),
        "long-stock" => Position::long_stock(level, price),
        "short-stock" => Position::short_stock(level, price),
        other => bail!("unknown leg kind '{}'", other),
    })
}

fn reference_level(leg: &Position) -> f64 {
    match leg.instrument() {
        pricer_strategy::position::Instrument::Stock => leg.entry_price(),
        pricer_strategy::position::Instrument::Option { strike, .. } => strike,
    }
}

/// Runs the payoff command.
pub fn run(args: &PayoffArgs) -> anyhow::Result<()> {
    let legs = args
        .legs
        .iter()
        .map(|spec| parse_leg(spec, args.multiplier))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let min_level = legs.iter().map(|l| reference_level(l)).fold(f64::INFINITY, f64::min);
    let max_level = legs
        .iter()
        .map(|l| reference_level(l))
        .fold(f64::NEG_INFINITY, f64::max);
    let lo = args.lo.unwrap_or(0.6 * min_level);
    let hi = args.hi.unwrap_or(1.4 * max_level);

    let profile = PayoffProfile::new(legs)?;
    let grid = spot_grid(lo, hi, args.points)?;
    let diagram = render_diagram(&profile, &grid, &ChartConfig::default())?;
    print!("{}", diagram);

    println!("max profit: {:>12.2}", profile.max_profit(&grid));
    println!("max loss:   {:>12.2}", profile.max_loss(&grid));
    let breakevens = profile.breakevens(&grid);
    if breakevens.is_empty() {
        println!("breakevens: none on grid");
    } else {
        let formatted: Vec<String> = breakevens.iter().map(|b| format!("{:.2}", b)).collect();
        println!("breakevens: {}", formatted.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_legs() {
        let leg = parse_leg("long-call:100:3.5", 100.0).unwrap();
        assert_eq!(leg.entry_price(), 3.5);

        let leg = parse_leg("short-put:95:2.25", 100.0).unwrap();
        assert_eq!(leg.entry_price(), 2.25);
    }

    #[test]
    fn parses_stock_legs() {
        let leg = parse_leg("long-stock:250:40", 100.0).unwrap();
        assert_eq!(leg.entry_price(), 250.0);
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_leg("long-call:100", 100.0).is_err());
        assert!(parse_leg("straddle:100:3.5", 100.0).is_err());
        assert!(parse_leg("long-call:abc:3.5", 100.0).is_err());
    }
}
