//! Price command: value one contract.

use anyhow::{bail, Context};
use clap::Args;
use pricer_core::types::{ExerciseStyle, OptionType};
use pricer_vanilla::analytical::BlackScholes;
use pricer_vanilla::engine::{value, Engine, ValuationRequest};
use pricer_vanilla::mc::MonteCarloConfig;
use tracing::info;

use crate::config::CliConfig;

/// Arguments for `optlab price`.
#[derive(Args)]
pub struct PriceArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Days to maturity
    #[arg(long)]
    pub days: u32,

    /// Annualised volatility (e.g. 0.2 for 20%)
    #[arg(long)]
    pub vol: f64,

    /// Option type: call or put
    #[arg(long, default_value = "call")]
    pub r#type: String,

    /// Exercise style: european or american
    #[arg(long, default_value = "european")]
    pub style: String,

    /// Engine: analytic, binomial, or mc
    #[arg(long, default_value = "analytic")]
    pub engine: String,

    /// Binomial tree steps
    #[arg(long, default_value = "1000")]
    pub steps: usize,

    /// Monte Carlo paths (defaults from configuration)
    #[arg(long)]
    pub paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Risk-free rate override
    #[arg(long)]
    pub rate: Option<f64>,

    /// Dividend yield override
    #[arg(long)]
    pub dividend_yield: Option<f64>,

    /// Decimal places for the reported price
    #[arg(long, default_value = "2")]
    pub dp: u32,

    /// Emit the valuation as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Runs the price command.
pub fn run(config: &CliConfig, args: &PriceArgs) -> anyhow::Result<()> {
    let option_type: OptionType = args.r#type.parse().map_err(anyhow::Error::msg)?;
    let style: ExerciseStyle = args.style.parse().map_err(anyhow::Error::msg)?;
    let rate = args.rate.unwrap_or(config.pricing.rate);
    let dividend_yield = args.dividend_yield.unwrap_or(config.pricing.dividend_yield);

    let engine = match args.engine.as_str() {
        "analytic" => Engine::Analytic,
        "binomial" => Engine::Binomial { steps: args.steps },
        "mc" | "monte-carlo" => {
            let mut builder = MonteCarloConfig::builder()
                .n_paths(args.paths.unwrap_or(config.mc.paths))
                .n_steps(config.mc.steps);
            if let Some(seed) = args.seed {
                builder = builder.seed(seed);
            }
            Engine::MonteCarlo(builder.build()?)
        }
        other => bail!("unknown engine '{}', expected analytic, binomial, or mc", other),
    };

    let request = ValuationRequest::new(args.spot, args.strike, args.days, args.vol, option_type)
        .with_rate(rate)
        .with_dividend_yield(dividend_yield)
        .with_day_count(config.pricing.day_count)
        .with_exercise_style(style)
        .with_multiplier(config.pricing.multiplier)
        .with_engine(engine);

    info!(
        spot = args.spot,
        strike = args.strike,
        days = args.days,
        vol = args.vol,
        %option_type,
        %style,
        engine = %args.engine,
        "pricing"
    );

    let valuation = value(&request).context("pricing failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&valuation)?);
        return Ok(());
    }

    println!(
        "{} {} K={} T={}d ({})",
        style, option_type, args.strike, args.days, config.pricing.day_count
    );
    println!("  NPV (x{}): {:.dp$}", config.pricing.multiplier, valuation.rounded(args.dp), dp = args.dp as usize);
    if let Some(se) = valuation.std_error {
        println!("  std error: {:.4}  (95% CI +/- {:.4})", se, 1.96 * se);
    }

    // Greeks only exist in closed form for the analytic engine
    if matches!(request.engine, Engine::Analytic) && style.is_european() {
        let model = BlackScholes::new(args.spot, rate, dividend_yield, args.vol)?;
        let expiry = request.year_fraction();
        println!("  delta: {:+.4}", model.delta(option_type, args.strike, expiry));
        println!("  gamma: {:+.4}", model.gamma(args.strike, expiry));
        println!("  vega:  {:+.4}", model.vega(args.strike, expiry));
        println!("  theta: {:+.4}", model.theta(option_type, args.strike, expiry));
        println!("  rho:   {:+.4}", model.rho(option_type, args.strike, expiry));
    }

    Ok(())
}
