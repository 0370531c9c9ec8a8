//! optlab CLI - vanilla option pricing and strategy analysis.
//!
//! # Commands
//!
//! - `optlab price` - value one contract with the chosen engine
//! - `optlab parity` - put-call parity check for a strike
//! - `optlab payoff` - text payoff/P&L diagram for one or more legs
//! - `optlab leverage` - option-versus-stock return comparison
//! - `optlab quote` / `chain` / `history` - market data through the cache
//!
//! As the service layer of the workspace, this binary orchestrates the
//! pricer and adapter layers behind one command-line interface.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use config::CliConfig;

/// optlab: vanilla option pricing and strategy analysis
#[derive(Parser)]
#[command(name = "optlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optlab.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value one vanilla option contract
    Price(commands::price::PriceArgs),

    /// Check put-call parity for a strike
    Parity(commands::parity::ParityArgs),

    /// Render a payoff/P&L diagram for one or more legs
    Payoff(commands::payoff::PayoffArgs),

    /// Compare leveraged option exposure against stock
    Leverage(commands::leverage::LeverageArgs),

    /// Fetch the current (delayed) quote for a symbol
    Quote {
        /// Ticker symbol
        symbol: String,
    },

    /// Fetch an option chain for a symbol and expiry
    Chain {
        /// Ticker symbol
        symbol: String,

        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expiry: String,
    },

    /// Fetch daily price history for a symbol
    History {
        /// Ticker symbol
        symbol: String,

        /// Number of calendar days to fetch
        #[arg(short, long, default_value = "30")]
        days: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = CliConfig::load(&cli.config)?;

    match cli.command {
        Commands::Price(args) => commands::price::run(&config, &args),
        Commands::Parity(args) => commands::parity::run(&config, &args),
        Commands::Payoff(args) => commands::payoff::run(&args),
        Commands::Leverage(args) => commands::leverage::run(&config, &args),
        Commands::Quote { symbol } => commands::quote::run(&config, &symbol),
        Commands::Chain { symbol, expiry } => commands::chain::run(&config, &symbol, &expiry),
        Commands::History { symbol, days } => commands::history::run(&config, &symbol, days),
    }
}
