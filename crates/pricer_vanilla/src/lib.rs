//! # pricer_vanilla: Instruments and pricing engines
//!
//! The kernel layer of the optlab workspace. Provides:
//! - Vanilla option contracts (`instruments`)
//! - Black-Scholes analytical pricing, Greeks, implied volatility, and
//!   put-call parity checks (`analytical`)
//! - Cox-Ross-Rubinstein binomial trees with early exercise (`lattice`)
//! - Monte Carlo pricing under geometric Brownian motion (`mc`)
//! - A valuation entry point dispatching over the engines (`engine`)
//!
//! ## Engine routing
//!
//! | Engine       | European | American |
//! |--------------|----------|----------|
//! | `Analytic`   | yes      | rejected |
//! | `Binomial`   | yes      | yes      |
//! | `MonteCarlo` | yes      | rejected |
//!
//! ## Usage example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_vanilla::engine::{Engine, ValuationRequest};
//!
//! let request = ValuationRequest::new(100.0, 100.0, 365, 0.2, OptionType::Call)
//!     .with_rate(0.05)
//!     .with_engine(Engine::Analytic);
//!
//! let valuation = pricer_vanilla::engine::value(&request).unwrap();
//! assert!((valuation.rounded(2) - 10.45).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod engine;
pub mod instruments;
pub mod lattice;
pub mod mc;

pub use engine::{value, Engine, Valuation, ValuationRequest};
