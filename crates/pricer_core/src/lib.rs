//! # pricer_core: Foundation layer for the optlab pricing workspace
//!
//! ## Layer role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Root-finding solvers (`math::solvers`)
//! - Option and exercise types (`types::option_type`)
//! - Day count conventions (`types::time`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero dependency principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: traits for generic numerical computation
//! - chrono: date arithmetic for year fractions
//! - thiserror: structured error derives
//! - serde: serialisation support (optional)
//!
//! ## Usage examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{DayCount, OptionType};
//!
//! // Convert a days-to-maturity input into a year fraction
//! let t = DayCount::Act365Fixed.year_fraction(182);
//! assert!((t - 0.4986).abs() < 1e-3);
//!
//! // Option type parsing
//! let opt: OptionType = "call".parse().unwrap();
//! assert!(opt.is_call());
//!
//! // Computation with f64
//! let p = norm_cdf(0.0_f64);
//! # assert!((p - 0.5).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
