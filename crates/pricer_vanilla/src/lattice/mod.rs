//! Lattice (tree) pricing.
//!
//! This module provides:
//! - `BinomialTree`: Cox-Ross-Rubinstein tree for European and American
//!   vanillas
//! - `LatticeError`: lattice construction and stability errors

mod binomial;
mod error;

pub use binomial::BinomialTree;
pub use error::LatticeError;
