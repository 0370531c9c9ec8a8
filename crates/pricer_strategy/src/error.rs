//! Strategy analysis errors.

use thiserror::Error;

/// Errors from payoff and leverage analysis.
///
/// # Variants
/// - `ZeroEntryPrice`: percent return is undefined for a zero entry
/// - `EmptyProfile`: a profile needs at least one leg
/// - `InvalidGrid`: spot grid bounds or size rejected
/// - `InsufficientCapital`: the capital buys no whole contract
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StrategyError {
    /// Percent return of a zero entry price.
    #[error("Percent return undefined for zero entry price")]
    ZeroEntryPrice,

    /// Profile constructed without legs.
    #[error("Payoff profile requires at least one leg")]
    EmptyProfile,

    /// Spot grid bounds or point count rejected.
    #[error("Invalid spot grid: {message}")]
    InvalidGrid {
        /// Description of the rejected grid
        message: String,
    },

    /// Scalar input rejected.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the rejected input
        message: String,
    },

    /// Capital too small for a single contract.
    #[error("Capital {capital} buys no whole contract at {cost_per_contract} per contract")]
    InsufficientCapital {
        /// Available capital
        capital: f64,
        /// Cost of one contract
        cost_per_contract: f64,
    },
}
