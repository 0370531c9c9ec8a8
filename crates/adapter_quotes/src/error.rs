//! Market data errors.

use thiserror::Error;

/// Errors from quote fetching and caching.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// HTTP transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsed but carried no usable data.
    #[error("Data error: {0}")]
    Data(String),

    /// Filesystem failure in the cache layer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file could not be encoded or decoded.
    #[error("Serialisation error: {0}")]
    Serialisation(String),

    /// Neither the network nor the cache could produce the data.
    #[error("No data for {symbol}: {reason}")]
    Unavailable {
        /// Requested symbol
        symbol: String,
        /// Why both sources failed
        reason: String,
    },
}

impl QuoteError {
    /// Convenience constructor for data errors.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = QuoteError::Network("connection refused".to_string());
        assert_eq!(format!("{}", err), "Network error: connection refused");

        let err = QuoteError::Unavailable {
            symbol: "SPY".to_string(),
            reason: "cold cache".to_string(),
        };
        assert!(format!("{}", err).contains("SPY"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: QuoteError = io.into();
        assert!(matches!(err, QuoteError::Io(_)));
    }
}
