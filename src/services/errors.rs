use thiserror::Error;

use crate::indicators::IndicatorError;

/// Errors that can occur while fetching prices from a provider.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Unknown symbol, empty range, or the provider reported an error.
    #[error("data unavailable for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Network failure, timeout, or an undecodable body.
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a server error.
    #[error("provider returned HTTP {status} for {symbol}")]
    Upstream { symbol: String, status: u16 },

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    /// The provider's rows do not form a valid price series.
    #[error("invalid price series: {0}")]
    InvalidSeries(#[from] IndicatorError),
}

impl MarketDataError {
    pub fn unavailable(symbol: &str, reason: impl Into<String>) -> Self {
        MarketDataError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            MarketDataError::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            MarketDataError::Upstream { .. } => true,
            _ => false,
        }
    }
}
