use thiserror::Error;

use crate::config::ConfigError;
use crate::indicators::IndicatorError;
use crate::services::errors::MarketDataError;

/// Errors surfaced by the dashboard to its front ends.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The symbol is not on the allow-list.
    #[error("unsupported symbol: {0}")]
    UnsupportedSymbol(String),

    #[error(transparent)]
    DataUnavailable(MarketDataError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] IndicatorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<MarketDataError> for DashboardError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InvalidSeries(e) => DashboardError::InvalidInput(e),
            other => DashboardError::DataUnavailable(other),
        }
    }
}
