//! Market data provider interface.

use async_trait::async_trait;

use crate::models::price::{DateRange, PriceSeries};
use crate::services::errors::MarketDataError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily closing prices for `symbol` within `range`, oldest first.
    ///
    /// An empty result is reported as [`MarketDataError::DataUnavailable`],
    /// never as an empty series.
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<PriceSeries, MarketDataError>;

    fn name(&self) -> &'static str;
}
