//! Yahoo Finance market data provider implementation

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use reqwest::Client;
use tracing::{debug, info, warn};

use super::response::ChartResponse;
use crate::config::{DEFAULT_FETCH_MAX_RETRIES, DEFAULT_YAHOO_BASE_URL};
use crate::models::price::{DateRange, PriceSeries};
use crate::services::errors::MarketDataError;
use crate::services::market_data::MarketDataProvider;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; etfdash/0.1)";

pub struct YahooProvider {
    client: Client,
    base_url: String,
    max_retries: usize,
    min_retry_delay: Duration,
}

impl YahooProvider {
    pub fn new() -> Self {
        Self::with_client(DEFAULT_YAHOO_BASE_URL, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: DEFAULT_FETCH_MAX_RETRIES,
            min_retry_delay: Duration::from_millis(250),
        }
    }

    pub fn with_retries(mut self, max_retries: usize, min_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.min_retry_delay = min_delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_once(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<PriceSeries, MarketDataError> {
        let url = format!("{}/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("period1", range.start_timestamp().to_string()),
                ("period2", range.end_timestamp().to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(MarketDataError::Upstream {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        if !status.is_success() {
            // Yahoo reports unknown symbols as 404 with a chart.error body
            let reason = serde_json::from_str::<ChartResponse>(&body)
                .ok()
                .and_then(|r| r.chart.error)
                .map(|e| format!("{} - {}", e.code, e.description))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(MarketDataError::unavailable(symbol, reason));
        }

        let parsed: ChartResponse = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?;
        parsed.into_price_series(symbol)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch_daily_closes(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<PriceSeries, MarketDataError> {
        if range.is_empty() {
            return Err(MarketDataError::unavailable(symbol, "empty date range"));
        }

        debug!(symbol, start = %range.start, end = %range.end, "Fetching daily closes");

        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.min_retry_delay)
            .with_max_times(self.max_retries);

        let series = (|| async { self.fetch_once(symbol, range).await })
            .retry(backoff)
            .when(|e: &MarketDataError| e.is_retryable())
            .notify(|e: &MarketDataError, delay: Duration| {
                warn!(symbol, error = %e, delay_ms = delay.as_millis() as u64, "Retrying price fetch");
            })
            .await?;

        info!(symbol, points = series.len(), "Fetched daily closes");
        Ok(series)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}

impl Default for YahooProvider {
    fn default() -> Self {
        Self::new()
    }
}
