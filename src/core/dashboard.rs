//! Dashboard view assembly: allow-list, lookback, cache, evaluation, charts

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::cache::PriceCache;
use crate::charts::{self, Figure};
use crate::config::{normalize_symbol, DashboardConfig};
use crate::error::DashboardError;
use crate::models::indicators::{IndicatorConfig, LatestReading};
use crate::models::price::{DateRange, PriceSeries};
use crate::models::signal::{Signal, SignalThresholds};
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::SignalEngine;

/// Everything the page shows for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub symbol: String,
    pub range: DateRange,
    pub signal: Signal,
    pub signal_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<LatestReading>,
    pub price_chart: Figure,
    pub rsi_chart: Figure,
}

pub struct Dashboard {
    provider: Arc<dyn MarketDataProvider>,
    cache: PriceCache,
    config: DashboardConfig,
    indicator_config: IndicatorConfig,
    thresholds: SignalThresholds,
}

impl Dashboard {
    pub fn new(provider: Arc<dyn MarketDataProvider>, cache: PriceCache, config: DashboardConfig) -> Self {
        Self {
            provider,
            cache,
            config,
            indicator_config: IndicatorConfig::default(),
            thresholds: SignalThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SignalThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    /// Range the next load will request.
    pub fn current_range(&self) -> DateRange {
        DateRange::trailing_days(self.config.lookback_days)
    }

    /// Load prices for `symbol` over the configured lookback and evaluate them.
    pub async fn load(&self, symbol: &str) -> Result<DashboardView, DashboardError> {
        self.load_range(symbol, self.current_range()).await
    }

    pub async fn load_range(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<DashboardView, DashboardError> {
        let symbol =
            normalize_symbol(symbol).ok_or_else(|| DashboardError::UnsupportedSymbol(symbol.to_string()))?;

        let series = self
            .cache
            .get_or_fetch(&symbol, range, self.provider.as_ref())
            .await
            .map_err(|e| {
                warn!(symbol = %symbol, error = %e, "Price fetch failed");
                e
            })?;

        let view = self.build_view(&series, range)?;
        info!(
            symbol = %view.symbol,
            signal = ?view.signal,
            points = series.len(),
            "Dashboard loaded"
        );
        Ok(view)
    }

    /// Evaluate an already-fetched series into a view.
    pub fn build_view(&self, series: &PriceSeries, range: DateRange) -> Result<DashboardView, DashboardError> {
        let analysis = SignalEngine::evaluate(series, &self.indicator_config, &self.thresholds)?;

        Ok(DashboardView {
            symbol: series.symbol().to_string(),
            range,
            signal: analysis.signal,
            signal_label: analysis.signal.label().to_string(),
            latest: analysis.latest,
            price_chart: charts::price_chart(series, &analysis.indicators),
            rsi_chart: charts::rsi_chart(series, &analysis.indicators, &self.thresholds),
        })
    }

    /// Forget cached prices for `symbol`.
    pub async fn invalidate(&self, symbol: &str) -> Result<usize, DashboardError> {
        let symbol =
            normalize_symbol(symbol).ok_or_else(|| DashboardError::UnsupportedSymbol(symbol.to_string()))?;
        Ok(self.cache.invalidate(&symbol).await)
    }
}
