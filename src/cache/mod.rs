//! In-memory price cache keyed by symbol and date range

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::metrics::Metrics;
use crate::models::price::{DateRange, PriceSeries};
use crate::services::errors::MarketDataError;
use crate::services::market_data::MarketDataProvider;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    symbol: String,
    range: DateRange,
}

struct CacheEntry {
    series: Arc<PriceSeries>,
    stored_at: Instant,
}

/// Fetched price series, reused until `ttl` elapses or the symbol is invalidated.
///
/// Errors are never cached.
pub struct PriceCache {
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
    metrics: Option<Arc<Metrics>>,
}

impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn key(symbol: &str, range: DateRange) -> CacheKey {
        CacheKey {
            symbol: symbol.to_string(),
            range,
        }
    }

    /// Fresh entry for `symbol` and `range`, if any.
    pub async fn get(&self, symbol: &str, range: DateRange) -> Option<Arc<PriceSeries>> {
        let entries = self.entries.read().await;
        entries
            .get(&Self::key(symbol, range))
            .filter(|entry| entry.stored_at.elapsed() < self.ttl)
            .map(|entry| entry.series.clone())
    }

    pub async fn insert(&self, range: DateRange, series: PriceSeries) -> Arc<PriceSeries> {
        let series = Arc::new(series);
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        entries.insert(
            Self::key(series.symbol(), range),
            CacheEntry {
                series: series.clone(),
                stored_at: Instant::now(),
            },
        );
        series
    }

    /// Drop every cached range for `symbol`. Returns how many entries were removed.
    pub async fn invalidate(&self, symbol: &str) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| key.symbol != symbol);
        let removed = before - entries.len();
        debug!(symbol, removed, "Invalidated cached prices");
        removed
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Cached series, or fetch from `provider` and store it.
    pub async fn get_or_fetch(
        &self,
        symbol: &str,
        range: DateRange,
        provider: &dyn MarketDataProvider,
    ) -> Result<Arc<PriceSeries>, MarketDataError> {
        if let Some(series) = self.get(symbol, range).await {
            debug!(symbol, "Price cache hit");
            if let Some(metrics) = &self.metrics {
                metrics.price_cache_hits_total.inc();
            }
            return Ok(series);
        }

        debug!(symbol, provider = provider.name(), "Price cache miss");
        if let Some(metrics) = &self.metrics {
            metrics.price_cache_misses_total.inc();
        }

        match provider.fetch_daily_closes(symbol, range).await {
            Ok(series) => Ok(self.insert(range, series).await),
            Err(e) => {
                if let Some(metrics) = &self.metrics {
                    metrics.market_data_failures_total.inc();
                }
                Err(e)
            }
        }
    }
}
