//! Prometheus metrics for the dashboard server

use prometheus::{Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub price_cache_hits_total: IntCounter,
    pub price_cache_misses_total: IntCounter,
    pub market_data_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let price_cache_hits_total =
            IntCounter::new("price_cache_hits_total", "Price series served from cache")?;
        let price_cache_misses_total =
            IntCounter::new("price_cache_misses_total", "Price series fetched from the provider")?;
        let market_data_failures_total = IntCounter::new(
            "market_data_failures_total",
            "Price fetches that ended in an error",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(price_cache_hits_total.clone()))?;
        registry.register(Box::new(price_cache_misses_total.clone()))?;
        registry.register(Box::new(market_data_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            price_cache_hits_total,
            price_cache_misses_total,
            market_data_failures_total,
        })
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}
