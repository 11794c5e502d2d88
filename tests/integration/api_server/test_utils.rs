//! Test utilities for API server integration tests

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum_test::TestServer;
use etfdash::cache::PriceCache;
use etfdash::config::DashboardConfig;
use etfdash::core::dashboard::Dashboard;
use etfdash::core::http::{create_router, AppState, HealthStatus};
use etfdash::metrics::Metrics;
use etfdash::services::yahoo::YahooProvider;
use tokio::sync::RwLock;
use wiremock::MockServer;

/// Test helper bundling the HTTP server with its mocked Yahoo endpoint
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
    pub yahoo: MockServer,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let yahoo = MockServer::start().await;
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));

        let provider = YahooProvider::with_client(yahoo.uri(), reqwest::Client::new())
            .with_retries(0, Duration::from_millis(1));
        let config = DashboardConfig {
            yahoo_base_url: yahoo.uri(),
            ..DashboardConfig::default()
        };
        let cache = PriceCache::new(config.cache_ttl).with_metrics(metrics.clone());
        let dashboard = Dashboard::new(Arc::new(provider), cache, config);

        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            dashboard: Arc::new(dashboard),
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            metrics,
            yahoo,
        }
    }

    /// Number of requests the mocked Yahoo endpoint has seen
    pub async fn yahoo_requests(&self) -> usize {
        self.yahoo
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
