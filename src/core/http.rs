//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, Json, Response},
    routing::{delete, get},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::cache::PriceCache;
use crate::config::DashboardConfig;
use crate::core::dashboard::{Dashboard, DashboardView};
use crate::error::DashboardError;
use crate::metrics::Metrics;
use crate::services::yahoo::YahooProvider;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dashboard: Arc<Dashboard>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn error_response(err: &DashboardError) -> ApiError {
    let status = match err {
        DashboardError::UnsupportedSymbol(_) => StatusCode::NOT_FOUND,
        DashboardError::DataUnavailable(_) => StatusCode::BAD_GATEWAY,
        DashboardError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() })))
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "etfdash"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

/// Allow-listed symbols and the lookback used for every load
async fn list_symbols(State(state): State<AppState>) -> Json<Value> {
    let config = state.dashboard.config();
    Json(json!({
        "symbols": config.symbols,
        "lookback_days": config.lookback_days,
    }))
}

/// Prices, indicators, charts and signal for one symbol
async fn get_dashboard(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<DashboardView>, ApiError> {
    state
        .dashboard
        .load(&symbol)
        .await
        .map(Json)
        .map_err(|e| error_response(&e))
}

/// Drop cached prices so the next load refetches
async fn invalidate_cache(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .dashboard
        .invalidate(&symbol)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| error_response(&e))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/symbols", get(list_symbols))
        .route("/api/dashboard/{symbol}", get(get_dashboard))
        .route("/api/cache/{symbol}", delete(invalidate_cache))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Wire the Yahoo provider, cache and metrics into an [`AppState`].
pub fn build_state(config: DashboardConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let provider = YahooProvider::with_client(config.yahoo_base_url.clone(), reqwest::Client::new())
        .with_retries(config.fetch_max_retries, Duration::from_millis(250));
    let cache = PriceCache::new(config.cache_ttl).with_metrics(metrics.clone());
    let dashboard = Dashboard::new(Arc::new(provider), cache, config);

    Ok(AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        dashboard: Arc::new(dashboard),
    })
}

pub async fn start_server(config: DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.port;
    let state = build_state(config)?;
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!("Dashboard available at http://0.0.0.0:{}/", port);
    axum::serve(listener, app).await?;

    Ok(())
}
