//! ETF Dashboard API Server
//!
//! Serves the dashboard page and its JSON API. Price fetches are cached in
//! process, so one instance per deployment is enough.

use dotenvy::dotenv;
use etfdash::config::{get_environment, DashboardConfig};
use etfdash::core::http::start_server;
use etfdash::logging;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = DashboardConfig::from_env()?;

    info!("Starting ETF Dashboard API Server");
    info!(environment = %get_environment(), "Environment");
    info!(
        port = config.port,
        lookback_days = config.lookback_days,
        cache_ttl_seconds = config.cache_ttl.as_secs(),
        "HTTP Server: http://0.0.0.0:{}",
        config.port
    );

    tokio::select! {
        result = start_server(config) => {
            if let Err(e) = result {
                error!(error = %e, "HTTP server error");
                return Err(e);
            }
            error!("HTTP server stopped");
        }
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
    }

    info!("API server stopped");
    Ok(())
}
