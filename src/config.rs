//! Environment-driven configuration

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// ETFs the dashboard is allowed to query.
pub const SUPPORTED_SYMBOLS: [&str; 8] = ["SPY", "QQQ", "QYLD", "JEPI", "SCHD", "VOO", "TLT", "AGNC"];

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOOKBACK_DAYS: u64 = 365 * 2;
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
pub const DEFAULT_FETCH_MAX_RETRIES: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

/// Deployment environment, from `ENVIRONMENT` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn is_supported_symbol(symbol: &str) -> bool {
    SUPPORTED_SYMBOLS.contains(&symbol)
}

/// Upper-cased symbol if it is on the allow-list.
pub fn normalize_symbol(symbol: &str) -> Option<String> {
    let symbol = symbol.trim().to_ascii_uppercase();
    is_supported_symbol(&symbol).then_some(symbol)
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub port: u16,
    pub lookback_days: u64,
    pub cache_ttl: Duration,
    pub yahoo_base_url: String,
    pub fetch_max_retries: usize,
    pub symbols: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
            yahoo_base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            fetch_max_retries: DEFAULT_FETCH_MAX_RETRIES,
            symbols: SUPPORTED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Read `PORT`, `LOOKBACK_DAYS`, `CACHE_TTL_SECONDS`, `YAHOO_BASE_URL` and
    /// `FETCH_MAX_RETRIES`, falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            port: parse_var("PORT", defaults.port)?,
            lookback_days: parse_var("LOOKBACK_DAYS", defaults.lookback_days)?,
            cache_ttl: Duration::from_secs(parse_var(
                "CACHE_TTL_SECONDS",
                defaults.cache_ttl.as_secs(),
            )?),
            yahoo_base_url: env::var("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            fetch_max_retries: parse_var("FETCH_MAX_RETRIES", defaults.fetch_max_retries)?,
            symbols: defaults.symbols,
        })
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
