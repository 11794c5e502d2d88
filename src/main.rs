use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;
use etfdash::cache::PriceCache;
use etfdash::config::{DashboardConfig, DEFAULT_LOOKBACK_DAYS, SUPPORTED_SYMBOLS};
use etfdash::core::dashboard::{Dashboard, DashboardView};
use etfdash::logging;
use etfdash::services::yahoo::YahooProvider;

/// Print the latest indicators and signal for one ETF.
#[derive(Debug, Parser)]
#[command(name = "etfdash", version)]
struct Cli {
    /// One of SPY, QQQ, QYLD, JEPI, SCHD, VOO, TLT, AGNC
    #[arg(short, long, default_value = "SPY")]
    symbol: String,

    /// Calendar days of history to fetch
    #[arg(long, env = "LOOKBACK_DAYS", default_value_t = DEFAULT_LOOKBACK_DAYS)]
    lookback_days: u64,

    /// Trailing rows to print
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Print the full dashboard view as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging_with_default("warn");

    let cli = Cli::parse();
    let mut config = DashboardConfig::from_env()?;
    config.lookback_days = cli.lookback_days;

    let provider = YahooProvider::with_client(config.yahoo_base_url.clone(), reqwest::Client::new())
        .with_retries(config.fetch_max_retries, Duration::from_millis(250));
    let cache = PriceCache::new(config.cache_ttl);
    let dashboard = Dashboard::new(Arc::new(provider), cache, config);

    let view = match dashboard.load(&cli.symbol).await {
        Ok(view) => view,
        Err(etfdash::DashboardError::UnsupportedSymbol(symbol)) => {
            return Err(format!(
                "unsupported symbol {symbol}; choose one of {}",
                SUPPORTED_SYMBOLS.join(", ")
            )
            .into());
        }
        Err(e) => return Err(e.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view, cli.rows);
    }

    Ok(())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}

fn print_view(view: &DashboardView, rows: usize) {
    println!("{} ({} to {})", view.symbol, view.range.start, view.range.end);

    let closes = &view.price_chart.traces[0];
    let moving_average = &view.price_chart.traces[1];
    let rsi = &view.rsi_chart.traces[0];

    println!();
    println!("  {:<12} {:>10} {:>10} {:>8}", "Date", "Close", moving_average.name, "RSI");
    let skip = closes.x.len().saturating_sub(rows);
    for i in skip..closes.x.len() {
        println!(
            "  {:<12} {:>10} {:>10} {:>8}",
            closes.x[i].date_naive(),
            fmt_opt(closes.y[i]),
            fmt_opt(moving_average.y[i]),
            fmt_opt(rsi.y[i]),
        );
    }

    println!();
    if let Some(latest) = &view.latest {
        println!("  Close: {:.2}", latest.close);
        println!("  {}: {}", moving_average.name, fmt_opt(latest.moving_average));
        println!("  RSI: {}", fmt_opt(latest.rsi));
    }
    println!("  Signal: {}", view.signal_label);
}
