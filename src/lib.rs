//! ETF dashboard: daily closes, a 20-period moving average, a 14-period RSI,
//! and a threshold signal on the latest row.

pub mod cache;
pub mod charts;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::DashboardError;
