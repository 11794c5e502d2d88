//! Trend indicators: simple moving average

pub mod sma;

pub use sma::*;
