//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::indicators::error::{validate_prices, validate_window, IndicatorError};

/// Moving average of `closes` over `window` points, aligned to the input.
///
/// Entry `i` is the mean of `closes[i + 1 - window..=i]`, or `None` while fewer
/// than `window` closes are available.
pub fn moving_average(closes: &[f64], window: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    validate_window(window)?;
    validate_prices(closes)?;
    Ok(math::rolling_mean(closes, window))
}

/// Moving average with the dashboard's default window (20)
pub fn moving_average_default(closes: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
    moving_average(closes, crate::models::indicators::DEFAULT_MA_WINDOW)
}
