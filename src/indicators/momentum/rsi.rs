//! RSI (Relative Strength Index) indicator

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::indicators::error::{validate_prices, validate_window, IndicatorError};

/// RSI at one index together with the averages it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiComponents {
    pub avg_gain: f64,
    pub avg_loss: f64,
    pub value: f64,
}

/// RSI from average gain and average loss
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
/// With no losses the ratio is undefined: all-gain windows read 100 and
/// windows with no movement at all read 50.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return if avg_gain > 0.0 { 100.0 } else { 50.0 };
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Per-index RSI components over `period` deltas.
///
/// Index 0 has no delta, so the first defined entry is at `period`.
pub fn rsi_components(
    closes: &[f64],
    period: usize,
) -> Result<Vec<Option<RsiComponents>>, IndicatorError> {
    validate_window(period)?;
    validate_prices(closes)?;

    let mut out = vec![None; closes.len()];
    let (gains, losses) = math::gains_and_losses(closes);
    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    // delta j sits between closes j and j + 1
    for (j, (gain, loss)) in avg_gains.into_iter().zip(avg_losses).enumerate() {
        if let (Some(avg_gain), Some(avg_loss)) = (gain, loss) {
            out[j + 1] = Some(RsiComponents {
                avg_gain,
                avg_loss,
                value: rsi_from_averages(avg_gain, avg_loss),
            });
        }
    }

    Ok(out)
}

/// Calculate RSI series, aligned to the input.
pub fn rsi(closes: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    Ok(rsi_components(closes, period)?
        .into_iter()
        .map(|c| c.map(|c| c.value))
        .collect())
}

/// Calculate RSI with default period (14)
pub fn rsi_default(closes: &[f64]) -> Result<Vec<Option<f64>>, IndicatorError> {
    rsi(closes, crate::models::indicators::DEFAULT_RSI_PERIOD)
}
