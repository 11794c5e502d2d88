//! Threshold classification of the latest row

use crate::models::signal::{Signal, SignalThresholds};

/// Classify the latest close, moving average and RSI.
///
/// Rules, first match wins:
/// 1. any input missing -> `InsufficientData`
/// 2. RSI below `oversold` and close above the moving average -> `BuySignal`
/// 3. RSI above `overbought` -> `OverboughtWarning`
/// 4. otherwise `Neutral`
pub fn classify(
    last_close: Option<f64>,
    last_moving_average: Option<f64>,
    last_rsi: Option<f64>,
    thresholds: &SignalThresholds,
) -> Signal {
    let (Some(close), Some(moving_average), Some(rsi)) = (last_close, last_moving_average, last_rsi)
    else {
        return Signal::InsufficientData;
    };

    if rsi < thresholds.oversold && close > moving_average {
        Signal::BuySignal
    } else if rsi > thresholds.overbought {
        Signal::OverboughtWarning
    } else {
        Signal::Neutral
    }
}

/// [`classify`] with the conventional 30/70 thresholds.
pub fn classify_default(
    last_close: Option<f64>,
    last_moving_average: Option<f64>,
    last_rsi: Option<f64>,
) -> Signal {
    classify(
        last_close,
        last_moving_average,
        last_rsi,
        &SignalThresholds::default(),
    )
}
