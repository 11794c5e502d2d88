use serde::{Deserialize, Serialize};

use crate::models::indicators::{IndicatorSeries, LatestReading};

/// Outcome of classifying the latest price, moving average and RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// RSI oversold while price holds above the moving average.
    BuySignal,
    /// RSI overbought.
    OverboughtWarning,
    Neutral,
    /// Not enough history to fill the indicator windows.
    InsufficientData,
}

impl Signal {
    pub fn label(&self) -> &'static str {
        match self {
            Signal::BuySignal => "Buy candidate (RSI oversold & above MA20)",
            Signal::OverboughtWarning => "Overheated (RSI overbought)",
            Signal::Neutral => "Wait and see",
            Signal::InsufficientData => "Wait and see (not enough history)",
        }
    }

    /// True for the categories the dashboard shows as "wait and see".
    pub fn is_neutral(&self) -> bool {
        matches!(self, Signal::Neutral | Signal::InsufficientData)
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

/// Full evaluation of one price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub indicators: IndicatorSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<LatestReading>,
    pub signal: Signal,
}
