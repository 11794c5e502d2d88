use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::momentum::rsi;
use crate::indicators::trend::moving_average;
use crate::indicators::IndicatorError;
use crate::models::price::PriceSeries;

pub const DEFAULT_MA_WINDOW: usize = 20;
pub const DEFAULT_RSI_PERIOD: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub ma_window: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_window: DEFAULT_MA_WINDOW,
            rsi_period: DEFAULT_RSI_PERIOD,
        }
    }
}

/// Moving average and RSI aligned index-for-index with a [`PriceSeries`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub ma_window: usize,
    pub rsi_period: usize,
    pub moving_average: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
}

impl IndicatorSeries {
    pub fn compute(series: &PriceSeries, config: &IndicatorConfig) -> Result<Self, IndicatorError> {
        let closes = series.closes();
        Ok(Self {
            ma_window: config.ma_window,
            rsi_period: config.rsi_period,
            moving_average: moving_average(&closes, config.ma_window)?,
            rsi: rsi(&closes, config.rsi_period)?,
        })
    }

    pub fn len(&self) -> usize {
        self.moving_average.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moving_average.is_empty()
    }

    pub fn last_moving_average(&self) -> Option<f64> {
        self.moving_average.last().copied().flatten()
    }

    pub fn last_rsi(&self) -> Option<f64> {
        self.rsi.last().copied().flatten()
    }
}

/// The last row of a price series with its indicator values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestReading {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moving_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
}

impl LatestReading {
    pub fn from_series(series: &PriceSeries, indicators: &IndicatorSeries) -> Option<Self> {
        let last = series.last()?;
        Some(Self {
            timestamp: last.timestamp,
            close: last.close,
            moving_average: indicators.last_moving_average(),
            rsi: indicators.last_rsi(),
        })
    }
}
