//! Chart payloads for the dashboard page
//!
//! Figures are plain data: a plotting front end draws each [`Trace`] as a line
//! and each [`ReferenceLine`] as a horizontal guide. Missing indicator values
//! serialize as `null` and render as gaps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::indicators::IndicatorSeries;
use crate::models::price::PriceSeries;
use crate::models::signal::SignalThresholds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<DateTime<Utc>>,
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineDash {
    Solid,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub color: String,
    pub dash: LineDash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub traces: Vec<Trace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_lines: Vec<ReferenceLine>,
}

/// Closing price with its moving average.
pub fn price_chart(series: &PriceSeries, indicators: &IndicatorSeries) -> Figure {
    let x = series.timestamps();
    Figure {
        title: format!("{} price", series.symbol()),
        x_axis_title: "Date".to_string(),
        y_axis_title: "Price".to_string(),
        traces: vec![
            Trace {
                name: "Close".to_string(),
                x: x.clone(),
                y: series.closes().into_iter().map(Some).collect(),
            },
            Trace {
                name: format!("MA{}", indicators.ma_window),
                x,
                y: indicators.moving_average.clone(),
            },
        ],
        reference_lines: Vec::new(),
    }
}

/// RSI with oversold and overbought guide lines.
pub fn rsi_chart(
    series: &PriceSeries,
    indicators: &IndicatorSeries,
    thresholds: &SignalThresholds,
) -> Figure {
    Figure {
        title: format!("{} RSI", series.symbol()),
        x_axis_title: "Date".to_string(),
        y_axis_title: "RSI".to_string(),
        traces: vec![Trace {
            name: "RSI".to_string(),
            x: series.timestamps(),
            y: indicators.rsi.clone(),
        }],
        reference_lines: vec![
            ReferenceLine {
                y: thresholds.oversold,
                color: "green".to_string(),
                dash: LineDash::Dot,
            },
            ReferenceLine {
                y: thresholds.overbought,
                color: "red".to_string(),
                dash: LineDash::Dot,
            },
        ],
    }
}
