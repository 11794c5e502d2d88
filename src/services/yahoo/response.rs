//! Yahoo Finance chart API response structures

use chrono::DateTime;
use serde::Deserialize;

use crate::models::price::{PricePoint, PriceSeries};
use crate::services::errors::MarketDataError;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub struct ChartBody {
    pub result: Option<Vec<ChartData>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartData {
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

impl ChartResponse {
    /// Convert to a price series, dropping rows whose close is null.
    pub fn into_price_series(self, symbol: &str) -> Result<PriceSeries, MarketDataError> {
        if let Some(error) = self.chart.error {
            return Err(MarketDataError::unavailable(
                symbol,
                format!("{} - {}", error.code, error.description),
            ));
        }

        let Some(data) = self.chart.result.and_then(|r| r.into_iter().next()) else {
            return Err(MarketDataError::unavailable(symbol, "no chart result"));
        };

        let timestamps = data.timestamp.unwrap_or_default();
        let closes = data
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        if timestamps.len() != closes.len() {
            return Err(MarketDataError::InvalidResponse(format!(
                "{} timestamps but {} closes",
                timestamps.len(),
                closes.len()
            )));
        }

        let mut points = Vec::with_capacity(timestamps.len());
        for (ts, close) in timestamps.into_iter().zip(closes) {
            let Some(close) = close else { continue };
            let timestamp = DateTime::from_timestamp(ts, 0).ok_or_else(|| {
                MarketDataError::InvalidResponse(format!("timestamp out of range: {ts}"))
            })?;
            points.push(PricePoint::new(timestamp, close));
        }

        if points.is_empty() {
            return Err(MarketDataError::unavailable(symbol, "no prices in range"));
        }

        Ok(PriceSeries::new(symbol, points)?)
    }
}
