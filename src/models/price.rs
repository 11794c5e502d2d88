//! Daily close series and the date range it was fetched for

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Time-ordered closing prices for one symbol.
///
/// Timestamps are strictly increasing and every close is finite. The only way to
/// build one is [`PriceSeries::new`], which enforces both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, IndicatorError> {
        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() {
                return Err(IndicatorError::NonFinitePrice {
                    index,
                    value: point.close,
                });
            }
            if index > 0 && point.timestamp <= points[index - 1].timestamp {
                return Err(IndicatorError::NonMonotonicTimestamp { index });
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// One close per calendar day starting at `start`.
    pub fn from_daily_closes(
        symbol: impl Into<String>,
        start: DateTime<Utc>,
        closes: &[f64],
    ) -> Result<Self, IndicatorError> {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(start + chrono::Duration::days(i as i64), close))
            .collect();
        Self::new(symbol, points)
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            points: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Calendar range of a daily fetch: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `days` calendar days ending at `end`.
    pub fn lookback(end: NaiveDate, days: u64) -> Self {
        let start = end.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Lookback ending today (UTC).
    pub fn trailing_days(days: u64) -> Self {
        Self::lookback(Utc::now().date_naive(), days)
    }

    pub fn start_timestamp(&self) -> i64 {
        midnight_utc(self.start).timestamp()
    }

    pub fn end_timestamp(&self) -> i64 {
        midnight_utc(self.end).timestamp()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}
