//! Signal evaluation over a full price series.

use tracing::debug;

use crate::indicators::IndicatorError;
use crate::models::indicators::{IndicatorConfig, IndicatorSeries, LatestReading};
use crate::models::price::PriceSeries;
use crate::models::signal::{Analysis, SignalThresholds};
use crate::signals::classifier::classify;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute the indicator series and classify the latest row.
    pub fn evaluate(
        series: &PriceSeries,
        config: &IndicatorConfig,
        thresholds: &SignalThresholds,
    ) -> Result<Analysis, IndicatorError> {
        let indicators = IndicatorSeries::compute(series, config)?;
        let latest = LatestReading::from_series(series, &indicators);

        let signal = classify(
            latest.map(|l| l.close),
            latest.and_then(|l| l.moving_average),
            latest.and_then(|l| l.rsi),
            thresholds,
        );

        debug!(
            symbol = series.symbol(),
            points = series.len(),
            signal = ?signal,
            "Evaluated signal"
        );

        Ok(Analysis {
            indicators,
            latest,
            signal,
        })
    }

    /// Evaluate with the default 20/14 windows and 30/70 thresholds.
    pub fn evaluate_default(series: &PriceSeries) -> Result<Analysis, IndicatorError> {
        Self::evaluate(
            series,
            &IndicatorConfig::default(),
            &SignalThresholds::default(),
        )
    }
}
