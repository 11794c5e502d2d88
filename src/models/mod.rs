//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod price;
pub mod signal;

pub use indicators::{IndicatorConfig, IndicatorSeries, LatestReading};
pub use price::{DateRange, PricePoint, PriceSeries};
pub use signal::{Analysis, Signal, SignalThresholds};
