pub mod error;

pub mod momentum;
pub mod trend;

pub use error::IndicatorError;
pub use momentum::{rsi, rsi_components, RsiComponents};
pub use trend::moving_average;
