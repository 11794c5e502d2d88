use thiserror::Error;

/// Malformed input to the indicator engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("window length must be at least 1, got {0}")]
    InvalidWindow(usize),

    #[error("price at index {index} is not a finite number: {value}")]
    NonFinitePrice { index: usize, value: f64 },

    #[error("timestamp at index {index} does not strictly follow the previous one")]
    NonMonotonicTimestamp { index: usize },
}

pub(crate) fn validate_window(window: usize) -> Result<(), IndicatorError> {
    if window == 0 {
        return Err(IndicatorError::InvalidWindow(window));
    }
    Ok(())
}

pub(crate) fn validate_prices(closes: &[f64]) -> Result<(), IndicatorError> {
    match closes.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(IndicatorError::NonFinitePrice {
            index,
            value: closes[index],
        }),
        None => Ok(()),
    }
}
