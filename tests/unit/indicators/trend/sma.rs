//! Unit tests for the moving average

use etfdash::indicators::trend::{moving_average, moving_average_default};
use etfdash::indicators::IndicatorError;

use crate::common::{assert_near, flat, rising};

#[test]
fn test_sma_output_matches_input_length() {
    for len in [0, 1, 19, 20, 21, 100] {
        let closes = rising(len);
        assert_eq!(moving_average_default(&closes).unwrap().len(), len);
    }
}

#[test]
fn test_sma_undefined_until_window_full() {
    let out = moving_average_default(&rising(30)).unwrap();
    assert!(out[..19].iter().all(Option::is_none));
    assert!(out[19..].iter().all(Option::is_some));
}

#[test]
fn test_sma_first_value_is_mean_of_first_window() {
    let out = moving_average_default(&rising(30)).unwrap();
    assert_near(out[19].unwrap(), 10.5, "MA20 at index 19");
}

#[test]
fn test_sma_each_value_is_window_mean() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + ((i * 7) % 11) as f64).collect();
    let out = moving_average(&closes, 20).unwrap();
    for i in 19..closes.len() {
        let expected = closes[i - 19..=i].iter().sum::<f64>() / 20.0;
        assert_near(out[i].unwrap(), expected, &format!("MA20 at index {i}"));
    }
}

#[test]
fn test_sma_flat_series() {
    let out = moving_average_default(&flat(30, 100.0)).unwrap();
    assert_eq!(out[19], Some(100.0));
    assert_eq!(out[29], Some(100.0));
}

#[test]
fn test_sma_short_series_all_undefined() {
    let out = moving_average_default(&rising(10)).unwrap();
    assert!(out.iter().all(Option::is_none));
}

#[test]
fn test_sma_no_look_ahead() {
    let closes = rising(40);
    let full = moving_average(&closes, 20).unwrap();
    let prefix = moving_average(&closes[..25], 20).unwrap();
    assert_eq!(&full[..25], &prefix[..]);
}

#[test]
fn test_sma_is_idempotent() {
    let closes: Vec<f64> = (0..50).map(|i| (i as f64).sin() * 10.0 + 50.0).collect();
    assert_eq!(
        moving_average(&closes, 20).unwrap(),
        moving_average(&closes, 20).unwrap()
    );
}

#[test]
fn test_sma_rejects_zero_window() {
    assert_eq!(
        moving_average(&rising(5), 0),
        Err(IndicatorError::InvalidWindow(0))
    );
}

#[test]
fn test_sma_rejects_nan() {
    let closes = vec![1.0, 2.0, f64::NAN, 4.0];
    assert!(matches!(
        moving_average(&closes, 2),
        Err(IndicatorError::NonFinitePrice { index: 2, .. })
    ));
}
