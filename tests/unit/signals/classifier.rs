//! Unit tests for the signal classifier

use etfdash::models::signal::{Signal, SignalThresholds};
use etfdash::signals::classifier::{classify, classify_default};

#[test]
fn test_missing_inputs_are_insufficient_data() {
    assert_eq!(classify_default(Some(100.0), None, Some(20.0)), Signal::InsufficientData);
    assert_eq!(classify_default(Some(100.0), Some(90.0), None), Signal::InsufficientData);
    assert_eq!(classify_default(None, Some(90.0), Some(20.0)), Signal::InsufficientData);
}

#[test]
fn test_oversold_above_average_is_buy() {
    assert_eq!(classify_default(Some(105.0), Some(100.0), Some(25.0)), Signal::BuySignal);
}

#[test]
fn test_oversold_below_average_is_neutral() {
    assert_eq!(classify_default(Some(95.0), Some(100.0), Some(25.0)), Signal::Neutral);
}

#[test]
fn test_oversold_at_average_is_neutral() {
    assert_eq!(classify_default(Some(100.0), Some(100.0), Some(25.0)), Signal::Neutral);
}

#[test]
fn test_overbought_is_warning_regardless_of_average() {
    assert_eq!(classify_default(Some(95.0), Some(100.0), Some(75.0)), Signal::OverboughtWarning);
    assert_eq!(classify_default(Some(105.0), Some(100.0), Some(100.0)), Signal::OverboughtWarning);
}

#[test]
fn test_thresholds_are_exclusive() {
    assert_eq!(classify_default(Some(105.0), Some(100.0), Some(30.0)), Signal::Neutral);
    assert_eq!(classify_default(Some(105.0), Some(100.0), Some(70.0)), Signal::Neutral);
}

#[test]
fn test_custom_thresholds() {
    let thresholds = SignalThresholds {
        oversold: 40.0,
        overbought: 60.0,
    };
    assert_eq!(classify(Some(105.0), Some(100.0), Some(35.0), &thresholds), Signal::BuySignal);
    assert_eq!(classify(Some(105.0), Some(100.0), Some(65.0), &thresholds), Signal::OverboughtWarning);
}

#[test]
fn test_labels_and_neutral_grouping() {
    assert!(Signal::Neutral.is_neutral());
    assert!(Signal::InsufficientData.is_neutral());
    assert!(!Signal::BuySignal.is_neutral());
    assert!(!Signal::OverboughtWarning.is_neutral());
    assert_eq!(Signal::BuySignal.to_string(), Signal::BuySignal.label());
}

#[test]
fn test_signal_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(Signal::OverboughtWarning).unwrap(),
        serde_json::json!("overbought_warning")
    );
}
