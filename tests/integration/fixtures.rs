//! Mocked Yahoo Finance responses
#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FIRST_BAR: i64 = 1_704_205_800;
pub const DAY: i64 = 86_400;

pub fn chart_body(closes: &[Option<f64>]) -> Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64).map(|i| FIRST_BAR + i * DAY).collect();
    json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD", "instrumentType": "ETF" },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{ "close": closes }]
                }
            }],
            "error": null
        }
    })
}

pub fn not_found_body() -> Value {
    json!({
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    })
}

pub fn closes(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

pub async fn mock_chart(server: &MockServer, symbol: &str, closes: &[Option<f64>]) {
    Mock::given(method("GET"))
        .and(path(format!("/{symbol}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(closes)))
        .mount(server)
        .await;
}

pub async fn mock_not_found(server: &MockServer, symbol: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{symbol}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(server)
        .await;
}
