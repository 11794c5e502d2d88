//! Unit tests for the price cache

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use etfdash::cache::PriceCache;
use etfdash::metrics::Metrics;
use etfdash::models::price::DateRange;

use crate::common::{rising, StaticProvider};

fn range() -> DateRange {
    DateRange::lookback(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(), 30)
}

#[tokio::test]
async fn test_second_fetch_is_served_from_cache() {
    let cache = PriceCache::new(Duration::from_secs(60));
    let provider = StaticProvider::new(rising(30));

    let first = cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    let second = cache.get_or_fetch("SPY", range(), &provider).await.unwrap();

    assert_eq!(provider.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_different_range_misses() {
    let cache = PriceCache::new(Duration::from_secs(60));
    let provider = StaticProvider::new(rising(30));
    let other = DateRange::lookback(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), 30);

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    cache.get_or_fetch("SPY", other, &provider).await.unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(cache.len().await, 2);
}

#[tokio::test]
async fn test_expired_entry_refetches() {
    let cache = PriceCache::new(Duration::ZERO);
    let provider = StaticProvider::new(rising(30));

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();

    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let cache = PriceCache::new(Duration::from_secs(60));
    let provider = StaticProvider::new(rising(30));

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    cache.get_or_fetch("QQQ", range(), &provider).await.unwrap();
    assert_eq!(cache.invalidate("SPY").await, 1);
    assert!(cache.get("SPY", range()).await.is_none());
    assert!(cache.get("QQQ", range()).await.is_some());

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    assert_eq!(provider.calls(), 3);
}

#[tokio::test]
async fn test_errors_are_not_cached() {
    let cache = PriceCache::new(Duration::from_secs(60));
    let provider = StaticProvider::failing();

    assert!(cache.get_or_fetch("SPY", range(), &provider).await.is_err());
    assert!(cache.is_empty().await);

    provider.set_closes(Some(rising(5)));
    let series = cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    assert_eq!(series.len(), 5);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_clear_empties_cache() {
    let cache = PriceCache::new(Duration::from_secs(60));
    let provider = StaticProvider::new(rising(3));

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    cache.clear().await;
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_cache_records_metrics() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let cache = PriceCache::new(Duration::from_secs(60)).with_metrics(metrics.clone());
    let provider = StaticProvider::new(rising(3));

    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    cache.get_or_fetch("SPY", range(), &provider).await.unwrap();
    let _ = cache.get_or_fetch("QQQ", range(), &StaticProvider::failing()).await;

    assert_eq!(metrics.price_cache_hits_total.get(), 1);
    assert_eq!(metrics.price_cache_misses_total.get(), 2);
    assert_eq!(metrics.market_data_failures_total.get(), 1);
}
