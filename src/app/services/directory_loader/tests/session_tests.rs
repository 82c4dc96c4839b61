//! Tests for concurrent directory load and geolocation

use super::super::session::load_directory;
use super::super::source::DirectorySource;
use super::{SAMPLE_CSV, create_temp_csv, serve_never, serve_once};
use crate::app::models::ObserverLocation;
use crate::app::services::geolocation::{GeolocationProvider, StaticLocation};
use crate::config::Config;
use crate::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

struct FailingProvider;

#[async_trait]
impl GeolocationProvider for FailingProvider {
    async fn locate(&self) -> Result<ObserverLocation> {
        Err(Error::geolocation_unavailable("network unreachable"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Answers slowly so the directory load settles first
struct SlowProvider;

#[async_trait]
impl GeolocationProvider for SlowProvider {
    async fn locate(&self) -> Result<ObserverLocation> {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(ObserverLocation::new("US", "Texas", "Austin"))
    }

    fn name(&self) -> &str {
        "slow"
    }
}

fn source_for(location: &str) -> DirectorySource {
    DirectorySource::new(&Config::new(location)).unwrap()
}

#[tokio::test]
async fn test_load_directory_with_location() {
    let file = create_temp_csv(SAMPLE_CSV);
    let source = source_for(file.path().to_str().unwrap());
    let provider = StaticLocation::new(ObserverLocation::new("US", "California", "Los Angeles"));

    let loaded = load_directory(&source, Some(&provider), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(loaded.snapshot.len(), 2);
    assert_eq!(
        loaded.observer,
        Some(ObserverLocation::new("US", "California", "Los Angeles"))
    );
}

#[tokio::test]
async fn test_load_directory_without_provider() {
    let file = create_temp_csv(SAMPLE_CSV);
    let source = source_for(file.path().to_str().unwrap());

    let loaded = load_directory(&source, None, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(loaded.snapshot.len(), 2);
    assert!(loaded.observer.is_none());
}

#[tokio::test]
async fn test_geolocation_failure_is_not_fatal() {
    let file = create_temp_csv(SAMPLE_CSV);
    let source = source_for(file.path().to_str().unwrap());

    let loaded = load_directory(&source, Some(&FailingProvider), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(loaded.snapshot.len(), 2);
    assert!(loaded.observer.is_none());
}

#[tokio::test]
async fn test_fetch_failure_recovers_to_empty_snapshot() {
    let (url, _request_rx) = serve_once("503 Service Unavailable", "").await;
    let source = source_for(&url);
    let provider = StaticLocation::new(ObserverLocation::new("US", "Texas", "Austin"));

    let loaded = load_directory(&source, Some(&provider), &CancellationToken::new())
        .await
        .unwrap();

    assert!(loaded.snapshot.is_empty());
    assert!(loaded.stats.is_recovered_failure());
    assert!(loaded.observer.is_some());
}

#[tokio::test]
async fn test_waits_for_both_operations() {
    let file = create_temp_csv(SAMPLE_CSV);
    let source = source_for(file.path().to_str().unwrap());

    let loaded = load_directory(&source, Some(&SlowProvider), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(loaded.snapshot.len(), 2);
    assert_eq!(loaded.observer.unwrap().city, "Austin");
}

#[tokio::test]
async fn test_cancelled_view_discards_results() {
    let url = serve_never().await;
    let source = source_for(&url);
    let token = CancellationToken::new();

    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        load_directory(&source, Some(&SlowProvider), &token),
    )
    .await
    .expect("cancellation should resolve promptly");

    assert!(outcome.is_none());
}
