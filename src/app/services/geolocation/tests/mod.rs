//! Tests for geolocation providers

use super::{GeolocationProvider, IpApiProvider, StaticLocation, locate_best_effort};
use crate::app::models::{ObserverLocation, ResponseTeamRecord};
use crate::app::services::directory_query::rank_if_applicable;
use crate::app::services::directory_loader::tests::serve_once;
use crate::config::Config;
use crate::Error;

async fn provider_answering(status_line: &str, body: &str) -> IpApiProvider {
    let (url, _request_rx) = serve_once(status_line, body).await;
    IpApiProvider::new(&Config::default().with_geolocation_url(url)).unwrap()
}

#[tokio::test]
async fn test_static_location() {
    let expected = ObserverLocation::new("US", "Texas", "Austin");
    let provider = StaticLocation::new(expected.clone());

    assert_eq!(provider.locate().await.unwrap(), expected);
    assert_eq!(provider.name(), "static");
}

#[tokio::test]
async fn test_ip_api_success() {
    let provider = provider_answering(
        "200 OK",
        r#"{"ip":"203.0.113.7","city":"Los Angeles","region":"California","country":"US","country_code":"US","country_name":"United States"}"#,
    )
    .await;

    let location = provider.locate().await.unwrap();
    assert_eq!(
        location,
        ObserverLocation::new("US", "California", "Los Angeles")
    );
}

#[tokio::test]
async fn test_ip_api_country_code_fallback() {
    let provider = provider_answering(
        "200 OK",
        r#"{"city":"Denver","region":"Colorado","country_code":"US"}"#,
    )
    .await;

    assert_eq!(provider.locate().await.unwrap().country_code, "US");
}

#[tokio::test]
async fn test_ip_api_provider_error_body() {
    let provider =
        provider_answering("200 OK", r#"{"error":true,"reason":"RateLimited"}"#).await;

    match provider.locate().await {
        Err(Error::GeolocationUnavailable { reason }) => assert_eq!(reason, "RateLimited"),
        other => panic!("expected GeolocationUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_ip_api_missing_city_still_locates() {
    let provider = provider_answering("200 OK", r#"{"country":"US","region":""}"#).await;
    assert_eq!(
        provider.locate().await.unwrap(),
        ObserverLocation::new("US", "", "")
    );
}

#[tokio::test]
async fn test_ip_api_empty_city_still_ranks() {
    let provider = provider_answering(
        "200 OK",
        r#"{"country":"US","region":"California","city":""}"#,
    )
    .await;

    let observer = locate_best_effort(&provider).await;
    assert_eq!(
        observer,
        Some(ObserverLocation::new("US", "California", ""))
    );

    let records = vec![
        ResponseTeamRecord {
            name: "Texas Team".to_string(),
            state_or_territory: "Texas".to_string(),
            ..Default::default()
        },
        ResponseTeamRecord {
            id: 1,
            name: "Cal Team".to_string(),
            state_or_territory: "California".to_string(),
            ..Default::default()
        },
    ];

    let ranked = rank_if_applicable(&records, observer.as_ref());
    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cal Team", "Texas Team"]);
}

#[tokio::test]
async fn test_ip_api_missing_country() {
    let provider =
        provider_answering("200 OK", r#"{"region":"California","city":"Fresno"}"#).await;
    assert!(matches!(
        provider.locate().await,
        Err(Error::GeolocationUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_ip_api_malformed_json() {
    let provider = provider_answering("200 OK", "<html>not json</html>").await;
    assert!(provider.locate().await.is_err());
}

#[tokio::test]
async fn test_ip_api_non_success_status() {
    let provider = provider_answering("429 Too Many Requests", "{}").await;
    assert!(matches!(
        provider.locate().await,
        Err(Error::GeolocationUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_best_effort_maps_failure_to_none() {
    let provider = provider_answering("500 Internal Server Error", "").await;
    assert!(locate_best_effort(&provider).await.is_none());

    let provider = StaticLocation::new(ObserverLocation::new("CA", "Ontario", "Toronto"));
    assert_eq!(
        locate_best_effort(&provider).await.unwrap().country_code,
        "CA"
    );
}
