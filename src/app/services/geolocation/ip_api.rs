//! IP-based geolocation over HTTP
//!
//! Queries a JSON endpoint shaped like ipapi.co's `/json/` response and
//! reads the `country`, `region` and `city` fields.

use super::GeolocationProvider;
use crate::app::models::ObserverLocation;
use crate::config::Config;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Subset of the provider's JSON response that we read
#[derive(Debug, Deserialize)]
struct GeolocationResponse {
    country: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    city: Option<String>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl GeolocationResponse {
    fn into_location(self) -> Result<ObserverLocation> {
        if self.error {
            return Err(Error::geolocation_unavailable(
                self.reason
                    .unwrap_or_else(|| "provider reported an error".to_string()),
            ));
        }

        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let country_code = non_empty(self.country)
            .or_else(|| non_empty(self.country_code))
            .ok_or_else(|| Error::geolocation_unavailable("response has no country"))?;
        // Missing region or city stay empty; empty parts match every record
        let region = self.region.unwrap_or_default();
        let city = self.city.unwrap_or_default();

        Ok(ObserverLocation::new(
            country_code.trim(),
            region.trim(),
            city.trim(),
        ))
    }
}

/// Geolocation provider backed by an HTTP JSON endpoint
#[derive(Debug, Clone)]
pub struct IpApiProvider {
    endpoint: String,
    client: reqwest::Client,
}

impl IpApiProvider {
    /// Create a provider for the configured endpoint
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            endpoint: config.geolocation_url.clone(),
            client: config.http_client()?,
        })
    }

    /// Create a provider with an existing HTTP client
    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl GeolocationProvider for IpApiProvider {
    async fn locate(&self) -> Result<ObserverLocation> {
        debug!("Requesting observer location from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::geolocation_unavailable(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::geolocation_unavailable(format!(
                "provider answered {}",
                status
            )));
        }

        let body: GeolocationResponse = response
            .json()
            .await
            .map_err(|e| Error::geolocation_unavailable(format!("malformed response: {}", e)))?;

        body.into_location()
    }

    fn name(&self) -> &str {
        &self.endpoint
    }
}
