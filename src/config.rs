//! Configuration management and validation.
//!
//! Holds the directory source location, the geolocation endpoint and the
//! HTTP settings shared by every outbound request.

use crate::constants::{
    DEFAULT_GEOLOCATION_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SOURCE, HTTP_SCHEMES,
    MAX_REQUEST_TIMEOUT_SECS, USER_AGENT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Runtime configuration for loading and locating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// URL or filesystem path of the directory CSV
    pub source: String,

    /// Endpoint queried for the observer's approximate location
    pub geolocation_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create a configuration for a source with default settings
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_geolocation_url(mut self, url: impl Into<String>) -> Self {
        self.geolocation_url = url.into();
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::configuration("Directory source cannot be empty"));
        }

        if !is_http_location(&self.geolocation_url) {
            return Err(Error::configuration(format!(
                "Geolocation URL must use http or https: '{}'",
                self.geolocation_url
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds",
            ));
        }

        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(Error::configuration(format!(
                "Request timeout cannot exceed {} seconds",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    /// Per-request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether the source is fetched over HTTP rather than read from disk
    pub fn source_is_remote(&self) -> bool {
        is_http_location(&self.source)
    }

    /// Build the HTTP client shared by the directory source and geolocation
    pub fn http_client(&self) -> Result<reqwest::Client> {
        debug!(
            "Building HTTP client: timeout={}s, user_agent={}",
            self.request_timeout_secs, USER_AGENT
        );

        reqwest::Client::builder()
            .timeout(self.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))
    }
}

/// Whether a location string names an HTTP(S) resource
pub fn is_http_location(location: &str) -> bool {
    let lower = location.trim().to_ascii_lowercase();
    HTTP_SCHEMES.iter().any(|scheme| lower.starts_with(scheme))
}
