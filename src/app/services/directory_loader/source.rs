//! Directory source: fetch, parse and snapshot
//!
//! Fetches the directory CSV from its configured location and pipes it
//! through the tokenizer and record builder. HTTP locations are requested
//! with a no-cache directive; anything else is read from the filesystem.

use super::record_builder::parse_records;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::Snapshot;
use crate::config::{Config, is_http_location};
use crate::{Error, Result};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::path::PathBuf;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Where the directory CSV lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    /// Remote CSV fetched over HTTP(S)
    Http(String),
    /// Local CSV file
    File(PathBuf),
}

impl SourceLocation {
    /// Classify a location string by scheme
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if is_http_location(location) {
            Self::Http(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Http(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Loads directory snapshots from a single configured location
#[derive(Debug, Clone)]
pub struct DirectorySource {
    location: SourceLocation,
    client: reqwest::Client,
}

impl DirectorySource {
    /// Create a source from configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            location: SourceLocation::parse(&config.source),
            client: config.http_client()?,
        })
    }

    /// Create a source with an existing HTTP client
    pub fn with_client(location: SourceLocation, client: reqwest::Client) -> Self {
        Self { location, client }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Fetch the raw CSV text
    ///
    /// # Errors
    /// * `Error::FetchFailure` when the server answers with a non-success status
    /// * `Error::Http` when the request or body read fails in transport
    /// * `Error::Io` when a local file cannot be read
    pub async fn fetch_text(&self) -> Result<String> {
        match &self.location {
            SourceLocation::Http(url) => {
                debug!("Requesting directory from {}", url);

                let response = self
                    .client
                    .get(url)
                    .header(CACHE_CONTROL, "no-cache")
                    .header(PRAGMA, "no-cache")
                    .send()
                    .await
                    .map_err(|e| Error::http(format!("Request to {} failed", url), e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::fetch_failure(
                        status.as_u16(),
                        status.canonical_reason().unwrap_or_default(),
                    ));
                }

                response
                    .text()
                    .await
                    .map_err(|e| Error::http(format!("Failed to read body from {}", url), e))
            }
            SourceLocation::File(path) => {
                debug!("Reading directory from {}", path.display());

                tokio::fs::read_to_string(path).await.map_err(|e| {
                    Error::io(
                        format!("Failed to read directory file {}", path.display()),
                        e,
                    )
                })
            }
        }
    }

    /// Fetch and parse the directory into a fresh snapshot
    pub async fn load(&self) -> Result<LoadResult> {
        let start_time = Instant::now();
        let source = self.location.describe();
        info!("Loading directory from {}", source);

        let text = self.fetch_text().await?;
        let (records, build) = parse_records(&text);

        let stats = LoadStats {
            source,
            bytes_read: text.len(),
            load_duration_ms: start_time.elapsed().as_millis() as u64,
            build,
            error: None,
        };

        info!(
            "Loaded {} records ({} rows, {} blank) in {}ms",
            stats.build.records_built,
            stats.build.rows_seen,
            stats.build.blank_rows_dropped,
            stats.load_duration_ms
        );

        Ok(LoadResult {
            snapshot: Snapshot::from(records),
            stats,
        })
    }

    /// Load, recovering any failure into an empty snapshot
    ///
    /// The failure is logged and recorded in [`LoadStats::error`] so callers
    /// can render a "no data" state without handling errors themselves.
    pub async fn load_or_empty(&self) -> LoadResult {
        match self.load().await {
            Ok(result) => result,
            Err(e) => {
                error!("Directory load from {} failed: {}", self.location.describe(), e);
                let mut stats = LoadStats::new(self.location.describe());
                stats.error = Some(e.to_string());
                LoadResult::empty(stats)
            }
        }
    }

    /// Load unless the token is cancelled first
    ///
    /// Returns `None` when cancelled; the in-flight request is dropped and its
    /// result is never observed.
    pub async fn load_with_cancel(&self, token: &CancellationToken) -> Option<Result<LoadResult>> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Directory load from {} cancelled", self.location.describe());
                None
            }
            result = self.load() => Some(result),
        }
    }
}
