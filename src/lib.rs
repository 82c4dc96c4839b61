//! RRT Directory Library
//!
//! A Rust library for loading a CSV directory of volunteer rapid response
//! teams (RRTs) and serving search, filtering and proximity ranking over the
//! resulting in-memory snapshot.
//!
//! This library provides tools for:
//! - Tokenizing CSV text with quote-aware field splitting
//! - Normalizing header-labelled rows into typed team records
//! - Fetching the directory from a URL or local file with cancellation
//! - Case-insensitive free-text matching and national/local partitioning
//! - Ranking records by proximity to an approximate observer location

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod directory_loader;
        pub mod directory_query;
        pub mod geolocation;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ObserverLocation, ResponseTeamRecord, Snapshot};
pub use config::Config;

/// Result type alias for the RRT directory
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for directory loading and lookup operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The directory source answered with a non-success status
    #[error("Failed to fetch directory: {status} {status_text}")]
    FetchFailure { status: u16, status_text: String },

    /// HTTP transport failed before a status was received
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Observer location could not be determined
    #[error("Geolocation unavailable: {reason}")]
    GeolocationUnavailable { reason: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The owning view went away before the operation completed
    #[error("Operation cancelled: {reason}")]
    Cancelled { reason: String },
}

impl Error {
    /// Create a fetch failure from a response status
    pub fn fetch_failure(status: u16, status_text: impl Into<String>) -> Self {
        Self::FetchFailure {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create an HTTP transport error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a geolocation error
    pub fn geolocation_unavailable(reason: impl Into<String>) -> Self {
        Self::GeolocationUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }

    /// Whether this error is a fetch-level failure of the directory source
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Self::FetchFailure { .. } | Self::Http { .. } | Self::Io { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
