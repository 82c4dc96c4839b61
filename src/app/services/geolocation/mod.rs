//! Observer geolocation lookup
//!
//! Location is an optional enhancement: it only drives proximity ranking.
//! Providers are injected behind [`GeolocationProvider`] so the HTTP lookup
//! can be swapped for a fixed location on the command line or in tests.
//!
//! ## Usage
//!
//! ```rust
//! use rrt_directory::app::services::geolocation::{StaticLocation, locate_best_effort};
//! use rrt_directory::ObserverLocation;
//!
//! # async fn example() {
//! let provider = StaticLocation::new(ObserverLocation::new("US", "California", "Los Angeles"));
//! let observer = locate_best_effort(&provider).await;
//! assert!(observer.is_some());
//! # }
//! ```

pub mod ip_api;

#[cfg(test)]
pub mod tests;

pub use ip_api::IpApiProvider;

use crate::Result;
use crate::app::models::ObserverLocation;
use async_trait::async_trait;
use tracing::{debug, warn};

/// A source that may supply the observer's approximate location
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Look up the observer's location
    ///
    /// Implementations report every failure as an error; callers decide
    /// whether it matters.
    async fn locate(&self) -> Result<ObserverLocation>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Provider that always answers with a fixed location
#[derive(Debug, Clone)]
pub struct StaticLocation {
    location: ObserverLocation,
}

impl StaticLocation {
    pub fn new(location: ObserverLocation) -> Self {
        Self { location }
    }
}

#[async_trait]
impl GeolocationProvider for StaticLocation {
    async fn locate(&self) -> Result<ObserverLocation> {
        Ok(self.location.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Look up a location, mapping any failure to `None`
pub async fn locate_best_effort(provider: &dyn GeolocationProvider) -> Option<ObserverLocation> {
    match provider.locate().await {
        Ok(location) => {
            debug!("Observer located via {}: {}", provider.name(), location);
            Some(location)
        }
        Err(e) => {
            warn!(
                "Geolocation via {} unavailable, continuing without ranking: {}",
                provider.name(),
                e
            );
            None
        }
    }
}
