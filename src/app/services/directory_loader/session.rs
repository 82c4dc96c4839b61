//! One view activation: directory load plus optional geolocation
//!
//! The directory fetch and the location lookup run concurrently; ranking
//! only needs both to have settled. If the owning view is torn down first
//! (its token cancelled) neither result is handed back.

use super::source::DirectorySource;
use super::stats::LoadStats;
use crate::app::models::{ObserverLocation, Snapshot};
use crate::app::services::geolocation::{GeolocationProvider, locate_best_effort};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Everything a view needs after activation
#[derive(Debug, Clone)]
pub struct LoadedDirectory {
    /// Immutable records in source order
    pub snapshot: Snapshot,

    /// Observer location, if a provider was given and succeeded
    pub observer: Option<ObserverLocation>,

    /// Directory load statistics
    pub stats: LoadStats,
}

/// Load the directory and locate the observer concurrently
///
/// Directory failures are recovered into an empty snapshot and geolocation
/// failures into `None`. Returns `None` only when `token` is cancelled
/// before both operations settle.
pub async fn load_directory(
    source: &DirectorySource,
    provider: Option<&dyn GeolocationProvider>,
    token: &CancellationToken,
) -> Option<LoadedDirectory> {
    let locate = async {
        match provider {
            Some(provider) => locate_best_effort(provider).await,
            None => None,
        }
    };

    let (load_result, observer) = tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("View torn down before directory load settled; discarding results");
            return None;
        }
        settled = async { tokio::join!(source.load_or_empty(), locate) } => settled,
    };

    info!(
        "Directory ready: {} records, observer {}",
        load_result.len(),
        observer
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown".to_string())
    );

    Some(LoadedDirectory {
        snapshot: load_result.snapshot,
        observer,
        stats: load_result.stats,
    })
}
