//! Load statistics and result structures for directory loading
//!
//! This module provides types for tracking how raw CSV rows were turned into
//! records, and for handing a loaded snapshot to consumers together with
//! those statistics.

use crate::app::models::Snapshot;
use serde::{Deserialize, Serialize};

/// Outcome of building records from tokenized rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Number of data rows (header excluded) seen by the builder
    pub rows_seen: usize,

    /// Number of records retained
    pub records_built: usize,

    /// Number of rows dropped because every field was blank
    pub blank_rows_dropped: usize,

    /// Team names shared by more than one record, sorted
    pub duplicate_names: Vec<String>,

    /// Header labels that matched no record field
    pub unrecognized_headers: Vec<String>,

    /// Known labels that were absent from the header
    pub missing_headers: Vec<String>,
}

impl BuildStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of data rows that became records
    pub fn retention_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            0.0
        } else {
            (self.records_built as f64 / self.rows_seen as f64) * 100.0
        }
    }

    /// Whether the data raised anything worth a reviewer's attention
    pub fn has_warnings(&self) -> bool {
        !self.duplicate_names.is_empty()
            || !self.unrecognized_headers.is_empty()
            || !self.missing_headers.is_empty()
    }
}

/// Statistics for one directory load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Location the directory was loaded from
    pub source: String,

    /// Size of the fetched body in bytes
    pub bytes_read: usize,

    /// Wall-clock time spent fetching and parsing, in milliseconds
    pub load_duration_ms: u64,

    /// Row-level build statistics
    pub build: BuildStats,

    /// Failure that was recovered into an empty snapshot, if any
    pub error: Option<String>,
}

impl LoadStats {
    /// Create empty statistics for a source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Whether the load failed and was recovered to an empty snapshot
    pub fn is_recovered_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Snapshot produced by one load, with its statistics
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Immutable records in source order
    pub snapshot: Snapshot,

    /// Load statistics
    pub stats: LoadStats,
}

impl LoadResult {
    /// An empty result for a source, used when a load is recovered
    pub fn empty(stats: LoadStats) -> Self {
        Self {
            snapshot: Snapshot::from(Vec::new()),
            stats,
        }
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
