//! Directory loader for the rapid response team CSV
//!
//! This module turns the published CSV into an immutable snapshot of
//! [`ResponseTeamRecord`](crate::app::models::ResponseTeamRecord)s.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`tokenizer`] - Quote-aware line and field splitting
//! - [`record_builder`] - Header label mapping and blank-row filtering
//! - [`source`] - Fetching from HTTP or disk, with cancellation
//! - [`session`] - Concurrent directory load and geolocation for one view
//! - [`stats`] - Build and load statistics
//!
//! ## Usage
//!
//! ```rust
//! use rrt_directory::Config;
//! use rrt_directory::app::services::directory_loader::DirectorySource;
//!
//! # async fn example() -> rrt_directory::Result<()> {
//! let source = DirectorySource::new(&Config::new("rrts.csv"))?;
//! let result = source.load().await?;
//!
//! println!("Loaded {} teams from {} rows",
//!          result.stats.build.records_built,
//!          result.stats.build.rows_seen);
//! # Ok(())
//! # }
//! ```

pub mod record_builder;
pub mod session;
pub mod source;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use record_builder::{Column, RecordBuilder, parse_records};
pub use session::{LoadedDirectory, load_directory};
pub use source::{DirectorySource, SourceLocation};
pub use stats::{BuildStats, LoadResult, LoadStats};
pub use tokenizer::{split_line, tokenize};
