//! Command implementations for the RRT directory CLI
//!
//! Each command is implemented in its own module:
//! - `search`: load, filter, rank and list teams
//! - `validate`: load and report data quality

pub mod search;
pub mod shared;
pub mod validate;

pub use shared::CommandSummary;

use crate::Result;
use crate::cli::args::Commands;
use tokio_util::sync::CancellationToken;

/// Main command runner
///
/// `token` is cancelled when the user interrupts; commands drop in-flight
/// loads rather than acting on them.
pub async fn run(command: Commands, token: CancellationToken) -> Result<CommandSummary> {
    match command {
        Commands::Search(search_args) => search::run_search(search_args, token).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args, token).await,
    }
}

