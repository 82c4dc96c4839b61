//! Validate command implementation
//!
//! Loads the directory once, without recovery, and reports how the CSV
//! rows were normalized: blank rows dropped, duplicate names, and header
//! labels that did not line up with the expected columns.

use super::shared::{CommandSummary, loading_spinner, setup_logging};
use crate::app::services::directory_loader::{DirectorySource, LoadResult};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::{Error, Result};
use colored::Colorize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Validate command runner
///
/// Fetch failures are returned as errors so the process exits non-zero.
pub async fn run_validate(args: ValidateArgs, token: CancellationToken) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    debug!("Validate arguments: {:?}", args);

    let config = args.to_config()?;
    let source = DirectorySource::new(&config)?;

    let spinner = loading_spinner(&args.source, "Loading directory...");
    let outcome = source.load_with_cancel(&token).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let result = match outcome {
        Some(result) => result?,
        None => return Err(Error::cancelled("validation interrupted")),
    };

    let build = &result.stats.build;
    let warnings =
        build.duplicate_names.len() + build.unrecognized_headers.len() + build.missing_headers.len();

    info!(
        "Validated {} records with {} warnings",
        build.records_built, warnings
    );

    match args.source.output_format {
        OutputFormat::Human => print_report(&result),
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&result.stats)
                .map_err(|e| Error::serialization("Failed to encode validation report", e))?;
            println!("{}", text);
        }
    }

    if args.strict && warnings > 0 {
        warn!("Strict validation failed with {} warnings", warnings);
        return Err(Error::configuration(format!(
            "Directory has {} data warnings (strict mode)",
            warnings
        )));
    }

    Ok(CommandSummary {
        records_loaded: result.len(),
        records_shown: 0,
        warnings,
        elapsed: start_time.elapsed(),
    })
}

fn print_report(result: &LoadResult) {
    let stats = &result.stats;
    let build = &stats.build;

    println!("{}", "Directory Validation Report".bold());
    println!("===========================");
    println!("Source:          {}", stats.source);
    println!("Bytes read:      {}", stats.bytes_read);
    println!("Load time:       {}ms", stats.load_duration_ms);
    println!("Data rows:       {}", build.rows_seen);
    println!("Records built:   {}", build.records_built);
    println!("Blank rows:      {}", build.blank_rows_dropped);
    println!("Retention:       {:.1}%", build.retention_rate());

    let national = result.snapshot.iter().filter(|r| r.is_national()).count();
    println!("National teams:  {}", national);
    println!("Local teams:     {}", result.len() - national);

    if !build.has_warnings() {
        println!("\n{}", "No data warnings".green());
        return;
    }

    println!("\n{}", "Warnings".yellow().bold());
    for name in &build.duplicate_names {
        println!("  duplicate name: {}", name);
    }
    for label in &build.unrecognized_headers {
        println!("  unrecognized header: {}", label);
    }
    for label in &build.missing_headers {
        println!("  missing header: {}", label);
    }
}
