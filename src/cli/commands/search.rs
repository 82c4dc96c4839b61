//! Search command implementation
//!
//! Loads the directory (and optionally the observer location) for one view
//! activation, derives the displayed view and prints it.

use super::shared::{CommandSummary, format_record, loading_spinner, setup_logging};
use crate::app::models::ResponseTeamRecord;
use crate::app::services::directory_loader::{DirectorySource, LoadedDirectory, load_directory};
use crate::app::services::directory_query::{
    DirectoryView, Layout, unique_regions, unique_states,
};
use crate::app::services::geolocation::{GeolocationProvider, IpApiProvider, StaticLocation};
use crate::cli::args::{OutputFormat, SearchArgs};
use crate::{Error, Result};
use colored::Colorize;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Search command runner
pub async fn run_search(args: SearchArgs, token: CancellationToken) -> Result<CommandSummary> {
    let start_time = Instant::now();

    setup_logging(&args.source)?;
    debug!("Search arguments: {:?}", args);

    let config = args.to_config()?;
    let source = DirectorySource::new(&config)?;

    let provider: Option<Box<dyn GeolocationProvider>> = match args.fixed_location()? {
        Some(location) => Some(Box::new(StaticLocation::new(location))),
        None if args.locate => Some(Box::new(IpApiProvider::new(&config)?)),
        None => None,
    };

    let spinner = loading_spinner(&args.source, "Loading directory...");
    let loaded = load_directory(&source, provider.as_deref(), &token).await;
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }

    let Some(loaded) = loaded else {
        return Err(Error::cancelled("search interrupted before the directory loaded"));
    };

    if args.list_facets {
        let shown = match args.source.output_format {
            OutputFormat::Human => print_facets_human(&loaded),
            OutputFormat::Json => print_facets_json(&loaded)?,
        };
        return Ok(CommandSummary {
            records_loaded: loaded.snapshot.len(),
            records_shown: shown,
            warnings: usize::from(loaded.stats.is_recovered_failure()),
            elapsed: start_time.elapsed(),
        });
    }

    let facets = args.facets();
    if !facets.is_empty() {
        debug!("Facets selected: {:?}", facets);
    }

    let view = DirectoryView::build_with_facets(
        &loaded.snapshot,
        &args.query,
        &facets,
        loaded.observer.as_ref(),
        args.layout.into(),
    );

    info!(
        "Query '{}' matched {} of {} records",
        view.query,
        view.total(),
        loaded.snapshot.len()
    );

    let shown = match args.source.output_format {
        OutputFormat::Human => print_human(&loaded, &view, args.limit),
        OutputFormat::Json => print_json(&loaded, &view, args.limit)?,
    };

    Ok(CommandSummary {
        records_loaded: loaded.snapshot.len(),
        records_shown: shown,
        warnings: usize::from(loaded.stats.is_recovered_failure()),
        elapsed: start_time.elapsed(),
    })
}

fn truncate<'a>(
    records: &[&'a ResponseTeamRecord],
    limit: Option<usize>,
) -> Vec<&'a ResponseTeamRecord> {
    let take = limit.unwrap_or(records.len());
    records.iter().take(take).copied().collect()
}

/// Print the view for a person; returns the number of records printed
fn print_human(
    loaded: &LoadedDirectory,
    view: &DirectoryView<'_>,
    limit: Option<usize>,
) -> usize {
    if let Some(error) = &loaded.stats.error {
        println!("{} {}", "No data yet:".yellow().bold(), error);
        return 0;
    }

    if let Some(observer) = &loaded.observer {
        let note = if view.ranked {
            format!("Ranked for {}", observer)
        } else {
            format!("Location {} is outside ranking coverage", observer)
        };
        println!("{}", note.dimmed());
    }

    if view.is_empty() {
        if view.query.is_empty() && view.facets.is_empty() {
            println!("No teams in the directory.");
        } else if view.query.is_empty() {
            println!("No teams match the selected state/region.");
        } else {
            println!("No teams match '{}'.", view.query);
        }
        return 0;
    }

    match view.layout {
        Layout::Merged => print_section(None, &view.local, limit),
        Layout::Sectioned => {
            print_section(Some("Local teams"), &view.local, limit)
                + print_section(Some("National teams"), &view.national, limit)
        }
    }
}

fn print_section(
    title: Option<&str>,
    records: &[&ResponseTeamRecord],
    limit: Option<usize>,
) -> usize {
    if let Some(title) = title {
        println!("\n{}", title.underline().bold());
    }

    let visible = truncate(records, limit);
    for record in &visible {
        println!("{}", format_record(record));
    }
    if visible.len() < records.len() {
        println!(
            "{}",
            format!("... and {} more", records.len() - visible.len()).dimmed()
        );
    }

    visible.len()
}

/// Print the view as JSON; returns the number of records printed
fn print_json(
    loaded: &LoadedDirectory,
    view: &DirectoryView<'_>,
    limit: Option<usize>,
) -> Result<usize> {
    let local = truncate(&view.local, limit);
    let national = truncate(&view.national, limit);

    let output = serde_json::json!({
        "query": view.query,
        "layout": view.layout,
        "facets": view.facets,
        "ranked": view.ranked,
        "observer": loaded.observer,
        "total_matches": view.total(),
        "local": local,
        "national": national,
        "stats": loaded.stats,
    });

    let text = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::serialization("Failed to encode search results", e))?;
    println!("{}", text);

    Ok(local.len() + national.len())
}

/// Print the distinct state and region values; returns the number printed
fn print_facets_human(loaded: &LoadedDirectory) -> usize {
    let states = unique_states(loaded.snapshot.iter());
    let regions = unique_regions(loaded.snapshot.iter());

    println!("{}", "States/territories".underline().bold());
    for state in &states {
        println!("  {}", state);
    }
    println!("\n{}", "Regions".underline().bold());
    for region in &regions {
        println!("  {}", region);
    }

    states.len() + regions.len()
}

fn print_facets_json(loaded: &LoadedDirectory) -> Result<usize> {
    let states = unique_states(loaded.snapshot.iter());
    let regions = unique_regions(loaded.snapshot.iter());

    let output = serde_json::json!({
        "states": states,
        "regions": regions,
    });
    let text = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::serialization("Failed to encode facet values", e))?;
    println!("{}", text);

    Ok(states.len() + regions.len())
}
