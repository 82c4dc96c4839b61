//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the command implementations.

use crate::Result;
use crate::app::models::ResponseTeamRecord;
use crate::cli::args::SourceArgs;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Outcome of one command, for the exit status
#[derive(Debug, Clone, Default)]
pub struct CommandSummary {
    /// Number of records in the loaded snapshot
    pub records_loaded: usize,
    /// Number of records shown to the user
    pub records_shown: usize,
    /// Number of data warnings encountered
    pub warnings: usize,
    /// Total command time
    pub elapsed: Duration,
}

/// Set up structured logging for a command
///
/// Returns `false` when a global subscriber was already installed, e.g. when
/// several commands run in one process; the existing one is kept.
pub fn setup_logging(args: &SourceArgs) -> Result<bool> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rrt_directory={}", log_level)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    match installed {
        Ok(()) => {
            debug!("Logging initialized at level: {}", log_level);
            Ok(true)
        }
        Err(e) => {
            debug!("Keeping existing log subscriber: {}", e);
            Ok(false)
        }
    }
}

/// Spinner shown while the directory loads, if progress is enabled
pub fn loading_spinner(args: &SourceArgs, message: &str) -> Option<ProgressBar> {
    if !args.show_progress() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Render one record as an indented human-readable block
pub fn format_record(record: &ResponseTeamRecord) -> String {
    let mut lines = Vec::new();

    let name = if record.name.is_empty() {
        "(unnamed team)".to_string()
    } else {
        record.name.clone()
    };

    let mut place: Vec<&str> = Vec::new();
    if !record.region_note.is_empty() {
        place.push(&record.region_note);
    }
    if !record.state_or_territory.is_empty() {
        place.push(&record.state_or_territory);
    }

    if place.is_empty() {
        lines.push(format!("{}", name.bold()));
    } else {
        lines.push(format!("{} {}", name.bold(), format!("({})", place.join(", ")).dimmed()));
    }

    let services = record.service_types();
    if !services.is_empty() {
        lines.push(format!("    {} {}", "services:".cyan(), services.join(", ")));
    }

    for (label, value) in record.contact_channels() {
        lines.push(format!("    {} {}", format!("{}:", label).cyan(), value));
    }

    if !record.comment.is_empty() {
        lines.push(format!("    {}", record.comment.italic()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Args, Commands};
    use clap::Parser;

    #[test]
    fn test_setup_logging_keeps_existing_subscriber() {
        let args = Args::try_parse_from(["rrt-directory", "validate", "-q"]).unwrap();
        let Some(Commands::Validate(validate)) = args.command else {
            panic!("expected validate command");
        };

        assert!(setup_logging(&validate.source).is_ok());
        assert!(!setup_logging(&validate.source).unwrap());
    }

    #[test]
    fn test_format_record_lists_present_fields() {
        colored::control::set_override(false);

        let record = ResponseTeamRecord {
            name: "Alpha Team".to_string(),
            state_or_territory: "California".to_string(),
            region_note: "Los Angeles".to_string(),
            service_type: "Legal;Medical".to_string(),
            phone: "555-0001".to_string(),
            comment: "Helps locally".to_string(),
            ..Default::default()
        };

        let text = format_record(&record);
        assert_eq!(
            text,
            "Alpha Team (Los Angeles, California)\n    services: Legal, Medical\n    phone: 555-0001\n    Helps locally"
        );
    }

    #[test]
    fn test_format_record_unnamed() {
        colored::control::set_override(false);

        let record = ResponseTeamRecord {
            email: "x@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_record(&record),
            "(unnamed team)\n    email: x@example.com"
        );
    }
}
