//! Command-line argument definitions for the RRT directory
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::ObserverLocation;
use crate::app::services::directory_query::{FacetFilter, Layout};
use crate::config::Config;
use crate::constants::{DEFAULT_GEOLOCATION_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SOURCE};
use crate::{Error, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// CLI arguments for the RRT directory
///
/// Loads the rapid response team directory CSV and searches, partitions and
/// ranks it the way the directory pages do.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rrt-directory",
    version,
    about = "Search the rapid response team directory",
    long_about = "Loads the published rapid response team directory CSV from a URL or a local \
                  file, normalizes each row into a team record, and lists the teams matching a \
                  free-text query. Teams near your approximate location can be ranked first."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Search the directory by name, state or region
    Search(SearchArgs),
    /// Load the directory and report data quality
    Validate(ValidateArgs),
}

/// Options shared by every command that loads the directory
#[derive(Debug, Clone, ClapArgs)]
pub struct SourceArgs {
    /// URL or path of the directory CSV
    ///
    /// Locations starting with http:// or https:// are fetched with a
    /// no-cache directive; anything else is read from disk.
    #[arg(
        short = 's',
        long = "source",
        value_name = "URL|PATH",
        env = "RRT_SOURCE",
        default_value = DEFAULT_SOURCE,
        help = "URL or path of the directory CSV"
    )]
    pub source: String,

    /// Timeout for each outbound request
    #[arg(
        long = "timeout",
        value_name = "SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        help = "Timeout in seconds for each outbound request"
    )]
    pub timeout_secs: u64,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides the spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Free-text query matched against name, state and region
    ///
    /// Case-insensitive substring match. Omit to list every team.
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Look up your approximate location and rank nearby teams first
    #[arg(
        long = "locate",
        help = "Rank nearby teams first using IP geolocation"
    )]
    pub locate: bool,

    /// Use a fixed location instead of looking it up
    #[arg(
        long = "location",
        value_name = "COUNTRY,REGION,CITY",
        conflicts_with = "locate",
        help = "Rank against a fixed location, e.g. \"US,California,Los Angeles\""
    )]
    pub location: Option<String>,

    /// Geolocation endpoint used by --locate
    #[arg(
        long = "geolocation-url",
        value_name = "URL",
        env = "RRT_GEOLOCATION_URL",
        default_value = DEFAULT_GEOLOCATION_URL,
        help = "Geolocation endpoint used by --locate"
    )]
    pub geolocation_url: String,

    /// How national teams are listed
    #[arg(
        long = "layout",
        value_enum,
        default_value = "merged",
        help = "List national teams with the rest (merged) or in their own section"
    )]
    pub layout: LayoutArg,

    /// Only list teams whose state/territory is exactly this value
    #[arg(
        long = "state",
        value_name = "STATE",
        help = "Only teams in this state/territory (exact, case-insensitive)"
    )]
    pub state: Option<String>,

    /// Only list teams whose region note is exactly this value
    #[arg(
        long = "region",
        value_name = "REGION",
        help = "Only teams with this region note (exact, case-insensitive)"
    )]
    pub region: Option<String>,

    /// Print the available --state and --region values instead of teams
    #[arg(
        long = "list-facets",
        help = "List the distinct states/territories and regions in the directory"
    )]
    pub list_facets: bool,

    /// Show at most this many teams per section
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        help = "Maximum number of teams to show per section"
    )]
    pub limit: Option<usize>,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Treat data warnings as failures
    #[arg(
        long = "strict",
        help = "Fail when duplicate names or header problems are found"
    )]
    pub strict: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Layout choices exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayoutArg {
    Merged,
    Sectioned,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Merged => Layout::Merged,
            LayoutArg::Sectioned => Layout::Sectioned,
        }
    }
}

impl SourceArgs {
    /// Build the configuration these arguments describe
    pub fn to_config(&self) -> Config {
        Config::new(self.source.trim()).with_request_timeout_secs(self.timeout_secs)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a spinner (human output, not quiet)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl SearchArgs {
    /// Validate the search arguments and build the configuration
    pub fn to_config(&self) -> Result<Config> {
        let config = self
            .source
            .to_config()
            .with_geolocation_url(self.geolocation_url.trim());
        config.validate()?;

        if self.limit == Some(0) {
            return Err(Error::configuration("Limit must be greater than 0"));
        }

        // Surface a malformed --location before any network work starts
        self.fixed_location()?;

        Ok(config)
    }

    /// State/region facets selected on the command line
    pub fn facets(&self) -> FacetFilter {
        FacetFilter::new(self.state.as_deref(), self.region.as_deref())
    }

    /// Parse the --location override, if given
    pub fn fixed_location(&self) -> Result<Option<ObserverLocation>> {
        self.location.as_deref().map(str::parse).transpose()
    }
}

impl ValidateArgs {
    /// Validate the arguments and build the configuration
    pub fn to_config(&self) -> Result<Config> {
        let config = self.source.to_config();
        config.validate()?;
        Ok(config)
    }
}
