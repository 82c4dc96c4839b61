use clap::Parser;
use rrt_directory::cli::{args::Args, commands};
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancelled on CTRL+C; commands drop whatever is still in flight
        let cancellation_token = CancellationToken::new();

        let signal_token = cancellation_token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\nReceived CTRL+C, shutting down...");
                signal_token.cancel();
            }
        });

        commands::run(command, cancellation_token).await
    });

    match result {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("RRT Directory - Rapid Response Team Search");
    println!("==========================================");
    println!();
    println!("Search the published directory of volunteer rapid response teams");
    println!("by name, state or region, with nearby teams ranked first.");
    println!();
    println!("USAGE:");
    println!("    rrt-directory <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    search      Search the directory (main command)");
    println!("    validate    Load the directory and report data quality");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # List every team in a local copy of the directory:");
    println!("    rrt-directory search --source ./rrts.csv");
    println!();
    println!("    # Search the published directory, ranking teams near you first:");
    println!("    rrt-directory search angeles --source https://example.org/rrts.csv --locate");
    println!();
    println!("    # Show national teams in their own section, as JSON:");
    println!("    rrt-directory search --layout sectioned --format json");
    println!();
    println!("    # List the state and region values, then filter on them:");
    println!("    rrt-directory search --list-facets");
    println!("    rrt-directory search --state Texas");
    println!();
    println!("    # Check the CSV for blank rows, duplicate names and header problems:");
    println!("    rrt-directory validate --source ./rrts.csv --strict");
    println!();
    println!("For detailed help on any command, use:");
    println!("    rrt-directory <COMMAND> --help");
}
