//! Track navigation command-line tool.
//!
//! # Commands
//!
//! - `trackctl parse <FILE>` - Parse a track and list its waypoints and corridors
//! - `trackctl route <FILE> --from <ID> --to <ID>` - Print turn-by-turn steps
//!
//! `<FILE>` may be `-` to read the description from stdin. Both commands
//! accept `--json` for machine-readable output.
//!
//! Logging is controlled by `RUST_LOG` (default `track=info`).

mod input;
mod parse;
mod route;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Track navigation
///
/// Parse compact track descriptions and plan routes through them.
#[derive(Parser)]
#[command(name = "trackctl")]
#[command(about = "Parse track descriptions and plan routes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a track and print its waypoints and corridors
    Parse {
        /// Track description file, or `-` for stdin
        #[arg(name = "FILE")]
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Coordinate comparison tolerance
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Find the shortest route and print turn-by-turn steps
    Route {
        /// Track description file, or `-` for stdin
        #[arg(name = "FILE")]
        file: PathBuf,

        /// Source waypoint id
        #[arg(long)]
        from: usize,

        /// Target waypoint id
        #[arg(long)]
        to: usize,

        /// Print JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Leave the corridor just travelled out of the options
        #[arg(long)]
        no_back: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("track=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            json,
            tolerance,
        } => parse::run(&file, json, tolerance),
        Commands::Route {
            file,
            from,
            to,
            json,
            no_back,
        } => route::run(&file, from, to, json, no_back),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_route_arguments() {
        let cli = Cli::try_parse_from(["trackctl", "route", "-", "--from", "0", "--to", "3", "--no-back"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Route {
                from: 0,
                to: 3,
                no_back: true,
                json: false,
                ..
            })
        ));
    }

    #[test]
    fn test_route_requires_endpoints() {
        assert!(Cli::try_parse_from(["trackctl", "route", "track.txt", "--from", "0"]).is_err());
    }
}
