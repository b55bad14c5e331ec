//! citymap CLI - edit and query a weighted city map from the command line.
//!
//! The map is stored in `SQLite`; every command opens it, applies one
//! operation through the library facade, and prints the result.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// citymap: weighted city map editor and route finder.
#[derive(Parser)]
#[command(name = "citymap")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .citymap/config.yaml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Database file (overrides the configured one)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, move or delete locations
    Location {
        #[command(subcommand)]
        action: LocationCommand,
    },

    /// Add roads between locations
    Road {
        #[command(subcommand)]
        action: RoadCommand,
    },

    /// List locations and roads
    List,

    /// Find the shortest path between two locations
    Path {
        /// Start location
        from: String,

        /// End location
        to: String,
    },

    /// Print the adjacency or incidence matrix
    Matrix {
        /// Which matrix to derive
        #[arg(value_enum)]
        kind: MatrixKind,
    },

    /// Export the graph to JSON or CSV
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output directory (defaults to the configured export directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Replay a drag gesture: press, optional moves, release
    Drag {
        /// Press point as X,Y
        #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
        press: String,

        /// Intermediate pointer positions as X,Y (repeatable)
        #[arg(long = "move", value_name = "X,Y", allow_hyphen_values = true)]
        moves: Vec<String>,

        /// Release point as X,Y
        #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
        release: String,
    },

    /// Populate the NH48 sample map if the database is empty
    Seed,

    /// Show database statistics
    Stats,
}

#[derive(Subcommand)]
enum LocationCommand {
    /// Add a new location
    Add {
        /// Unique location name
        name: String,

        /// X coordinate
        #[arg(allow_hyphen_values = true)]
        x: String,

        /// Y coordinate
        #[arg(allow_hyphen_values = true)]
        y: String,
    },

    /// Set the position of an existing location
    Move {
        /// Location name
        name: String,

        /// New X coordinate
        #[arg(allow_hyphen_values = true)]
        x: String,

        /// New Y coordinate
        #[arg(allow_hyphen_values = true)]
        y: String,
    },

    /// Delete a location and every road touching it
    Delete {
        /// Location name
        name: String,
    },
}

#[derive(Subcommand)]
enum RoadCommand {
    /// Add an undirected road
    Add {
        /// One endpoint
        from: String,

        /// The other endpoint
        to: String,

        /// Travel cost (non-negative)
        #[arg(allow_hyphen_values = true)]
        weight: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MatrixKind {
    /// Node-by-node road weights
    Adjacency,
    /// Node-by-road signed membership
    Incidence,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    /// Node-link JSON (graph_data.json)
    Json,
    /// nodes.csv and edges.csv
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = match cli::load_config(cli.config.as_deref(), cli.database) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Location { action } => match action {
            LocationCommand::Add { name, x, y } => cli::location::add(&config, &name, &x, &y),
            LocationCommand::Move { name, x, y } => cli::location::relocate(&config, &name, &x, &y),
            LocationCommand::Delete { name } => cli::location::delete(&config, &name),
        },
        Commands::Road { action } => match action {
            RoadCommand::Add { from, to, weight } => cli::road::add(&config, &from, &to, &weight),
        },
        Commands::List => cli::list::run(&config),
        Commands::Path { from, to } => cli::path::run(&config, &from, &to),
        Commands::Matrix { kind } => match kind {
            MatrixKind::Adjacency => cli::matrix::adjacency(&config),
            MatrixKind::Incidence => cli::matrix::incidence(&config),
        },
        Commands::Export { format, out } => {
            let dir = out.unwrap_or_else(|| config.export_dir.clone());
            match format {
                ExportFormat::Json => cli::export::json(&config, &dir),
                ExportFormat::Csv => cli::export::csv(&config, &dir),
            }
        }
        Commands::Drag {
            press,
            moves,
            release,
        } => cli::drag::run(&config, &press, &moves, &release),
        Commands::Seed => cli::seed::run(&config),
        Commands::Stats => cli::stats::run(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
