use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::occupancy::{handle_occupancy, OccupancyArgs};
use commands::solve::{handle_solve, SolveArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Vaultpath planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the minimal total steps for the agents in a grid to collect
    /// every key.
    Solve {
        /// Grid file to read; stdin when omitted.
        grid_file: Option<PathBuf>,

        /// Stop the search after this many state expansions.
        #[arg(long)]
        max_expansions: Option<u64>,

        /// Print the plan summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check whether a list of bookings fits a fixed capacity.
    Occupancy {
        /// Bookings file (JSON array) to read; stdin when omitted.
        bookings_file: Option<PathBuf>,

        /// Number of capacity units available.
        #[arg(long)]
        capacity: u32,

        /// Print the verdict as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            grid_file,
            max_expansions,
            json,
        } => handle_solve(&SolveArgs {
            grid_file,
            max_expansions,
            json,
        }),
        Command::Occupancy {
            bookings_file,
            capacity,
            json,
        } => handle_occupancy(&OccupancyArgs {
            bookings_file,
            capacity,
            json,
        }),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Diagnostics go to stderr; stdout is reserved for command results.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
