//! Occupancy command handler for the capacity-feasibility check.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use vaultpath_lib::{fits_capacity, Booking};

/// Arguments for the occupancy command.
#[derive(Debug, Clone)]
pub struct OccupancyArgs {
    /// Bookings file to read; stdin when `None`.
    pub bookings_file: Option<PathBuf>,
    /// Number of capacity units available.
    pub capacity: u32,
    /// Output in JSON format instead of human-readable text.
    pub json: bool,
}

/// Exit codes for the occupancy command (script contract).
pub mod exit_codes {
    pub const FITS: i32 = 0;
    pub const EXCEEDED: i32 = 1;
}

/// JSON document printed by `occupancy --json`.
#[derive(Debug, Serialize)]
struct OccupancyOutput {
    capacity: u32,
    bookings: usize,
    fits: bool,
}

/// Handle the occupancy subcommand.
///
/// Reads a JSON array of bookings and reports whether they ever exceed the
/// given capacity.
pub fn handle_occupancy(args: &OccupancyArgs) -> Result<()> {
    let bookings = read_bookings(args.bookings_file.as_deref())?;
    let fits = fits_capacity(args.capacity, &bookings);

    if args.json {
        let output = OccupancyOutput {
            capacity: args.capacity,
            bookings: bookings.len(),
            fits,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{fits}");
    }

    let code = if fits {
        exit_codes::FITS
    } else {
        exit_codes::EXCEEDED
    };
    if code != exit_codes::FITS {
        std::process::exit(code);
    }

    Ok(())
}

fn read_bookings(path: Option<&Path>) -> Result<Vec<Booking>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read bookings from {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read bookings from stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("failed to parse bookings JSON")
}
