//! Solve command handler for the key-collection planner.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use vaultpath_lib::{plan_collection, Grid, SearchLimits, SearchOutcome};

/// Arguments for the solve command.
#[derive(Debug, Clone)]
pub struct SolveArgs {
    /// Grid file to read; stdin when `None`.
    pub grid_file: Option<PathBuf>,
    /// Expansion ceiling for the search.
    pub max_expansions: Option<u64>,
    /// Output in JSON format instead of human-readable text.
    pub json: bool,
}

/// Exit codes for the solve command (script contract).
pub mod exit_codes {
    pub const SOLVED: i32 = 0;
    pub const NO_SOLUTION: i32 = 2;
    pub const BUDGET_EXHAUSTED: i32 = 3;
}

/// Handle the solve subcommand.
///
/// Plans the key collection for one grid and reports the outcome on stdout.
/// Malformed grids fail the command; an unsolvable or budget-capped search
/// is a reported outcome with its own exit code.
pub fn handle_solve(args: &SolveArgs) -> Result<()> {
    let grid = read_grid(args.grid_file.as_deref())?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        "loaded grid"
    );

    let limits = SearchLimits {
        max_expansions: args.max_expansions,
    };
    let plan = plan_collection(&grid, &limits).context("failed to plan key collection")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        match plan.outcome {
            SearchOutcome::Solved { steps } => println!("Minimal steps: {steps}"),
            SearchOutcome::NoSolution => println!("No solution found"),
            SearchOutcome::BudgetExhausted => println!(
                "Search budget exhausted after {} state expansions",
                plan.states_expanded
            ),
        }
    }

    let code = match plan.outcome {
        SearchOutcome::Solved { .. } => exit_codes::SOLVED,
        SearchOutcome::NoSolution => exit_codes::NO_SOLUTION,
        SearchOutcome::BudgetExhausted => exit_codes::BUDGET_EXHAUSTED,
    };
    if code != exit_codes::SOLVED {
        std::process::exit(code);
    }

    Ok(())
}

fn read_grid(path: Option<&Path>) -> Result<Grid> {
    match path {
        Some(path) => Grid::from_path(path)
            .with_context(|| format!("failed to read grid from {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read grid from stdin")?;
            text.parse().context("failed to parse grid from stdin")
        }
    }
}
