//! Key-collection planning entry point.
//!
//! This module wires the three stages of the planner together:
//!
//! 1. [`index_nodes`](crate::nodes::index_nodes) - enumerate agent starts and
//!    keys as graph nodes
//! 2. [`build_key_graph`](crate::reachability::build_key_graph) - reduce the
//!    grid to dense node-to-key distance and requirement tables
//! 3. [`solve`](crate::search::solve) - Dijkstra over (positions, keys) states
//!
//! Data flows strictly forward through the stages; no stage re-enters an
//! earlier one. Consumers should call [`plan_collection`] instead of running
//! the stages by hand.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::nodes::index_nodes;
use crate::reachability::build_key_graph;
use crate::search::{solve, SearchLimits, SearchOutcome};

/// Summary of one planning run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CollectionPlan {
    /// Agents found in the grid.
    pub robots: usize,
    /// Distinct keys found in the grid.
    pub keys: usize,
    /// How the search ended, including the step total when solved.
    pub outcome: SearchOutcome,
    /// States the search expanded before ending.
    pub states_expanded: u64,
}

impl CollectionPlan {
    /// Minimal total step count, when the vault was solved.
    pub fn steps(&self) -> Option<u32> {
        match self.outcome {
            SearchOutcome::Solved { steps } => Some(steps),
            SearchOutcome::NoSolution | SearchOutcome::BudgetExhausted => None,
        }
    }

    /// True when the search proved no plan exists.
    pub fn is_unsolvable(&self) -> bool {
        self.outcome == SearchOutcome::NoSolution
    }
}

/// Compute the minimal total number of steps for the agents in `grid` to
/// collect every key.
///
/// Malformed grids (no agent start, duplicate key letters, more keys than a
/// [`KeySet`](crate::KeySet) holds) surface as `Err` before any search work
/// happens. A vault with no plan is not an error: it comes back as an `Ok`
/// plan whose outcome is [`SearchOutcome::NoSolution`], and a search that hit
/// the `limits` ceiling as [`SearchOutcome::BudgetExhausted`].
pub fn plan_collection(grid: &Grid, limits: &SearchLimits) -> Result<CollectionPlan> {
    let nodes = index_nodes(grid)?;
    debug!(
        robots = nodes.robot_count(),
        keys = nodes.key_count(),
        width = grid.width(),
        height = grid.height(),
        "planning key collection"
    );

    let graph = build_key_graph(grid, &nodes);
    let report = solve(&graph, limits);

    let plan = CollectionPlan {
        robots: nodes.robot_count(),
        keys: nodes.key_count(),
        outcome: report.outcome,
        states_expanded: report.states_expanded,
    };

    debug!(
        robots = plan.robots,
        keys = plan.keys,
        states_expanded = plan.states_expanded,
        outcome = ?plan.outcome,
        "planned key collection"
    );

    Ok(plan)
}
