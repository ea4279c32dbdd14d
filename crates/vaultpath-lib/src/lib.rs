//! Vaultpath library entry points.
//!
//! This crate parses character grids describing vaults of walls, agents,
//! keys, and doors, reduces each grid to a small complete graph between
//! points of interest, and searches that graph for the minimal total number
//! of steps the agents need to collect every key. It also carries an
//! unrelated capacity-feasibility check for date-ranged bookings. Higher
//! level consumers (the CLI) should only depend on the functions exported
//! here instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod grid;
pub mod keyset;
pub mod nodes;
pub mod occupancy;
pub mod planner;
pub mod reachability;
pub mod search;

pub use error::{Error, Result};
pub use grid::{Cell, Grid, Position};
pub use keyset::{KeyId, KeySet, MAX_KEYS};
pub use nodes::{index_nodes, NodeIndex};
pub use occupancy::{fits_capacity, Booking};
pub use planner::{plan_collection, CollectionPlan};
pub use reachability::{build_key_graph, KeyGraph};
pub use search::{solve, SearchLimits, SearchOutcome, SearchReport};
