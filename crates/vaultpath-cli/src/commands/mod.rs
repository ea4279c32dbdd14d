// Module exports for CLI subcommands.
//
// Each module handles one subcommand, keeping main.rs focused on parsing
// and dispatch.

pub mod occupancy;
pub mod solve;
