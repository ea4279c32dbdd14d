use thiserror::Error;

use crate::grid::Position;

/// Convenient result alias for the vaultpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every variant describes malformed input. Outcomes the planner is expected
/// to produce on well-formed grids, such as an unsolvable vault or an
/// exhausted search budget, are not errors; they are reported through
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the grid text contains no cells.
    #[error("grid is empty")]
    EmptyGrid,

    /// Raised when a row's width differs from the first row's.
    #[error("grid row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Raised when a character outside the cell alphabet appears in the grid.
    #[error("invalid cell {found:?} at {at}")]
    InvalidCell { at: Position, found: char },

    /// Raised when the grid contains no agent start marker.
    #[error("grid contains no agent start")]
    NoAgents,

    /// Raised when the same key letter appears at two positions.
    #[error("key {key:?} appears at both {first} and {second}")]
    DuplicateKey {
        key: char,
        first: Position,
        second: Position,
    },

    /// Raised when the grid holds more distinct keys than a
    /// [`KeySet`](crate::KeySet) can track.
    #[error("grid contains more than {limit} distinct keys")]
    TooManyKeys { limit: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
