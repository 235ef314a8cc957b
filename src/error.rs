//! Error types for the simulation engine.

use thiserror::Error;

/// Why a population was rejected by [`Universe::seed`](crate::Universe::seed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridDefect {
    /// The population has no rows, or its rows have no cells.
    #[error("population has no cells")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Errors returned by [`Universe`](crate::Universe) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// The population passed to `seed` is empty or not rectangular.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridDefect),

    /// The universe was queried or advanced before it was ever seeded.
    #[error("universe has not been seeded")]
    EmptyUniverse,
}

/// Result type for universe operations.
pub type Result<T> = std::result::Result<T, UniverseError>;
