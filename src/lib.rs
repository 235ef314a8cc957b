//! Core library for Conway's Game of Life on a bounded, optionally growing grid.

pub mod cell;
pub mod error;
pub mod patterns;
pub mod rule;
pub mod state;
pub mod universe;

pub use cell::Cell;
pub use error::{GridDefect, UniverseError};
pub use state::CellState;
pub use universe::{Growth, Universe};
