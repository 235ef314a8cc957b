use crate::CellState;
use std::sync::OnceLock;

/// The largest number of neighbors a cell can have (Moore neighborhood)
pub const MAX_NEIGHBORS: usize = 8;

/// One entry per (live neighbor count, current state) pair
const PERMUTATIONS: usize = (MAX_NEIGHBORS + 1) * 2;
type TransitionTable = [CellState; PERMUTATIONS];

#[inline]
fn table_index(current: CellState, live_neighbors: usize) -> usize {
    (live_neighbors << 1) | usize::from(current.is_alive())
}

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_transition_table`] once and storing the result
fn get_transition_table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(generate_transition_table)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by the live neighbor count shifted left by one, with
/// the lowest bit set when the cell itself is alive.
fn generate_transition_table() -> TransitionTable {
    let mut table = [CellState::Dead; PERMUTATIONS];
    for (i, entry) in table.iter_mut().enumerate() {
        let alive = i & 1 != 0;
        let neighbors = i >> 1;
        *entry = match (alive, neighbors) {
            (true, 2) | (_, 3) => CellState::Alive,
            _ => CellState::Dead,
        };
    }
    table
}

/// The state a cell moves to given its current state and live neighbor count
///
/// Counts above [`MAX_NEIGHBORS`] cannot occur on a grid and are treated as
/// overcrowding.
#[inline]
pub fn transition(current: CellState, live_neighbors: usize) -> CellState {
    get_transition_table()
        .get(table_index(current, live_neighbors))
        .copied()
        .unwrap_or(CellState::Dead)
}
