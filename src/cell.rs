use crate::{CellState, rule};

/// A single cell of a [`Universe`](crate::Universe)
///
/// A cell keeps two states: the `current` state, which is what neighbors see,
/// and the `next` state staged for the coming generation. The staged state only
/// becomes visible after [`Cell::commit`].
///
/// Neighbors are indices into the flat population the cell lives in, so a cell
/// never owns (or even borrows) the cells around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    current: CellState,
    next: CellState,
    neighbors: Vec<usize>,
}

impl Cell {
    #[inline]
    pub fn new(state: CellState) -> Self {
        Self {
            current: state,
            next: state,
            neighbors: Vec::new(),
        }
    }

    #[inline]
    pub fn dead() -> Self {
        Self::new(CellState::Dead)
    }

    #[inline]
    pub fn alive() -> Self {
        Self::new(CellState::Alive)
    }

    /// Appends a neighbor by its index in the owning population
    ///
    /// No deduplication happens here; the owner must not add the same index
    /// twice or the cell's own index.
    #[inline]
    pub fn add_neighbor(&mut self, index: usize) {
        self.neighbors.push(index);
    }

    #[inline]
    pub(crate) fn clear_neighbors(&mut self) {
        self.neighbors.clear();
    }

    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.current
    }

    /// The state staged for the next generation
    #[inline]
    pub fn next_state(&self) -> CellState {
        self.next
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.current.is_alive()
    }

    /// Counts neighbors whose *current* state is alive
    ///
    /// `population` must be the same population the neighbor indices were wired
    /// against. Staged states are never looked at.
    pub fn count_live_neighbors(&self, population: &[Cell]) -> usize {
        self.neighbors
            .iter()
            .filter(|&&i| population[i].is_alive())
            .count()
    }

    /// Applies the Game of Life rule against the neighbors' current states
    ///
    /// This only reads; the result is staged with [`Cell::set_next_state`].
    #[inline]
    pub fn compute_next_state(&self, population: &[Cell]) -> CellState {
        rule::transition(self.current, self.count_live_neighbors(population))
    }

    #[inline]
    pub fn set_next_state(&mut self, next: CellState) {
        self.next = next;
    }

    /// Makes the staged state the current one
    #[inline]
    pub fn commit(&mut self) {
        self.current = self.next;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::dead()
    }
}

impl From<CellState> for Cell {
    #[inline]
    fn from(state: CellState) -> Self {
        Self::new(state)
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        Self::new(alive.into())
    }
}
