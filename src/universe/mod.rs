mod expand;
mod render;

pub use self::expand::Growth;
use crate::error::{GridDefect, Result, UniverseError};
use crate::{Cell, CellState};
use log::{debug, trace};
use rand::Rng;
use rayon::prelude::*;

/// Grid rows used when no size is given
pub const DEFAULT_ROWS: usize = 10;
/// Grid columns used when no size is given
pub const DEFAULT_COLUMNS: usize = 10;

/// A rectangular grid of [`Cell`]s advanced in lockstep
///
/// Cells are stored row-major in a single buffer, and each cell refers to its
/// neighbors by index into that buffer. A universe with no cells is unseeded;
/// every operation other than seeding fails with
/// [`UniverseError::EmptyUniverse`] until it is seeded.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    cells: Vec<Cell>,
    columns: usize,
    expand: bool,
}

impl Universe {
    /// Creates an unseeded universe that never expands
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unseeded universe with the given expansion policy
    #[inline]
    pub fn with_expansion(expand: bool) -> Self {
        Self {
            expand,
            ..Self::default()
        }
    }

    /// Creates a `rows`x`columns` universe filled at random from the thread rng
    pub fn random(rows: usize, columns: usize, expand: bool) -> Result<Self> {
        let mut universe = Self::with_expansion(expand);
        universe.auto_fill(rows, columns, &mut rand::rng())?;
        Ok(universe)
    }

    #[inline]
    pub fn expands(&self) -> bool {
        self.expand
    }

    #[inline]
    pub fn set_expand(&mut self, expand: bool) {
        self.expand = expand;
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Seeds the universe with a grid where every cell is a fair coin flip
    pub fn auto_fill<R: Rng + ?Sized>(
        &mut self,
        rows: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<()> {
        let population: Vec<Vec<CellState>> = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| CellState::from(rng.random_bool(0.5)))
                    .collect()
            })
            .collect();
        self.seed(population)
    }

    /// Replaces the whole population and wires every cell to its neighbors
    ///
    /// The population must be non-empty and rectangular. On error the
    /// previous population is left untouched.
    pub fn seed<T: Into<Cell>>(&mut self, population: Vec<Vec<T>>) -> Result<()> {
        let columns = Self::validate(&population)?;
        let rows = population.len();

        self.cells = population
            .into_iter()
            .flatten()
            .map(|cell| {
                let mut cell: Cell = cell.into();
                // anything staged before seeding is meaningless here
                cell.set_next_state(cell.state());
                cell
            })
            .collect();
        self.columns = columns;
        self.wire_neighbors();

        debug!(
            "seeded {}x{} universe with {} alive",
            rows,
            columns,
            self.live_cells()
        );
        Ok(())
    }

    /// Returns the column count of a non-empty rectangular population
    fn validate<T>(population: &[Vec<T>]) -> Result<usize> {
        let columns = population.first().map(Vec::len).unwrap_or_default();
        if columns == 0 {
            return Err(GridDefect::Empty.into());
        }
        if let Some((row, found)) = population
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(GridDefect::Ragged {
                row,
                expected: columns,
                found,
            }
            .into());
        }
        Ok(columns)
    }

    /// Rebuilds every neighbor list from grid positions (Moore neighborhood)
    fn wire_neighbors(&mut self) {
        let columns = self.columns;
        let rows = self.cells.len() / columns;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let (row, column) = (index / columns, index % columns);
            cell.clear_neighbors();
            for r in row.saturating_sub(1)..=(row + 1).min(rows - 1) {
                for c in column.saturating_sub(1)..=(column + 1).min(columns - 1) {
                    if (r, c) != (row, column) {
                        cell.add_neighbor(r * columns + c);
                    }
                }
            }
        }
    }

    #[inline]
    fn ensure_seeded(&self) -> Result<()> {
        if self.is_seeded() {
            Ok(())
        } else {
            Err(UniverseError::EmptyUniverse)
        }
    }

    /// (rows, columns) without checking that the universe is seeded
    #[inline]
    fn shape(&self) -> (usize, usize) {
        match self.columns {
            0 => (0, 0),
            columns => (self.cells.len() / columns, columns),
        }
    }

    /// Returns `(rows, columns)`
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        self.ensure_seeded()?;
        Ok(self.shape())
    }

    /// The cell at `(row, column)`, if the universe is seeded and it is in bounds
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        let (rows, columns) = self.shape();
        if row < rows && column < columns {
            self.cells.get(row * columns + column)
        } else {
            None
        }
    }

    /// Iterates the population one row at a time
    pub fn rows(&self) -> Result<impl Iterator<Item = &[Cell]>> {
        self.ensure_seeded()?;
        Ok(self.cells.chunks(self.columns))
    }

    #[inline]
    fn live_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn alive_count(&self) -> Result<usize> {
        self.ensure_seeded()?;
        Ok(self.live_cells())
    }

    /// Moves every cell to the next generation
    ///
    /// All next states are computed from the current generation before any
    /// of them is committed, then the grid grows if expansion is enabled.
    pub fn advance_generation(&mut self) -> Result<()> {
        self.ensure_seeded()?;

        for index in 0..self.cells.len() {
            let next = self.cells[index].compute_next_state(&self.cells);
            self.cells[index].set_next_state(next);
        }
        for cell in &mut self.cells {
            cell.commit();
        }

        self.finish_generation();
        Ok(())
    }

    /// Same as [`Universe::advance_generation`], with the compute phase spread
    /// over the rayon thread pool
    pub fn advance_generation_parallel(&mut self) -> Result<()> {
        self.ensure_seeded()?;

        let population = &self.cells;
        let next: Vec<CellState> = population
            .par_iter()
            .map(|cell| cell.compute_next_state(population))
            .collect();

        // every next state exists at this point, so committing can't be observed early
        self.cells
            .par_iter_mut()
            .zip(next)
            .for_each(|(cell, state)| {
                cell.set_next_state(state);
                cell.commit();
            });

        self.finish_generation();
        Ok(())
    }

    /// Advances `count` generations, stopping at the first error
    pub fn advance_generations(&mut self, count: usize) -> Result<()> {
        for _ in 0..count {
            self.advance_generation()?;
        }
        Ok(())
    }

    fn finish_generation(&mut self) {
        if self.expand {
            self.expand_edges();
        }
        trace!("generation advanced, {} alive", self.live_cells());
    }
}

impl PartialEq for Universe {
    /// Two universes are equal when both are seeded, have the same dimensions
    /// and agree on which cells are alive. Unseeded universes equal nothing.
    fn eq(&self, other: &Self) -> bool {
        self.is_seeded()
            && other.is_seeded()
            && self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(a, b)| a.is_alive() == b.is_alive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::parse_rows;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn universe(rows: &[&str]) -> Universe {
        let mut universe = Universe::new();
        universe.seed(parse_rows(rows)).expect("valid grid");
        universe
    }

    fn advanced(mut universe: Universe, generations: usize) -> Universe {
        universe.advance_generations(generations).expect("seeded");
        universe
    }

    #[test]
    fn unseeded_universe_rejects_queries() {
        let mut universe = Universe::new();

        assert!(!universe.is_seeded());
        assert_eq!(universe.dimensions(), Err(UniverseError::EmptyUniverse));
        assert_eq!(universe.alive_count(), Err(UniverseError::EmptyUniverse));
        assert_eq!(universe.advance_generation(), Err(UniverseError::EmptyUniverse));
        assert_eq!(
            universe.advance_generation_parallel(),
            Err(UniverseError::EmptyUniverse)
        );
        assert!(universe.rows().is_err());
        assert!(universe.cell(0, 0).is_none());
    }

    #[test]
    fn seed_rejects_empty_grids() {
        let mut universe = Universe::new();

        let no_rows: Vec<Vec<bool>> = Vec::new();
        assert_eq!(
            universe.seed(no_rows),
            Err(UniverseError::InvalidGrid(GridDefect::Empty))
        );
        assert_eq!(
            universe.seed(vec![Vec::<bool>::new(), Vec::new()]),
            Err(UniverseError::InvalidGrid(GridDefect::Empty))
        );
        assert!(!universe.is_seeded());
    }

    #[test]
    fn seed_rejects_ragged_grids() {
        let mut universe = universe(&["XX", "XX"]);
        let err = universe
            .seed(vec![vec![true, false], vec![true, false], vec![true]])
            .unwrap_err();

        assert_eq!(
            err,
            UniverseError::InvalidGrid(GridDefect::Ragged {
                row: 2,
                expected: 2,
                found: 1,
            })
        );
        // the previous population survives a failed seed
        assert_eq!(universe.dimensions(), Ok((2, 2)));
    }

    #[test]
    fn neighbors_follow_the_moore_neighborhood() {
        let universe = universe(&["---", "---", "---"]);
        let count = |r, c| universe.cell(r, c).unwrap().neighbors().len();

        assert_eq!(count(0, 0), 3);
        assert_eq!(count(0, 1), 5);
        assert_eq!(count(1, 1), 8);
        assert_eq!(count(2, 2), 3);

        let mut center = universe.cell(1, 1).unwrap().neighbors().to_vec();
        center.sort();
        assert_eq!(center, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let universe = universe(&["X"]);

        assert!(universe.cell(0, 0).unwrap().neighbors().is_empty());
        assert_eq!(advanced(universe, 1).alive_count(), Ok(0));
    }

    #[test]
    fn reseeding_replaces_wiring() {
        let mut universe = universe(&["---", "---", "---"]);
        universe.seed(parse_rows(&["--", "--"])).unwrap();

        assert_eq!(universe.dimensions(), Ok((2, 2)));
        for r in 0..2 {
            for c in 0..2 {
                assert_eq!(universe.cell(r, c).unwrap().neighbors().len(), 3);
            }
        }
    }

    #[test]
    fn block_is_a_still_life() {
        let block = universe(&["----", "-XX-", "-XX-", "----"]);

        assert_eq!(advanced(block.clone(), 1), block);
    }

    #[test]
    fn packed_block_is_a_still_life() {
        let block = universe(&["XX", "XX"]);

        assert_eq!(advanced(block.clone(), 1), block);
    }

    #[test]
    fn boat_is_a_still_life() {
        let boat = universe(&["XX-", "X-X", "-X-"]);

        assert_eq!(advanced(boat.clone(), 1), boat);
    }

    #[test]
    fn blinker_has_period_two() {
        let blinker = universe(&["-X-", "-X-", "-X-"]);

        let once = advanced(blinker.clone(), 1);
        assert_ne!(once, blinker);
        assert_eq!(once.render(), Ok("---\nXXX\n---".to_string()));
        assert_eq!(advanced(once, 1), blinker);
    }

    #[test]
    fn toad_has_period_two() {
        let toad = universe(&["----", "-XXX", "XXX-", "----"]);

        let once = advanced(toad.clone(), 1);
        assert_eq!(once.render(), Ok("--X-\nX--X\nX--X\n-X--".to_string()));
        assert_eq!(advanced(once, 1), toad);
    }

    #[test]
    fn parallel_matches_serial() {
        let mut serial = Universe::new();
        serial
            .auto_fill(24, 17, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let mut parallel = serial.clone();

        for _ in 0..10 {
            serial.advance_generation().unwrap();
            parallel.advance_generation_parallel().unwrap();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn auto_fill_is_reproducible_with_a_seeded_rng() {
        let mut a = Universe::new();
        let mut b = Universe::new();
        a.auto_fill(6, 9, &mut StdRng::seed_from_u64(42)).unwrap();
        b.auto_fill(6, 9, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a.dimensions(), Ok((6, 9)));
        assert_eq!(a, b);
    }

    #[test]
    fn auto_fill_rejects_zero_sizes() {
        let mut universe = Universe::new();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(universe.auto_fill(0, 4, &mut rng).is_err());
        assert!(universe.auto_fill(4, 0, &mut rng).is_err());
    }

    #[test]
    fn random_universe_has_requested_shape() {
        let universe = Universe::random(DEFAULT_ROWS, DEFAULT_COLUMNS, true).unwrap();

        assert!(universe.expands());
        assert_eq!(universe.dimensions(), Ok((DEFAULT_ROWS, DEFAULT_COLUMNS)));
    }

    #[test]
    fn equality_requires_matching_dimensions() {
        let wide = universe(&["---", "---"]);
        let narrow = universe(&["--", "--"]);
        let tall = universe(&["--", "--", "--"]);

        assert_ne!(wide, narrow);
        assert_ne!(narrow, wide);
        assert_ne!(narrow, tall);
        assert_ne!(Universe::new(), Universe::new());
        assert_ne!(Universe::new(), narrow);
    }

    #[test]
    fn equality_ignores_expansion_policy() {
        let mut a = universe(&["-X", "X-"]);
        let b = a.clone();
        a.set_expand(true);

        assert_eq!(a, b);
    }

    fn grid_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (1..8usize, 1..8usize).prop_flat_map(|(rows, columns)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), columns), rows)
        })
    }

    proptest! {
        #[test]
        fn dimensions_are_stable_without_expansion(grid in grid_strategy(), gens in 0..6usize) {
            let mut universe = Universe::new();
            universe.seed(grid).unwrap();
            let before = universe.dimensions().unwrap();

            universe.advance_generations(gens).unwrap();
            prop_assert_eq!(universe.dimensions().unwrap(), before);
        }

        #[test]
        fn equality_is_reflexive_and_symmetric(a in grid_strategy(), b in grid_strategy()) {
            let mut ua = Universe::new();
            let mut ub = Universe::new();
            ua.seed(a.clone()).unwrap();
            ub.seed(b.clone()).unwrap();

            prop_assert!(ua == ua.clone());
            prop_assert_eq!(ua == ub, ub == ua);
            prop_assert_eq!(ua == ub, a == b);
        }
    }
}
