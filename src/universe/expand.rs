use super::Universe;
use crate::Cell;
use log::debug;
use std::iter;

/// Which edges of the grid grew after a generation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Growth {
    #[inline]
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

impl Universe {
    /// Finds the edges that currently hold a live cell
    fn edges_alive(&self) -> Growth {
        let columns = self.columns;
        let mut rows = self.cells.chunks(columns);
        let alive = |row: &[Cell]| row.iter().any(Cell::is_alive);

        Growth {
            top: rows.next().is_some_and(alive),
            bottom: rows.next_back().is_some_and(alive),
            left: self.cells.iter().step_by(columns).any(Cell::is_alive),
            right: self
                .cells
                .iter()
                .skip(columns - 1)
                .step_by(columns)
                .any(Cell::is_alive),
        }
    }

    /// Adds a dead row or column on every edge that holds a live cell
    ///
    /// Existing cells keep their states and shift with the new origin; every
    /// inserted position gets its own dead cell. The whole grid is re-wired
    /// afterwards since indices move.
    pub(super) fn expand_edges(&mut self) -> Growth {
        let mut growth = self.edges_alive();
        let (rows, columns) = self.shape();
        if rows == 1 {
            // a single row is both the first and the last
            growth.bottom |= growth.top;
        }
        if !growth.any() {
            return growth;
        }

        let new_columns = columns + usize::from(growth.left) + usize::from(growth.right);
        let new_rows = rows + usize::from(growth.top) + usize::from(growth.bottom);
        let dead_row = || iter::repeat_with(Cell::dead).take(new_columns);

        let mut cells = Vec::with_capacity(new_rows * new_columns);
        if growth.top {
            cells.extend(dead_row());
        }
        for row in self.cells.chunks(columns) {
            if growth.left {
                cells.push(Cell::dead());
            }
            cells.extend(row.iter().map(|cell| Cell::new(cell.state())));
            if growth.right {
                cells.push(Cell::dead());
            }
        }
        if growth.bottom {
            cells.extend(dead_row());
        }

        self.cells = cells;
        self.columns = new_columns;
        self.wire_neighbors();

        debug!(
            "expanded universe to {}x{} ({:?})",
            new_rows, new_columns, growth
        );
        growth
    }
}
