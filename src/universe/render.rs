use super::Universe;
use crate::error::Result;
use std::fmt::{self, Write};

impl Universe {
    /// Textual rendering of the grid, one marker per cell and one line per row
    ///
    /// See [`CellState::ALIVE_MARKER`](crate::CellState::ALIVE_MARKER) and
    /// [`CellState::DEAD_MARKER`](crate::CellState::DEAD_MARKER).
    pub fn render(&self) -> Result<String> {
        self.ensure_seeded()?;
        Ok(self.to_string())
    }
}

impl fmt::Display for Universe {
    /// Writes nothing for an unseeded universe
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_seeded() {
            return Ok(());
        }
        for (i, row) in self.cells.chunks(self.columns).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.state().marker())?;
            }
        }
        Ok(())
    }
}
