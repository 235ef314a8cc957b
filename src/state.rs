use std::fmt;

/// The state of a single cell for one generation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Character used for alive cells in the textual rendering
    pub const ALIVE_MARKER: char = 'X';
    /// Character used for dead cells in the textual rendering
    pub const DEAD_MARKER: char = '-';

    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    #[inline]
    pub fn marker(self) -> char {
        match self {
            Self::Alive => Self::ALIVE_MARKER,
            Self::Dead => Self::DEAD_MARKER,
        }
    }

    /// Parses a rendering marker back into a state
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            Self::ALIVE_MARKER => Some(Self::Alive),
            Self::DEAD_MARKER => Some(Self::Dead),
            _ => None,
        }
    }
}

impl From<bool> for CellState {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}
