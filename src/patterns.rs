use crate::CellState;

/// A named seed drawn with [`CellState`] markers, one string per row
pub struct Pattern {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

impl Pattern {
    pub fn grid(&self) -> Vec<Vec<CellState>> {
        parse_rows(self.rows)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        rows: &["----", "-XX-", "-XX-", "----"],
    },
    Pattern {
        name: "Boat",
        rows: &["XX-", "X-X", "-X-"],
    },
    Pattern {
        name: "Blinker",
        rows: &["-X-", "-X-", "-X-"],
    },
    Pattern {
        name: "Toad",
        rows: &["----", "-XXX", "XXX-", "----"],
    },
    Pattern {
        name: "Beacon",
        rows: &["XX--", "XX--", "--XX", "--XX"],
    },
    Pattern {
        name: "Glider",
        rows: &["-X---", "--X--", "XXX--", "-----", "-----"],
    },
];

/// Looks up a built-in pattern by name, ignoring case
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Turns marker rows into a grid; anything but the alive marker is dead
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Vec<Vec<CellState>> {
    rows.iter()
        .map(|row| {
            row.as_ref()
                .chars()
                .map(|c| CellState::from_marker(c).unwrap_or_default())
                .collect()
        })
        .collect()
}
