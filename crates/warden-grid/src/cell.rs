//! Cell alphabet of a patrol map.

/// Contents of a single map cell.
///
/// The text alphabet is `.` (open), `#` (static obstacle), and `^`
/// (guard start marker). The start cell is walkable; the parser records
/// its position separately and stores it as [`Cell::Start`] so the
/// original map can be reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Open floor the guard can occupy.
    Open,
    /// Static obstacle; the guard turns instead of entering.
    Obstacle,
    /// The guard's starting cell (walkable).
    Start,
}

impl Cell {
    /// Parse a single map character. Returns `None` for anything outside
    /// the `{'.', '#', '^'}` alphabet.
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Obstacle),
            '^' => Some(Cell::Start),
            _ => None,
        }
    }

    /// The text form of this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Obstacle => '#',
            Cell::Start => '^',
        }
    }

    /// Whether the guard turns instead of entering this cell.
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_round_trips() {
        for c in ['.', '#', '^'] {
            assert_eq!(Cell::from_char(c).unwrap().to_char(), c);
        }
    }

    #[test]
    fn rejects_unknown_characters() {
        assert_eq!(Cell::from_char('x'), None);
        assert_eq!(Cell::from_char(' '), None);
        assert_eq!(Cell::from_char('0'), None);
    }

    #[test]
    fn only_hash_blocks() {
        assert!(Cell::Obstacle.is_obstacle());
        assert!(!Cell::Open.is_obstacle());
        assert!(!Cell::Start.is_obstacle());
    }
}
