//! The immutable rectangular patrol map.

use warden_core::Vec2;

use crate::cell::Cell;
use crate::error::GridError;

/// An immutable rectangular grid of [`Cell`]s with a single guard start
/// position.
///
/// Constructed once via [`parse()`](PatrolMap::parse) and never mutated;
/// per-run obstacle injections live in the engine's overlay, not here.
/// Cells are stored row-major.
///
/// # Examples
///
/// ```
/// use warden_grid::PatrolMap;
/// use warden_core::Vec2;
///
/// let map = PatrolMap::parse([".#.", ".^.", "..."]).unwrap();
/// assert_eq!(map.rows(), 3);
/// assert_eq!(map.cols(), 3);
/// assert_eq!(map.start(), Vec2::new(1, 1));
/// assert!(map.is_obstacle(Vec2::new(0, 1)));
/// assert!(!map.in_bounds(Vec2::new(3, 0)));
/// ```
#[derive(Clone, Debug)]
pub struct PatrolMap {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
    start: Vec2,
}

impl PatrolMap {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Parse a map from text lines, top to bottom.
    ///
    /// Validates every grid invariant up front: at least one row, all rows
    /// the same length, every character in `{'.', '#', '^'}`, and exactly
    /// one `^`. A `^` in column 0 is a valid start like any other column.
    ///
    /// # Errors
    ///
    /// Returns the [`GridError`] variant matching the first violated
    /// invariant in row-major scan order.
    pub fn parse<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0usize;
        let mut start: Option<Vec2> = None;

        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            let expected = *cols.get_or_insert(width);
            if width != expected {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected,
                    found: width,
                });
            }
            for (j, c) in line.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or(GridError::UnknownCell {
                    row: i,
                    col: j,
                    found: c,
                })?;
                if cell == Cell::Start {
                    let pos = Vec2::new(i as i32, j as i32);
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart { first, second: pos });
                    }
                    start = Some(pos);
                }
                cells.push(cell);
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                axis: "rows",
                found: rows,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                axis: "cols",
                found: cols,
            });
        }
        let start = start.ok_or(GridError::MissingStart)?;

        Ok(Self {
            rows: rows as u32,
            cols: cols as u32,
            cells,
            start,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count (`rows × cols`).
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// The guard's starting cell: the position of the single `^` marker.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Whether `pos` lies inside the grid.
    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.i < self.rows as i32 && pos.j >= 0 && pos.j < self.cols as i32
    }

    /// The cell at `pos`, or `None` when out of bounds.
    pub fn cell(&self, pos: Vec2) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[self.index(pos)])
    }

    /// Whether `pos` is a static obstacle. Out-of-bounds positions are
    /// not obstacles; the engine checks bounds first and treats them as
    /// exits.
    pub fn is_obstacle(&self, pos: Vec2) -> bool {
        self.cell(pos).is_some_and(Cell::is_obstacle)
    }

    /// Row-major flat index. Caller must have bounds-checked `pos`.
    fn index(&self, pos: Vec2) -> usize {
        (pos.i as usize) * (self.cols as usize) + (pos.j as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_minimal_map() {
        let map = PatrolMap::parse(["^"]).unwrap();
        assert_eq!(map.rows(), 1);
        assert_eq!(map.cols(), 1);
        assert_eq!(map.start(), Vec2::new(0, 0));
        assert_eq!(map.cell(Vec2::new(0, 0)), Some(Cell::Start));
    }

    #[test]
    fn parse_records_obstacles() {
        let map = PatrolMap::parse(["#.", ".^"]).unwrap();
        assert!(map.is_obstacle(Vec2::new(0, 0)));
        assert!(!map.is_obstacle(Vec2::new(0, 1)));
        assert!(!map.is_obstacle(Vec2::new(1, 1)));
    }

    #[test]
    fn start_in_column_zero_is_valid() {
        // The reference implementation skipped markers at column 0; the
        // parser must not.
        let map = PatrolMap::parse(["...", "^..", "..."]).unwrap();
        assert_eq!(map.start(), Vec2::new(1, 0));
    }

    #[test]
    fn parse_empty_input_fails() {
        let lines: [&str; 0] = [];
        assert_eq!(PatrolMap::parse(lines).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn parse_zero_width_rows_fail() {
        assert_eq!(PatrolMap::parse(["", ""]).unwrap_err(), GridError::EmptyGrid);
    }

    #[test]
    fn parse_ragged_rows_fail() {
        let err = PatrolMap::parse(["...", "..", "..."]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_unknown_character_fails() {
        let err = PatrolMap::parse(["..", ".x"]).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownCell {
                row: 1,
                col: 1,
                found: 'x'
            }
        );
    }

    #[test]
    fn parse_missing_start_fails() {
        let err = PatrolMap::parse(["..", ".."]).unwrap_err();
        assert_eq!(err, GridError::MissingStart);
    }

    #[test]
    fn parse_duplicate_start_fails() {
        let err = PatrolMap::parse(["^.", ".^"]).unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicateStart {
                first: Vec2::new(0, 0),
                second: Vec2::new(1, 1)
            }
        );
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn bounds_checks() {
        let map = PatrolMap::parse(["^..", "..."]).unwrap();
        assert!(map.in_bounds(Vec2::new(0, 0)));
        assert!(map.in_bounds(Vec2::new(1, 2)));
        assert!(!map.in_bounds(Vec2::new(-1, 0)));
        assert!(!map.in_bounds(Vec2::new(0, -1)));
        assert!(!map.in_bounds(Vec2::new(2, 0)));
        assert!(!map.in_bounds(Vec2::new(0, 3)));
    }

    #[test]
    fn out_of_bounds_cell_is_none() {
        let map = PatrolMap::parse(["^."]).unwrap();
        assert_eq!(map.cell(Vec2::new(0, 2)), None);
        assert!(!map.is_obstacle(Vec2::new(0, 2)));
    }

    #[test]
    fn cell_count_is_rows_times_cols() {
        let map = PatrolMap::parse(["^....", ".....", "....."]).unwrap();
        assert_eq!(map.cell_count(), 15);
    }

    // ── Property tests ──────────────────────────────────────────

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parse_recovers_dimensions_and_start(
            rows in 1usize..12,
            cols in 1usize..12,
            start in any::<proptest::sample::Index>(),
            blocked in proptest::collection::vec(any::<bool>(), 144),
        ) {
            let start = start.index(rows * cols);
            let lines: Vec<String> = (0..rows)
                .map(|r| {
                    (0..cols)
                        .map(|c| {
                            let idx = r * cols + c;
                            if idx == start {
                                '^'
                            } else if blocked[idx] {
                                '#'
                            } else {
                                '.'
                            }
                        })
                        .collect()
                })
                .collect();
            let map = PatrolMap::parse(&lines).unwrap();
            prop_assert_eq!(map.rows() as usize, rows);
            prop_assert_eq!(map.cols() as usize, cols);
            prop_assert_eq!(
                map.start(),
                Vec2::new((start / cols) as i32, (start % cols) as i32)
            );
            // Every in-bounds cell answers; one past each edge does not.
            prop_assert!(map.cell(map.start()).is_some());
            prop_assert!(map.cell(Vec2::new(rows as i32, 0)).is_none());
            prop_assert!(map.cell(Vec2::new(0, cols as i32)).is_none());
        }
    }
}
