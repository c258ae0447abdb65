//! Error types for patrol-map parsing.

use std::fmt;

use warden_core::Vec2;

/// Errors detected while parsing a patrol map from text lines.
///
/// All variants are structural: a map that parses successfully satisfies
/// every grid invariant (rectangular, known alphabet, exactly one start
/// marker), so later simulation code never re-validates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no lines.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row, which sets the grid width.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character outside the `{'.', '#', '^'}` alphabet.
    UnknownCell {
        /// Zero-based row of the offending character.
        row: usize,
        /// Zero-based column of the offending character.
        col: usize,
        /// The character that failed to parse.
        found: char,
    },
    /// No `^` start marker anywhere in the map.
    MissingStart,
    /// More than one `^` start marker.
    DuplicateStart {
        /// Position of the first marker, in row-major scan order.
        first: Vec2,
        /// Position of the second marker encountered.
        second: Vec2,
    },
    /// A dimension exceeds the `i32` coordinate range.
    DimensionTooLarge {
        /// Which axis overflowed: `"rows"` or `"cols"`.
        axis: &'static str,
        /// The offending dimension.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "map must have at least one row"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "row {row} has length {found}, expected {expected} (map must be rectangular)"
                )
            }
            Self::UnknownCell { row, col, found } => {
                write!(f, "unknown cell character {found:?} at row {row}, column {col}")
            }
            Self::MissingStart => write!(f, "no '^' start marker found in map"),
            Self::DuplicateStart { first, second } => {
                write!(f, "duplicate '^' start marker at {second}, first seen at {first}")
            }
            Self::DimensionTooLarge { axis, found } => {
                write!(f, "{axis} dimension {found} exceeds the i32 coordinate range")
            }
        }
    }
}

impl std::error::Error for GridError {}
