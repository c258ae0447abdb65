//! The four cardinal headings a guard can face.

use crate::vec2::Vec2;

/// One of the four unit directions reachable by repeated 90° clockwise
/// rotation from [`Heading::Up`].
///
/// The discriminant doubles as a dense `0..4` index, which the engine
/// uses as a bit position when packing per-cell visited-heading sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Heading {
    /// `(-1, 0)` — towards row 0.
    Up = 0,
    /// `(0, 1)` — towards higher columns.
    Right = 1,
    /// `(1, 0)` — towards higher rows.
    Down = 2,
    /// `(0, -1)` — towards column 0.
    Left = 3,
}

impl Heading {
    /// All four headings in clockwise order starting from [`Heading::Up`].
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

    /// The unit movement vector for this heading.
    pub const fn vector(self) -> Vec2 {
        match self {
            Heading::Up => Vec2::new(-1, 0),
            Heading::Right => Vec2::new(0, 1),
            Heading::Down => Vec2::new(1, 0),
            Heading::Left => Vec2::new(0, -1),
        }
    }

    /// The heading after a 90° clockwise turn.
    pub const fn rotate_clockwise(self) -> Heading {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Dense index in `0..4`, stable across runs.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The heading whose [`vector()`](Heading::vector) equals `v`, if any.
    pub fn from_vector(v: Vec2) -> Option<Heading> {
        Heading::ALL.into_iter().find(|h| h.vector() == v)
    }
}
