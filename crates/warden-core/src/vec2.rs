//! 2D integer vector used for both cell positions and movement offsets.

use std::fmt;
use std::ops::Add;

/// A 2D integer vector `(i, j)` in grid coordinates: `i` is the row axis
/// (positive points down the grid) and `j` is the column axis (positive
/// points right). The same type serves as an absolute cell position and
/// as a movement offset — addition combines the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    /// Row component.
    pub i: i32,
    /// Column component.
    pub j: i32,
}

impl Vec2 {
    /// Create a vector from row and column components.
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Rotate 90° clockwise: `(i, j) → (j, -i)`.
    ///
    /// Clockwise is with respect to grid coordinates (row axis pointing
    /// down), so up → right → down → left → up.
    pub const fn rotate_clockwise(self) -> Self {
        Self {
            i: self.j,
            j: -self.i,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
