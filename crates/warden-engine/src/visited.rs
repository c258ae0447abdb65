//! Per-cell visited-heading history.
//!
//! One byte per cell, one bit per heading. Membership test and insert are
//! a single masked load/store, which is what makes cycle detection O(1)
//! per step and bounds every run at `4 × rows × cols` insertions.

use warden_core::{Heading, Vec2};

/// Set of (cell, heading) pairs seen during the current run.
#[derive(Clone, Debug)]
pub(crate) struct VisitedMask {
    cols: usize,
    bits: Vec<u8>,
}

impl VisitedMask {
    /// Create an empty mask for a `rows × cols` grid.
    pub(crate) fn new(rows: u32, cols: u32) -> Self {
        Self {
            cols: cols as usize,
            bits: vec![0; (rows as usize) * (cols as usize)],
        }
    }

    /// Remove every recorded pair.
    pub(crate) fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Insert `(pos, heading)`. Returns `true` if the pair was not
    /// already present. Caller must have bounds-checked `pos`.
    pub(crate) fn insert(&mut self, pos: Vec2, heading: Heading) -> bool {
        let idx = (pos.i as usize) * self.cols + (pos.j as usize);
        let bit = 1u8 << heading.index();
        let fresh = self.bits[idx] & bit == 0;
        self.bits[idx] |= bit;
        fresh
    }

    /// Number of cells with at least one recorded heading.
    pub(crate) fn count_visited_cells(&self) -> usize {
        self.bits.iter().filter(|&&b| b != 0).count()
    }

    /// Cells with at least one recorded heading, in row-major order.
    pub(crate) fn visited_cells(&self) -> Vec<Vec2> {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b != 0)
            .map(|(idx, _)| Vec2::new((idx / self.cols) as i32, (idx % self.cols) as i32))
            .collect()
    }
}
