//! Square grid subdivision shared by the composite encoders.

use mosaic_types::{Rect, Transform};

/// Smallest `w` with `w * w >= n`, in integer arithmetic.
pub fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root == n { root } else { root + 1 }
}

/// `count` cells laid out row-major in a square region of side `side`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    count: usize,
    columns: usize,
    side: f64,
}

impl Grid {
    pub fn new(count: usize, side: f64) -> Self {
        Self {
            count,
            columns: ceil_sqrt(count),
            side,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Side of one cell. Zero for an empty grid.
    pub fn cell_side(&self) -> f64 {
        if self.columns == 0 {
            0.0
        } else {
            self.side / self.columns as f64
        }
    }

    /// Column and row of cell `index`.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// The slot of cell `index` in the parent's local coordinates.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let (col, row) = self.position(index);
        let cell = self.cell_side();
        Rect::square(col as f64 * cell, row as f64 * cell, cell)
    }

    /// Maps a child region of the parent's side onto cell `index`.
    pub fn cell_transform(&self, index: usize) -> Transform {
        let (col, row) = self.position(index);
        let cell = self.cell_side();
        Transform::new(col as f64 * cell, row as f64 * cell, cell / self.side)
    }
}
