//! Cell indexing and neighbor lookup for rectangular grids
//!
//! Cells are addressed by a dense row-major index. A periodic grid wraps at
//! every edge so each cell has exactly four neighbors; a bounded grid has no
//! neighbors beyond its edges.

use crate::spatial::direction::Direction;

/// Dimensions and edge behavior of a rectangular cell grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridTopology {
    width: usize,
    height: usize,
    periodic: bool,
}

impl GridTopology {
    /// Create a topology of `width` by `height` cells
    pub const fn new(width: usize, height: usize, periodic: bool) -> Self {
        Self {
            width,
            height,
            periodic,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the grid wraps at its edges
    pub const fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major index of `(x, y)`
    pub const fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Coordinates `(x, y)` of a cell index
    pub const fn coordinates(&self, cell: usize) -> (usize, usize) {
        (cell % self.width, cell / self.width)
    }

    /// Index of the cell adjacent to `cell` in `direction`
    ///
    /// Returns `None` when the neighbor would fall outside a bounded grid.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.coordinates(cell);
        let (dx, dy) = direction.offset();
        let nx = Self::shift(x, dx, self.width, self.periodic)?;
        let ny = Self::shift(y, dy, self.height, self.periodic)?;
        Some(self.index_of(nx, ny))
    }

    fn shift(value: usize, delta: isize, extent: usize, periodic: bool) -> Option<usize> {
        if extent == 0 {
            return None;
        }
        let shifted = value as isize + delta;
        if periodic {
            Some(shifted.rem_euclid(extent as isize) as usize)
        } else if shifted >= 0 && (shifted as usize) < extent {
            Some(shifted as usize)
        } else {
            None
        }
    }
}
