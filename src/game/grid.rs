/// A cell on the game grid.  `(0, 0)` is the top-left corner; `x` grows to
/// the right and `y` grows downwards.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

/// The dimensions of the grid.  Both dimensions are always at least 1.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    /// Create a new `Bounds`, bumping zero dimensions up to 1
    pub(crate) fn new(width: u16, height: u16) -> Bounds {
        Bounds {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// The number of cells on the grid
    pub(crate) fn cell_count(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// The cell at the center of the grid, rounding towards the top-left
    pub(crate) fn center(self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    /// Iterate over every cell in row-major order
    #[cfg(test)]
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}
