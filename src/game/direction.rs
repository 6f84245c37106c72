use super::grid::{Bounds, Cell};

/// A direction of travel on the grid.  As unit vectors: `Up` is `(0, -1)`,
/// `Down` is `(0, 1)`, `Left` is `(-1, 0)`, and `Right` is `(1, 0)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction, or `None` if
    /// that would leave `bounds`
    pub(crate) fn step(self, cell: Cell, bounds: Bounds) -> Option<Cell> {
        let Cell { mut x, mut y } = cell;
        match self {
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1).filter(|&y2| y2 < bounds.height)?,
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1).filter(|&x2| x2 < bounds.width)?,
        }
        Some(Cell { x, y }).filter(|&c| bounds.contains(c))
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_reverse_of(self, other: Direction) -> bool {
        self.reverse() == other
    }
}
