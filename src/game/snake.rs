use super::direction::Direction;
use super::grid::Cell;
use std::collections::{HashSet, VecDeque};

/// Snake state.
///
/// The head is at the front of `cells`, the tail at the back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// Every cell the snake occupies, head first
    pub(super) cells: VecDeque<Cell>,

    /// The direction most recently applied to the snake (the committed
    /// direction)
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake of `len` cells with its head at `head`, facing in
    /// `direction`, with its body trailing out behind it.  Body cells are
    /// not clipped to the grid.
    pub(super) fn new(head: Cell, direction: Direction, len: usize) -> Snake {
        let trail = direction.reverse();
        let cells = std::iter::successors(Some(head), |&c| Some(unclamped_step(c, trail)))
            .take(len.max(1))
            .collect();
        Snake { cells, direction }
    }

    /// The snake is never empty: `new()` always makes at least one cell, and
    /// the engine only calls `pop_tail()` right after `push_head()`.
    pub(super) fn head(&self) -> Cell {
        debug_assert!(!self.cells.is_empty(), "snake has no cells");
        self.cells.front().copied().unwrap_or(Cell::new(0, 0))
    }

    pub(super) fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub(super) fn occupied(&self) -> HashSet<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Apply a requested direction.  Reversals are ignored.  Returns `true`
    /// if the committed direction changed.
    pub(super) fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction || direction.is_reverse_of(self.direction) {
            false
        } else {
            self.direction = direction;
            true
        }
    }

    pub(super) fn push_head(&mut self, cell: Cell) {
        self.cells.push_front(cell);
    }

    pub(super) fn pop_tail(&mut self) {
        let _ = self.cells.pop_back();
    }
}

fn unclamped_step(cell: Cell, direction: Direction) -> Cell {
    let Cell { x, y } = cell;
    match direction {
        Direction::Up => Cell::new(x, y.saturating_sub(1)),
        Direction::Down => Cell::new(x, y.saturating_add(1)),
        Direction::Left => Cell::new(x.saturating_sub(1), y),
        Direction::Right => Cell::new(x.saturating_add(1), y),
    }
}
