use crate::consts;
use crate::game::Direction;

/// A single-slot mailbox for the player's most recent directional request.
///
/// Input events write here whenever they arrive; each tick reads it.  A newer
/// request replaces an unconsumed older one, and reading does not clear the
/// slot, so with no new input the snake keeps asking to go the same way.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct InputBuffer {
    intent: Option<Direction>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        InputBuffer::default()
    }

    pub(crate) fn set_intent(&mut self, direction: Direction) {
        self.intent = Some(direction);
    }

    /// Return the buffered intent for the coming tick.  `None` means no
    /// direction has been requested yet this game.
    pub(crate) fn consume_intent(&self) -> Option<Direction> {
        self.intent
    }

    pub(crate) fn clear(&mut self) {
        self.intent = None;
    }
}

/// A drag gesture in progress, tracked in terminal cell coordinates
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Swipe {
    start: Option<(u16, u16)>,
}

impl Swipe {
    pub(crate) fn begin(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finish the gesture at the given cell and return the direction it
    /// maps to, if any.  A `finish()` without a matching `begin()` is
    /// ignored.
    pub(crate) fn finish(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (start_col, start_row) = self.start.take()?;
        let dx = (i64::from(column) - i64::from(start_col))
            * i64::from(consts::SWIPE_UNITS_PER_COLUMN);
        let dy = (i64::from(row) - i64::from(start_row)) * i64::from(consts::SWIPE_UNITS_PER_ROW);
        swipe_direction(dx, dy)
    }
}

/// Map a completed gesture's displacement to a direction.  The axis with the
/// larger displacement wins, with ties going to the vertical axis, and the
/// winning displacement must exceed [`consts::SWIPE_THRESHOLD`].
pub(crate) fn swipe_direction(dx: i64, dy: i64) -> Option<Direction> {
    let threshold = i64::from(consts::SWIPE_THRESHOLD);
    if dx.abs() > dy.abs() {
        match dx {
            _ if dx.abs() <= threshold => None,
            1.. => Some(Direction::Right),
            _ => Some(Direction::Left),
        }
    } else {
        match dy {
            _ if dy.abs() <= threshold => None,
            1.. => Some(Direction::Down),
            _ => Some(Direction::Up),
        }
    }
}
