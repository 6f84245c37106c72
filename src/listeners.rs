use crate::game::GameEvent;
use std::fmt;
use std::io::{self, Write};

/// A collaborator that reacts to what happens in the game (sound, logging,
/// display effects)
pub(crate) trait Listener: fmt::Debug {
    fn notify(&mut self, event: &GameEvent);
}

/// Fan-out to every registered [`Listener`]
#[derive(Debug, Default)]
pub(crate) struct Listeners(Vec<Box<dyn Listener>>);

impl Listeners {
    pub(crate) fn new() -> Self {
        Listeners::default()
    }

    pub(crate) fn push<L: Listener + 'static>(&mut self, listener: L) {
        self.0.push(Box::new(listener));
    }

    pub(crate) fn notify(&mut self, event: &GameEvent) {
        for listener in &mut self.0 {
            listener.notify(event);
        }
    }
}

/// Writes game events to the log
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct EventLog;

impl Listener for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::DirectionChanged => log::trace!("Direction changed"),
            GameEvent::FoodEaten { cell, score } => {
                log::debug!("Ate food at ({}, {}); score is now {score}", cell.x, cell.y);
            }
            GameEvent::NewHighScore { value } => log::info!("New high score: {value}"),
            GameEvent::GameOver { final_score } => {
                log::info!("Game over with a score of {final_score}");
            }
            GameEvent::Tick(snapshot) => log::trace!(
                "Tick: head at {:?}, length {}, score {}",
                snapshot.head(),
                snapshot.snake.len(),
                snapshot.score
            ),
        }
    }
}

/// Rings the terminal bell when food is eaten or the snake crashes, and
/// optionally whenever the snake turns
#[derive(Debug)]
pub(crate) struct TerminalBell<W = io::Stdout> {
    out: W,
    on_turn: bool,
}

impl TerminalBell<io::Stdout> {
    pub(crate) fn new() -> Self {
        TerminalBell::with_writer(io::stdout())
    }
}

impl Default for TerminalBell<io::Stdout> {
    fn default() -> Self {
        TerminalBell::new()
    }
}

impl<W> TerminalBell<W> {
    pub(crate) fn with_writer(out: W) -> Self {
        TerminalBell {
            out,
            on_turn: false,
        }
    }

    /// Also ring on every committed change of direction
    pub(crate) fn with_turn_cue(mut self, on_turn: bool) -> Self {
        self.on_turn = on_turn;
        self
    }
}

impl<W: Write + fmt::Debug> TerminalBell<W> {
    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write + fmt::Debug> Listener for TerminalBell<W> {
    fn notify(&mut self, event: &GameEvent) {
        let ring = match event {
            GameEvent::FoodEaten { .. } | GameEvent::GameOver { .. } => true,
            GameEvent::DirectionChanged => self.on_turn,
            GameEvent::NewHighScore { .. } | GameEvent::Tick(_) => false,
        };
        if ring {
            if let Err(e) = self.ring() {
                log::warn!("Failed to ring terminal bell: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

    impl Listener for Recorder {
        fn notify(&mut self, event: &GameEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn fan_out_reaches_everyone() {
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        listeners.push(Recorder(Rc::clone(&first)));
        listeners.push(EventLog);
        listeners.push(Recorder(Rc::clone(&second)));
        listeners.notify(&GameEvent::DirectionChanged);
        listeners.notify(&GameEvent::NewHighScore { value: 20 });
        let expected = vec![
            GameEvent::DirectionChanged,
            GameEvent::NewHighScore { value: 20 },
        ];
        assert_eq!(*first.borrow(), expected);
        assert_eq!(*second.borrow(), expected);
    }

    #[test]
    fn bell_rings_on_food_and_crash_only() {
        let mut bell = TerminalBell::with_writer(Vec::new());
        bell.notify(&GameEvent::DirectionChanged);
        bell.notify(&GameEvent::NewHighScore { value: 10 });
        assert!(bell.out.is_empty());
        bell.notify(&GameEvent::FoodEaten {
            cell: Cell::new(1, 2),
            score: 10,
        });
        assert_eq!(bell.out, b"\x07");
        bell.notify(&GameEvent::GameOver { final_score: 10 });
        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn turn_cue_rings_on_direction_change() {
        let mut bell = TerminalBell::with_writer(Vec::new()).with_turn_cue(true);
        bell.notify(&GameEvent::DirectionChanged);
        assert_eq!(bell.out, b"\x07");
        bell.notify(&GameEvent::NewHighScore { value: 10 });
        bell.notify(&GameEvent::DirectionChanged);
        assert_eq!(bell.out, b"\x07\x07");
        let mut quiet = TerminalBell::with_writer(Vec::new()).with_turn_cue(false);
        quiet.notify(&GameEvent::DirectionChanged);
        assert!(quiet.out.is_empty());
    }
}
