mod direction;
mod engine;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::engine::SimulationEngine;
#[cfg(test)]
pub(crate) use self::food::ScriptedPlacer;
pub(crate) use self::food::{FoodPlacer, RandomFoodPlacer};
pub(crate) use self::grid::{Bounds, Cell};

/// Where a game is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum GamePhase {
    /// The board is laid out but play hasn't started
    Idle,
    Running,
    Paused,
    /// The snake has crashed.  A finished game is never resumed; a restart
    /// builds a new engine.
    Over,
}

/// Something that happened during a tick, for collaborators (sound, display,
/// persistence) to react to
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum GameEvent {
    /// The snake's committed direction changed
    DirectionChanged,

    /// The snake ate the food at `cell`, bringing the score to `score`
    FoodEaten { cell: Cell, score: u32 },

    /// The score just beat the previous high score
    NewHighScore { value: u32 },

    /// The snake crashed
    GameOver { final_score: u32 },

    /// A tick finished; the payload is the resulting state
    Tick(Snapshot),
}

/// The result of a call to [`SimulationEngine::advance()`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TickOutcome {
    pub(crate) phase: GamePhase,
    pub(crate) events: Vec<GameEvent>,
}

/// A read-only copy of everything needed to draw the game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot {
    pub(crate) bounds: Bounds,

    /// The cells of the snake, head first
    pub(crate) snake: Vec<Cell>,

    /// The snake's committed direction
    pub(crate) direction: Direction,

    pub(crate) food: Cell,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    pub(crate) phase: GamePhase,
}

impl Snapshot {
    pub(crate) fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }
}
