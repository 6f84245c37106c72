use super::direction::Direction;
use super::food::{FoodPlacer, RandomFoodPlacer};
use super::grid::{Bounds, Cell};
use super::snake::Snake;
use super::{GameEvent, GamePhase, Snapshot, TickOutcome};
use crate::consts;

/// The authoritative state of a single game and its one-tick transition.
///
/// A fresh engine is built for every game; nothing carries over between
/// games except the high score the caller passes in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SimulationEngine<P = RandomFoodPlacer> {
    placer: P,
    bounds: Bounds,
    snake: Snake,
    food: Cell,
    score: u32,
    high_score: u32,
    phase: GamePhase,
}

impl<P: FoodPlacer> SimulationEngine<P> {
    /// Lay out a new board and leave it in [`GamePhase::Idle`], waiting for
    /// [`start()`][SimulationEngine::start]
    pub(crate) fn new(bounds: Bounds, high_score: u32, mut placer: P) -> Self {
        let snake = Snake::new(bounds.center(), Direction::Up, consts::INITIAL_SNAKE_LENGTH);
        let food = placer.place(bounds, &snake.occupied());
        SimulationEngine {
            placer,
            bounds,
            snake,
            food,
            score: 0,
            high_score,
            phase: GamePhase::Idle,
        }
    }

    /// Lay out a new board and start play immediately
    pub(crate) fn initialize(bounds: Bounds, high_score: u32, placer: P) -> Self {
        let mut engine = SimulationEngine::new(bounds, high_score, placer);
        engine.start();
        engine
    }

    /// Advance the game by one tick, first applying `requested` as the new
    /// direction of travel if it is legal.  Does nothing unless the game is
    /// running.
    pub(crate) fn advance(&mut self, requested: Option<Direction>) -> TickOutcome {
        let mut events = Vec::new();
        if self.phase != GamePhase::Running {
            return TickOutcome {
                phase: self.phase,
                events,
            };
        }
        if requested.is_some_and(|d| self.snake.turn(d)) {
            events.push(GameEvent::DirectionChanged);
        }
        let new_head = self
            .snake
            .direction
            .step(self.snake.head(), self.bounds)
            .filter(|&c| !self.snake.contains(c));
        let Some(new_head) = new_head else {
            log::debug!(
                "Snake crashed heading {:?} from {:?}",
                self.snake.direction,
                self.snake.head()
            );
            self.phase = GamePhase::Over;
            events.push(GameEvent::GameOver {
                final_score: self.score,
            });
            return TickOutcome {
                phase: self.phase,
                events,
            };
        };
        self.snake.push_head(new_head);
        if new_head == self.food {
            self.score += consts::SCORE_PER_FOOD;
            events.push(GameEvent::FoodEaten {
                cell: new_head,
                score: self.score,
            });
            if self.score > self.high_score {
                self.high_score = self.score;
                events.push(GameEvent::NewHighScore {
                    value: self.high_score,
                });
            }
            self.food = self.placer.place(self.bounds, &self.snake.occupied());
        } else {
            self.snake.pop_tail();
        }
        TickOutcome {
            phase: self.phase,
            events,
        }
    }
}

impl<P> SimulationEngine<P> {
    /// Idle → Running.  No-op in any other phase.
    pub(crate) fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    /// Running → Paused.  No-op in any other phase.
    pub(crate) fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
        }
    }

    /// Paused → Running.  No-op in any other phase.
    pub(crate) fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
        }
    }

    pub(crate) fn phase(&self) -> GamePhase {
        self.phase
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn current_state(&self) -> Snapshot {
        Snapshot {
            bounds: self.bounds,
            snake: self.snake.cells.iter().copied().collect(),
            direction: self.snake.direction,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            phase: self.phase,
        }
    }
}
