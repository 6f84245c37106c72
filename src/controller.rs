use crate::clock::{GameClock, TickHandle};
use crate::game::{
    Bounds, Direction, FoodPlacer, GameEvent, GamePhase, SimulationEngine, Snapshot,
};
use crate::highscore::HighScoreStore;
use crate::input::InputBuffer;
use crate::listeners::Listeners;
use std::time::{Duration, Instant};

/// Ties together the engine, the input buffer, the clock, and the outside
/// collaborators, and carries the high score from one game to the next
#[derive(Debug)]
pub(crate) struct GameController<P> {
    engine: SimulationEngine<P>,
    placer: P,
    bounds: Bounds,
    input: InputBuffer,
    clock: GameClock,
    high_score: u32,
    store: Box<dyn HighScoreStore>,
    listeners: Listeners,
}

impl<P: FoodPlacer + Clone> GameController<P> {
    /// Create a controller with an idle board of the given size.  The high
    /// score is read from `store`; if that fails, it starts at zero.
    pub(crate) fn new(
        bounds: Bounds,
        mut store: Box<dyn HighScoreStore>,
        placer: P,
        listeners: Listeners,
    ) -> Self {
        let high_score = store.load().unwrap_or_else(|e| {
            log::warn!("{}", error_chain(&e));
            0
        });
        GameController {
            engine: SimulationEngine::new(bounds, high_score, placer.clone()),
            placer,
            bounds,
            input: InputBuffer::new(),
            clock: GameClock::new(),
            high_score,
            store,
            listeners,
        }
    }

    /// Begin the first game.  Only does anything while idle.
    pub(crate) fn start(&mut self, now: Instant) {
        if self.engine.phase() == GamePhase::Idle {
            log::info!(
                "Starting game on a {}x{} grid",
                self.bounds.width,
                self.bounds.height
            );
            self.input.clear();
            self.engine.start();
            let _ = self.clock.schedule_now(now);
        }
    }

    /// Replace a finished game with a fresh one and start it.  Only does
    /// anything once the current game is over.
    pub(crate) fn restart(&mut self, now: Instant) {
        if self.engine.phase() == GamePhase::Over {
            log::info!(
                "Restarting on a {}x{} grid",
                self.bounds.width,
                self.bounds.height
            );
            self.clock.cancel();
            self.input.clear();
            self.engine =
                SimulationEngine::initialize(self.bounds, self.high_score, self.placer.clone());
            let _ = self.clock.schedule_now(now);
        }
    }

    /// Change the size used for the next game.  An idle board is laid out
    /// again right away; a game in progress keeps its size.
    pub(crate) fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        if self.engine.phase() == GamePhase::Idle {
            self.engine = SimulationEngine::new(bounds, self.high_score, self.placer.clone());
        }
    }

    /// Run the tick identified by `handle` if it is still live and due.
    /// Returns `true` if a tick ran.
    pub(crate) fn fire(&mut self, handle: TickHandle, now: Instant) -> bool {
        let GameController {
            engine,
            input,
            clock,
            listeners,
            ..
        } = self;
        let Some(outcome) = clock.fire(handle, now, engine, input, |outcome, snapshot| {
            for event in &outcome.events {
                listeners.notify(event);
            }
            listeners.notify(&GameEvent::Tick(snapshot.clone()));
        }) else {
            return false;
        };
        for event in &outcome.events {
            if let GameEvent::NewHighScore { value } = *event {
                self.record_high_score(value);
            }
        }
        true
    }

    /// Run the pending tick if it is due
    pub(crate) fn pump(&mut self, now: Instant) -> bool {
        match self.clock.next_tick() {
            Some((handle, _)) => self.fire(handle, now),
            None => false,
        }
    }

    fn record_high_score(&mut self, value: u32) {
        if value <= self.high_score {
            return;
        }
        self.high_score = value;
        if let Err(e) = self.store.save(value) {
            log::error!("{}", error_chain(&e));
        }
    }
}

impl<P> GameController<P> {
    /// Pause a running game.  Stops the clock.
    pub(crate) fn pause(&mut self) {
        if self.engine.phase() == GamePhase::Running {
            self.engine.pause();
            self.clock.cancel();
            log::debug!("Paused");
        }
    }

    /// Resume a paused game.  The next tick is due at `now`; ticks missed
    /// while paused are not made up.
    pub(crate) fn resume(&mut self, now: Instant) {
        if self.engine.phase() == GamePhase::Paused {
            self.engine.resume();
            let _ = self.clock.schedule_now(now);
            log::debug!("Resumed");
        }
    }

    pub(crate) fn toggle_pause(&mut self, now: Instant) {
        match self.engine.phase() {
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(now),
            GamePhase::Idle | GamePhase::Over => (),
        }
    }

    /// Buffer a direction for the next tick.  Ignored unless the game is
    /// running.
    pub(crate) fn set_direction_intent(&mut self, direction: Direction) {
        if self.engine.phase() == GamePhase::Running {
            self.input.set_intent(direction);
        }
    }

    /// Return the pending tick's handle and deadline, if one is scheduled
    pub(crate) fn next_tick(&self) -> Option<(TickHandle, Instant)> {
        self.clock.next_tick()
    }

    /// Return how long until the pending tick is due
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.clock.time_until_tick(now)
    }

    pub(crate) fn phase(&self) -> GamePhase {
        self.engine.phase()
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        self.engine.current_state()
    }
}

/// Render an error and all of its sources on one line
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msgs = vec![e.to_string()];
    let mut source = e.source();
    while let Some(src) = source {
        msgs.push(src.to_string());
        source = src.source();
    }
    msgs.join(": ")
}
