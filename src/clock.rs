use crate::consts;
use crate::game::{FoodPlacer, GamePhase, SimulationEngine, Snapshot, TickOutcome};
use crate::input::InputBuffer;
use std::time::{Duration, Instant};

/// Return the time between ticks at the given score.  The interval shrinks by
/// [`consts::TICK_INTERVAL_STEP`] each time the score crosses a multiple of
/// [`consts::SPEEDUP_SCORE`], down to [`consts::MIN_TICK_INTERVAL`].
pub(crate) fn interval_for(score: u32) -> Duration {
    let steps = score / consts::SPEEDUP_SCORE;
    let cut = consts::TICK_INTERVAL_STEP.saturating_mul(steps);
    consts::BASE_TICK_INTERVAL
        .saturating_sub(cut)
        .max(consts::MIN_TICK_INTERVAL)
}

/// Identifies one scheduled tick.  Once a tick has fired or been cancelled or
/// replaced, its handle is dead and firing it does nothing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct TickHandle(u64);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Scheduled {
    handle: TickHandle,
    deadline: Instant,
}

/// Schedules ticks one at a time.
///
/// The event loop asks for the pending tick, waits until its deadline (or
/// until input arrives), and then calls [`GameClock::fire()`] with the
/// handle.  Scheduling a new tick or cancelling invalidates whatever was
/// pending, so a handle obtained before a pause/resume can never fire.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct GameClock {
    generation: u64,
    pending: Option<Scheduled>,
}

impl GameClock {
    pub(crate) fn new() -> Self {
        GameClock::default()
    }

    /// Schedule the next tick for one interval (at the given score) after
    /// `now`, replacing any tick already scheduled
    pub(crate) fn schedule(&mut self, now: Instant, score: u32) -> TickHandle {
        self.schedule_at(now + interval_for(score))
    }

    /// Schedule a tick that is due right away, replacing any tick already
    /// scheduled.  Used when play starts or resumes.
    pub(crate) fn schedule_now(&mut self, now: Instant) -> TickHandle {
        self.schedule_at(now)
    }

    fn schedule_at(&mut self, deadline: Instant) -> TickHandle {
        self.generation += 1;
        let handle = TickHandle(self.generation);
        self.pending = Some(Scheduled { handle, deadline });
        handle
    }

    /// Drop the pending tick, if any
    pub(crate) fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
        }
    }

    pub(crate) fn is_live(&self, handle: TickHandle) -> bool {
        self.pending.is_some_and(|s| s.handle == handle)
    }

    /// Return the pending tick's handle and deadline
    pub(crate) fn next_tick(&self) -> Option<(TickHandle, Instant)> {
        self.pending.map(|s| (s.handle, s.deadline))
    }

    /// Return how long until the pending tick is due, or `None` if nothing is
    /// scheduled
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|s| s.deadline.saturating_duration_since(now))
    }

    /// Run the tick identified by `handle` if it is still live and due: feed
    /// the buffered input to `engine.advance()`, pass the outcome and the new
    /// state to `present`, and then, if the game is still running, schedule
    /// the following tick using the interval for the updated score.
    ///
    /// Returns `None` without doing anything if `handle` is stale or not yet
    /// due.
    pub(crate) fn fire<P, F>(
        &mut self,
        handle: TickHandle,
        now: Instant,
        engine: &mut SimulationEngine<P>,
        input: &InputBuffer,
        present: F,
    ) -> Option<TickOutcome>
    where
        P: FoodPlacer,
        F: FnOnce(&TickOutcome, &Snapshot),
    {
        if !self.is_live(handle) {
            return None;
        }
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        let outcome = engine.advance(input.consume_intent());
        present(&outcome, &engine.current_state());
        if outcome.phase == GamePhase::Running {
            let _ = self.schedule(now, engine.score());
        }
        Some(outcome)
    }
}
