use crate::command::Command;
use crate::controller::GameController;
use crate::game::{Bounds, FoodPlacer, GamePhase, RandomFoodPlacer};
use crate::input::Swipe;
use crate::util::fit_bounds;
use crossterm::event::{poll, read, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::Backend, layout::Size, Terminal};
use std::io;
use std::time::Instant;

#[derive(Debug)]
pub(crate) struct App<P = RandomFoodPlacer> {
    controller: GameController<P>,
    swipe: Swipe,
    /// The grid size from the configuration, before fitting it to the
    /// terminal
    wanted: Bounds,
    quitting: bool,
}

impl<P: FoodPlacer + Clone> App<P> {
    pub(crate) fn new(controller: GameController<P>, wanted: Bounds) -> App<P> {
        App {
            controller,
            swipe: Swipe::default(),
            wanted,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        self.fit(terminal.size()?);
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        log::info!("Quitting; high score is {}", self.controller.high_score());
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.controller.snapshot();
        terminal.draw(|frame| frame.render_widget(&snapshot, frame.area()))?;
        Ok(())
    }

    /// Wait for either the next input event or the pending tick, whichever
    /// comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(wait) = self.controller.time_until_tick(Instant::now()) {
            if poll(wait)? {
                self.handle_event(read()?, Instant::now());
            } else {
                let _ = self.controller.pump(Instant::now());
            }
        } else {
            self.handle_event(read()?, Instant::now());
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if let Some(ev) = event.as_key_press_event() {
            if let Some(cmd) = Command::from_key_event(ev) {
                self.handle_command(cmd, now);
            }
            return;
        }
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.swipe.begin(column, row);
                match self.controller.phase() {
                    GamePhase::Idle => self.controller.start(now),
                    GamePhase::Over => self.controller.restart(now),
                    GamePhase::Running | GamePhase::Paused => (),
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(direction) = self.swipe.finish(column, row) {
                    self.controller.set_direction_intent(direction);
                }
            }
            Event::FocusLost => self.controller.pause(),
            Event::Resize(width, height) => self.fit(Size { width, height }),
            _ => (),
        }
    }

    fn handle_command(&mut self, cmd: Command, now: Instant) {
        match (cmd, self.controller.phase()) {
            (Command::Quit | Command::Q, _) => self.quitting = true,
            (Command::Enter | Command::Space, GamePhase::Idle) => self.controller.start(now),
            (Command::Enter | Command::Space | Command::R, GamePhase::Over) => {
                self.controller.restart(now);
            }
            (Command::P | Command::Space, GamePhase::Running | GamePhase::Paused) => {
                self.controller.toggle_pause(now);
            }
            (Command::Esc, GamePhase::Running) => self.controller.pause(),
            (cmd, _) => {
                if let Some(direction) = cmd.direction() {
                    self.controller.set_direction_intent(direction);
                }
            }
        }
    }

    /// Fit the configured grid size to a terminal of the given size.  Only
    /// takes effect on a board that hasn't started yet or on the next game.
    fn fit(&mut self, area: Size) {
        self.controller.resize(fit_bounds(self.wanted, area));
    }
}
