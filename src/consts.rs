//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Points awarded for each piece of food eaten
pub(crate) const SCORE_PER_FOOD: u32 = 10;

/// Time between ticks at a score of zero
pub(crate) const BASE_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How much the time between ticks shrinks for every [`SPEEDUP_SCORE`]
/// points
pub(crate) const TICK_INTERVAL_STEP: Duration = Duration::from_millis(5);

/// The time between ticks never drops below this
pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Every time the score crosses a multiple of this, the game speeds up
pub(crate) const SPEEDUP_SCORE: u32 = 50;

/// A drag must travel further than this many units along its dominant axis
/// to count as a swipe
pub(crate) const SWIPE_THRESHOLD: u32 = 30;

/// Swipe units per terminal column
pub(crate) const SWIPE_UNITS_PER_COLUMN: u32 = 8;

/// Swipe units per terminal row.  Terminal cells are about twice as tall as
/// they are wide.
pub(crate) const SWIPE_UNITS_PER_ROW: u32 = 16;

/// Grids are never shrunk below this many cells on a side to fit the
/// terminal, nor configured larger than [`MAX_GRID_SIZE`]
pub(crate) const MIN_GRID_SIZE: u16 = 5;

pub(crate) const MAX_GRID_SIZE: u16 = 30;

/// Default grid width & height
pub(crate) const DEFAULT_GRID_SIZE: u16 = 20;

/// Each grid cell is drawn this many terminal columns wide so that cells
/// look roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Rows used by the score bar and the two message lines
pub(crate) const CHROME_HEIGHT: u16 = 3;

/// Glyphs for the snake's head
pub(crate) const SNAKE_HEAD_SYMBOL: [char; 2] = ['█', '█'];

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: [char; 2] = ['▓', '▓'];

/// Glyphs for the food
pub(crate) const FOOD_SYMBOL: [char; 2] = ['(', ')'];

/// Glyphs for the snake's head once it's crashed
pub(crate) const COLLISION_SYMBOL: [char; 2] = ['×', '×'];

/// Style for the snake's head
pub(crate) const SNAKE_HEAD_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

/// Style for the snake's body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the score bar after the high score has been beaten this game
pub(crate) const RECORD_SCORE_BAR_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::REVERSED);
