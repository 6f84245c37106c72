use crate::consts;
use crate::game::{Cell, GamePhase, Snapshot};
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Widget},
};

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, status_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let bar_style = if self.score > 0 && self.score >= self.high_score {
            consts::RECORD_SCORE_BAR_STYLE
        } else {
            consts::SCORE_BAR_STYLE
        };
        Line::styled(
            format!(" Score: {}  Best: {}", self.score, self.high_score),
            bar_style,
        )
        .render(score_area, buf);

        let block_size = Size {
            width: self
                .bounds
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.bounds.height.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &c in self.snake.iter().skip(1) {
            board.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        board.draw_cell(self.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        if let Some(head) = self.head() {
            if self.phase == GamePhase::Over {
                board.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                board.draw_cell(head, consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_HEAD_STYLE);
            }
        }

        let (status, hints) = match self.phase {
            GamePhase::Idle => (
                key_hints(&[("Start", "Enter")]),
                key_hints(&[("Quit", "q")]),
            ),
            GamePhase::Running => (
                Line::default(),
                key_hints(&[("Pause", "p"), ("Quit", "q")]),
            ),
            GamePhase::Paused => (
                Line::from(" PAUSED".bold()),
                key_hints(&[("Resume", "p"), ("Quit", "q")]),
            ),
            GamePhase::Over => (
                Line::from(" GAME OVER".bold()),
                key_hints(&[("Restart", "r"), ("Quit", "q")]),
            ),
        };
        status.render(status_area, buf);
        hints.render(hints_area, buf);
    }
}

/// Build a line of the form " Label (key) Label (key)", with the keys
/// highlighted
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for &(label, key) in hints {
        spans.push(Span::raw(format!(" {label} (")));
        spans.push(Span::styled(key, consts::KEY_STYLE));
        spans.push(Span::raw(")"));
    }
    Line::from(spans)
}

/// The inside of the board's border, addressed in grid cells
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: [char; 2], style: Style) {
        let Some(x) = cell
            .x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self
            .area
            .y
            .checked_add(cell.y)
            .filter(|&y| y < self.area.bottom())
        else {
            return;
        };
        for (dx, ch) in (0..consts::CELL_WIDTH).zip(symbol) {
            let Some(x) = x.checked_add(dx).filter(|&x| x < self.area.right()) else {
                return;
            };
            if let Some(bufcell) = self.buf.cell_mut((x, y)) {
                bufcell.set_char(ch);
                bufcell.set_style(style);
            }
        }
    }
}
