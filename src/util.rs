use crate::consts;
use crate::game::Bounds;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

/// Shrink `wanted` so that the grid, its border, and the surrounding score
/// bar & message lines fit in a terminal of size `area`.  Neither dimension
/// is ever shrunk below [`consts::MIN_GRID_SIZE`] (or grown past what was
/// wanted).
pub(crate) fn fit_bounds(wanted: Bounds, area: Size) -> Bounds {
    let max_width = area.width.saturating_sub(2) / consts::CELL_WIDTH;
    let max_height = area
        .height
        .saturating_sub(2)
        .saturating_sub(consts::CHROME_HEIGHT);
    let fit = |want: u16, room: u16| want.min(room.max(consts::MIN_GRID_SIZE));
    Bounds::new(
        fit(wanted.width, max_width),
        fit(wanted.height, max_height),
    )
}
