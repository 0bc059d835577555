//! Screen layout definitions for the TUI
//!
//! Provides the header/body/footer split and the tile grid geometry. Both the
//! renderer and the recorded hit map use these functions, so what is drawn
//! and what is clickable always agree.

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Rows per tile, borders included
pub const TILE_HEIGHT: u16 = 7;

/// Narrowest tile before the grid drops a column
pub const MIN_TILE_WIDTH: u16 = 24;

/// Label of the per-tile control that opens the details modal
pub const ACTION_LABEL: &str = "[ See more › ]";

/// Label of the modal close control
pub const CLOSE_LABEL: &str = "[×]";

/// Preferred details modal width
pub const MODAL_WIDTH: u16 = 72;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and launch count (glass container)
    pub header: Rect,

    /// Grid or status message
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(1),    // Body
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

/// Columns that fit in `width`, never more than `preferred` and never zero
pub fn effective_columns(width: u16, preferred: u16) -> u16 {
    (width / MIN_TILE_WIDTH).clamp(1, preferred.max(1))
}

/// Whole tile rows that fit in `height`, never zero
pub fn rows_visible(height: u16) -> u16 {
    (height / TILE_HEIGHT).max(1)
}

/// Rect of the tile at (`row`, `column`) counted from the top of the visible grid.
///
/// The last column absorbs the division remainder. Returns `None` when the
/// tile would start below the area.
pub fn tile_rect(area: Rect, columns: u16, row: u16, column: u16) -> Option<Rect> {
    let columns = columns.max(1);
    let width = area.width / columns;
    let x = area.x + column * width;
    let y = area.y.checked_add(row.checked_mul(TILE_HEIGHT)?)?;
    if y >= area.y.saturating_add(area.height) || width == 0 {
        return None;
    }

    let width = if column + 1 == columns {
        area.width - column * width
    } else {
        width
    };
    let height = TILE_HEIGHT.min(area.y + area.height - y);
    Some(Rect::new(x, y, width, height))
}

/// Whether a (possibly clipped) tile has room for its action control
pub fn tile_shows_action(tile: Rect) -> bool {
    tile.height >= 4 && tile.width >= 5
}

/// Rect of the action control inside a tile (second to last row, inset by
/// border and padding)
pub fn tile_action_rect(tile: Rect) -> Rect {
    let label_width = ACTION_LABEL.width() as u16;
    let width = label_width.min(tile.width.saturating_sub(4));
    let y = tile.y + tile.height.saturating_sub(2);
    Rect::new(tile.x + 2, y, width, 1)
}

/// Centered rect for the details modal holding `content_height` inner rows
pub fn modal_rect(area: Rect, content_height: u16) -> Rect {
    let width = MODAL_WIDTH.min(area.width.saturating_sub(4)).max(20.min(area.width));
    let height = content_height
        .saturating_add(2)
        .min(area.height.saturating_sub(2))
        .max(3.min(area.height));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Rect of the close control on the modal's top border
pub fn modal_close_rect(modal: Rect) -> Rect {
    let width = CLOSE_LABEL.width() as u16;
    let x = (modal.x + modal.width).saturating_sub(width + 2).max(modal.x);
    Rect::new(x, modal.y, width.min(modal.width), 1)
}
