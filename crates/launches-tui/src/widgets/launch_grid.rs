//! Grid of launch tiles

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use launches_core::Launch;

use crate::layout::{rows_visible, tile_rect};
use crate::theme::styles;

use super::LaunchTile;

/// Launches on screen with their tile rects, in arrival order.
///
/// `scroll` is the first visible grid row. When `area` is shorter than one
/// tile, the single visible row is clipped to its height.
pub fn visible_tiles<'a>(
    area: Rect,
    launches: &'a [Launch],
    columns: u16,
    scroll: usize,
) -> Vec<(&'a Launch, Rect)> {
    let columns = columns.max(1);
    let rows = rows_visible(area.height);
    let start = scroll.saturating_mul(usize::from(columns));

    launches
        .iter()
        .skip(start)
        .take(usize::from(rows) * usize::from(columns))
        .enumerate()
        .filter_map(|(i, launch)| {
            let row = (i / usize::from(columns)) as u16;
            let column = (i % usize::from(columns)) as u16;
            tile_rect(area, columns, row, column).map(|rect| (launch, rect))
        })
        .collect()
}

pub struct LaunchGrid<'a> {
    launches: &'a [Launch],
    columns: u16,
    scroll: usize,
    focused: Option<u32>,
}

impl<'a> LaunchGrid<'a> {
    pub fn new(launches: &'a [Launch], columns: u16) -> Self {
        Self {
            launches,
            columns,
            scroll: 0,
            focused: None,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: Option<u32>) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LaunchGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.launches.is_empty() {
            let message = "No launches found";
            let x = area.x + area.width.saturating_sub(message.len() as u16) / 2;
            let y = area.y + area.height / 2;
            buf.set_stringn(x, y, message, usize::from(area.width), styles::text_muted());
            return;
        }

        for (launch, rect) in visible_tiles(area, self.launches, self.columns, self.scroll) {
            let focused = self.focused == Some(launch.flight_number);
            LaunchTile::new(launch).focused(focused).render(rect, buf);
        }
    }
}
