//! Summary tile for one launch

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use launches_core::Launch;

use crate::layout::{tile_action_rect, tile_shows_action, ACTION_LABEL};
use crate::theme::{palette, styles};

/// Fixed-height tile: mission name, rocket, patch badge, action control
pub struct LaunchTile<'a> {
    launch: &'a Launch,
    focused: bool,
}

impl<'a> LaunchTile<'a> {
    pub fn new(launch: &'a Launch) -> Self {
        Self {
            launch,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for LaunchTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if !tile_shows_action(area) {
            return;
        }

        // Content is inset one column from the border
        let x = inner.x + 1;
        let width = inner.width - 2;

        let rows = [
            Line::from(Span::styled(
                self.launch.mission_name.as_str(),
                styles::text_bright_bold(),
            )),
            Line::from(vec![
                Span::styled("Rocket: ", styles::text_muted()),
                Span::styled(
                    self.launch.rocket_name_or_placeholder(),
                    styles::text_secondary(),
                ),
            ]),
            match self.launch.mission_patch_small() {
                Some(_) => Line::from(Span::styled("◆ mission patch", styles::accent())),
                None => Line::default(),
            },
        ];

        // The last inner row belongs to the action control
        let content_rows = inner.height - 1;
        for (offset, line) in rows.iter().enumerate().take(usize::from(content_rows)) {
            buf.set_line(x, inner.y + offset as u16, line, width);
        }

        let action = tile_action_rect(area);
        let action_style = if self.focused {
            styles::focused_selected()
        } else {
            styles::accent()
        };
        buf.set_stringn(
            action.x,
            action.y,
            ACTION_LABEL,
            usize::from(action.width),
            action_style,
        );
    }
}
