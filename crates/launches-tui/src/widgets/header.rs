//! Header bar widget
//!
//! Shows the title and, once launches are loaded, how many there are.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Main header showing the title and launch count
pub struct MainHeader<'a> {
    title: &'a str,
    launch_count: Option<usize>,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str, launch_count: Option<usize>) -> Self {
        Self {
            title,
            launch_count,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", styles::accent()),
            Span::raw(" "),
            Span::styled(self.title, styles::accent_bold()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-aligned count, dropped if it would collide with the title
        if let Some(count) = self.launch_count {
            let noun = if count == 1 { "launch" } else { "launches" };
            let count_line = Line::from(Span::styled(
                format!("{count} {noun} "),
                styles::text_secondary(),
            ));
            let count_width = count_line.width() as u16;
            if left_width + count_width + 2 <= inner.width {
                let x = inner.x + inner.width - count_width;
                buf.set_line(x, inner.y, &count_line, count_width);
            }
        }
    }
}
