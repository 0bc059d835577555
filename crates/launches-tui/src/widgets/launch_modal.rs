//! Details modal for the selected launch
//!
//! Draws nothing when no launch is selected. Otherwise dims the screen,
//! and shows the launch's fields in a centered box with a `[×]` control on
//! its top border. Content taller than the box scrolls; arrows on the
//! borders mark rows hidden above or below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use launches_core::Launch;

use crate::layout::{modal_close_rect, modal_rect, CLOSE_LABEL};
use crate::theme::styles;

use super::modal_overlay::{clear_area, dim_background, render_shadow};

/// Heading above the free-text details
pub const DETAILS_HEADING: &str = "Details:";

/// Bottom border marker while rows remain below the visible part
pub const MORE_BELOW: &str = "▼ more";

/// Top border marker once the body is scrolled
pub const MORE_ABOVE: &str = "▲";

/// Field labels are padded to this width
const LABEL_WIDTH: usize = 10;

pub struct LaunchModal<'a> {
    launch: Option<&'a Launch>,
    date_format: &'a str,
    scroll: usize,
}

impl<'a> LaunchModal<'a> {
    pub fn new(launch: Option<&'a Launch>, date_format: &'a str) -> Self {
        Self {
            launch,
            date_format,
            scroll: 0,
        }
    }

    /// First body row to show; clamped to [`Self::scroll_limit`] when drawn
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Where the modal box lands inside `area`, or `None` with no selection
    pub fn rect(&self, area: Rect) -> Option<Rect> {
        let launch = self.launch?;
        Some(self.layout(launch, area).0)
    }

    /// Rows of content that do not fit in the box at this size
    pub fn scroll_limit(&self, area: Rect) -> usize {
        let Some(launch) = self.launch else {
            return 0;
        };
        let (modal, lines) = self.layout(launch, area);
        let visible = usize::from(styles::modal_block().inner(modal).height);
        lines.len().saturating_sub(visible)
    }

    fn layout(&self, launch: &'a Launch, area: Rect) -> (Rect, Vec<Line<'a>>) {
        let width = content_width(modal_rect(area, 0));
        let lines = self.lines(launch, width);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        (modal_rect(area, height), lines)
    }

    fn lines(&self, launch: &'a Launch, width: u16) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            launch.mission_name.as_str(),
            styles::text_bright_bold(),
        ))];

        if let Some(patch) = launch.mission_patch() {
            lines.push(field("Patch:", Span::styled(patch, styles::link())));
        }
        lines.push(Line::default());

        lines.push(field(
            "Rocket:",
            Span::styled(launch.rocket_name_or_placeholder(), styles::text_primary()),
        ));
        if let Some(rocket_type) = launch.rocket_type() {
            lines.push(field(
                "Type:",
                Span::styled(rocket_type, styles::text_primary()),
            ));
        }
        lines.push(field(
            "Date:",
            Span::styled(launch.formatted_date(self.date_format), styles::text_primary()),
        ));
        let outcome = launch.outcome();
        lines.push(field(
            "Outcome:",
            Span::styled(outcome.label(), styles::outcome(outcome)),
        ));

        for (label, url) in launch.external_links() {
            lines.push(field(
                &format!("{label}:"),
                Span::styled(url, styles::link()),
            ));
        }

        if let Some(details) = launch.details() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                DETAILS_HEADING,
                styles::accent_bold(),
            )));
            lines.extend(
                wrap_text(details, usize::from(width))
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, styles::text_secondary()))),
            );
        }

        lines
    }
}

fn field<'a>(label: &str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), styles::text_muted()),
        value,
    ])
}

/// Usable text width inside a modal (borders plus one column of padding each side)
fn content_width(modal: Rect) -> u16 {
    modal.width.saturating_sub(4).max(1)
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }

            // Hard-split words that cannot fit on a row of their own
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        rows.push(current);
    }

    rows
}

impl Widget for LaunchModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(launch) = self.launch else {
            return;
        };
        let limit = self.scroll_limit(area);
        let (modal, lines) = self.layout(launch, area);

        dim_background(buf, area);
        render_shadow(buf, modal);
        clear_area(buf, modal);

        let block = styles::modal_block();
        let inner = block.inner(modal);
        block.render(modal, buf);

        let close = modal_close_rect(modal);
        buf.set_stringn(
            close.x,
            close.y,
            CLOSE_LABEL,
            usize::from(close.width),
            styles::accent_bold(),
        );

        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let offset = self.scroll.min(limit);
        if offset > 0 {
            buf.set_stringn(
                inner.x + 1,
                modal.y,
                MORE_ABOVE,
                usize::from(inner.width - 2),
                styles::accent(),
            );
        }
        if offset < limit {
            buf.set_stringn(
                inner.x + 1,
                modal.y + modal.height - 1,
                MORE_BELOW,
                usize::from(inner.width - 2),
                styles::accent(),
            );
        }

        let text_area = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height);
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        Paragraph::new(lines).scroll((offset, 0)).render(text_area, buf);
    }
}
