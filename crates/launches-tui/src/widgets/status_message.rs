//! Loading and error screens

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Text shown while the fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading launches...";

/// Single centered status line in place of the grid
pub enum StatusMessage<'a> {
    Loading { frame: usize },
    Error { message: &'a str },
}

impl StatusMessage<'_> {
    fn line(&self) -> Line<'_> {
        match self {
            StatusMessage::Loading { frame } => Line::from(vec![
                Span::styled(SPINNER[frame % SPINNER.len()], styles::accent()),
                Span::raw(" "),
                Span::styled(LOADING_MESSAGE, styles::text_secondary()),
            ]),
            StatusMessage::Error { message } => Line::from(vec![
                Span::styled("✗ ", styles::status_red()),
                Span::styled(*message, styles::status_red()),
            ]),
        }
    }
}

impl Widget for StatusMessage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line_area = centered_rect(area.width, 1, area);
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(line_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_loading_message() {
        let mut term = TestTerminal::new();
        term.render_widget(StatusMessage::Loading { frame: 0 }, term.area());

        assert!(term.buffer_contains(LOADING_MESSAGE));
        assert!(term.buffer_contains("⠋"));
    }

    #[test]
    fn test_spinner_wraps() {
        let mut term = TestTerminal::new();
        term.render_widget(StatusMessage::Loading { frame: 11 }, term.area());

        assert!(term.buffer_contains("⠙"));
    }

    #[test]
    fn test_error_message_is_vertically_centered() {
        let mut term = TestTerminal::new();
        let message = "Failed to load data. Check your internet connection.";
        term.render_widget(StatusMessage::Error { message }, term.area());

        assert!(term.line_contains(11, message));
    }
}
