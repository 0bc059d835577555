//! Key hint footer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use launches_app::Screen;

use crate::theme::styles;

/// One-line footer listing the keys that do something right now
pub struct KeyHints {
    screen: Screen,
    modal_open: bool,
}

impl KeyHints {
    pub fn new(screen: Screen, modal_open: bool) -> Self {
        Self { screen, modal_open }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.modal_open {
            return &[("↑↓", "Scroll"), ("Esc", "Close"), ("click outside", "Close")];
        }
        match self.screen {
            Screen::Loading | Screen::Error => &[("q", "Quit")],
            Screen::Grid => &[
                ("←↑↓→", "Move"),
                ("Enter", "Details"),
                ("Home/End", "Jump"),
                ("q", "Quit"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
