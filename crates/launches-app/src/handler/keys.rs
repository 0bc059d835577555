//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::{FocusMove, Message};
use crate::state::{AppState, Screen};

/// Rows the details modal moves per PageUp/PageDown
const DETAILS_PAGE_ROWS: i32 = 5;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.is_modal_visible() {
        return handle_key_modal(key);
    }
    match state.screen() {
        Screen::Loading | Screen::Error => handle_key_status(key),
        Screen::Grid => handle_key_grid(key),
    }
}

/// Details modal open: scroll its body or close it
fn handle_key_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::DismissDetails),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollDetails(-1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDetails(1)),
        InputKey::PageUp => Some(Message::ScrollDetails(-DETAILS_PAGE_ROWS)),
        InputKey::PageDown => Some(Message::ScrollDetails(DETAILS_PAGE_ROWS)),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollDetails(i32::MIN)),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollDetails(i32::MAX)),
        _ => None,
    }
}

/// Loading or error screen
fn handle_key_status(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_grid(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Left | InputKey::Char('h') | InputKey::BackTab => {
            Some(Message::MoveFocus(FocusMove::Left))
        }
        InputKey::Right | InputKey::Char('l') | InputKey::Tab => {
            Some(Message::MoveFocus(FocusMove::Right))
        }
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveFocus(FocusMove::Up)),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveFocus(FocusMove::Down)),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveFocus(FocusMove::First)),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveFocus(FocusMove::Last)),
        InputKey::PageUp => Some(Message::MoveFocus(FocusMove::PageUp)),
        InputKey::PageDown => Some(Message::MoveFocus(FocusMove::PageDown)),

        InputKey::Enter | InputKey::Char(' ') => Some(Message::OpenFocused),
        _ => None,
    }
}
