//! Mouse event handlers
//!
//! Clicks are resolved against the hit map recorded by the last render.

use crate::hit_map::Hit;
use crate::input_key::MouseInput;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Rows scrolled per wheel notch
const WHEEL_ROWS: i32 = 1;

pub fn handle_mouse(state: &AppState, mouse: MouseInput) -> Option<Message> {
    match mouse {
        MouseInput::LeftClick { column, row } => handle_click(state, column, row),
        MouseInput::ScrollUp { .. } => scroll(state, -WHEEL_ROWS),
        MouseInput::ScrollDown { .. } => scroll(state, WHEEL_ROWS),
    }
}

/// The wheel scrolls the modal body while it is open, the grid otherwise
fn scroll(state: &AppState, rows: i32) -> Option<Message> {
    if state.is_modal_visible() {
        Some(Message::ScrollDetails(rows))
    } else if state.screen() == Screen::Grid {
        Some(Message::ScrollGrid(rows))
    } else {
        None
    }
}

fn handle_click(state: &AppState, column: u16, row: u16) -> Option<Message> {
    match state.hit_map.hit(column, row) {
        Hit::ModalClose | Hit::ModalBackdrop => Some(Message::DismissDetails),
        Hit::ModalContent | Hit::Nothing => None,
        Hit::TileAction(flight_number) => Some(Message::SelectLaunch { flight_number }),
        Hit::Tile(flight_number) => Some(Message::FocusLaunch { flight_number }),
    }
}
