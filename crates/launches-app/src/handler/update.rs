//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use tracing::{debug, error, info, warn};

use super::{keys::handle_key, mouse::handle_mouse, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Mouse(mouse) => match handle_mouse(state, mouse) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Launch List Messages
        // ─────────────────────────────────────────────────────────
        Message::FetchLaunches => {
            if state.begin_fetch() {
                UpdateResult::action(UpdateAction::FetchLaunches)
            } else {
                debug!("Ignoring FetchLaunches in phase {:?}", state.phase);
                UpdateResult::none()
            }
        }

        Message::LaunchesLoaded { launches } => {
            let count = launches.len();
            if state.finish_fetch(launches) {
                info!("Loaded {} launches", count);
            } else {
                warn!("Dropping launch list received in phase {:?}", state.phase);
            }
            UpdateResult::none()
        }

        Message::LaunchesFailed { error } => {
            if state.fail_fetch() {
                error!("Failed to load launches: {}", error);
            } else {
                warn!("Dropping fetch failure received in phase {:?}", state.phase);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectLaunch { flight_number } => {
            if !state.select(flight_number) {
                warn!("No launch with flight number {}", flight_number);
            }
            UpdateResult::none()
        }

        Message::FocusLaunch { flight_number } => {
            state.focus(flight_number);
            UpdateResult::none()
        }

        Message::OpenFocused => match state.focused {
            Some(flight_number) => UpdateResult::message(Message::SelectLaunch { flight_number }),
            None => UpdateResult::none(),
        },

        Message::DismissDetails => {
            state.dismiss();
            UpdateResult::none()
        }

        Message::ScrollDetails(rows) => {
            state.scroll_modal(rows);
            UpdateResult::none()
        }

        Message::MoveFocus(direction) => {
            state.move_focus(direction);
            UpdateResult::none()
        }

        Message::ScrollGrid(rows) => {
            state.scroll_grid(rows);
            UpdateResult::none()
        }
    }
}
