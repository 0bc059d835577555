//! Message types for the application (TEA pattern)

use crate::input_key::{InputKey, MouseInput};
use launches_core::Launch;

/// Direction for keyboard focus movement across the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
    PageUp,
    PageDown,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Mouse event from terminal
    Mouse(MouseInput),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Launch List Messages
    // ─────────────────────────────────────────────────────────
    /// Start the one-time launch fetch
    FetchLaunches,

    /// Fetch completed with a validated launch list
    LaunchesLoaded { launches: Vec<Launch> },

    /// Fetch failed; `error` is the technical description for logs
    LaunchesFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Selection Messages
    // ─────────────────────────────────────────────────────────
    /// Open the details modal for a launch
    SelectLaunch { flight_number: u32 },

    /// Move keyboard focus to a tile without opening it
    FocusLaunch { flight_number: u32 },

    /// Open the details modal for the focused tile
    OpenFocused,

    /// Close the details modal
    DismissDetails,

    /// Scroll the details modal body by rows (negative is up)
    ScrollDetails(i32),

    /// Move focus across the grid
    MoveFocus(FocusMove),

    /// Scroll the grid by whole rows (negative is up)
    ScrollGrid(i32),
}
