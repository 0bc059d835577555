//! Custom widget components

mod footer;
mod header;
mod launch_grid;
mod launch_modal;
mod launch_tile;
pub mod modal_overlay;
mod status_message;

pub use footer::KeyHints;
pub use header::MainHeader;
pub use launch_grid::{visible_tiles, LaunchGrid};
pub use launch_modal::{wrap_text, LaunchModal, DETAILS_HEADING, MORE_ABOVE, MORE_BELOW};
pub use launch_tile::LaunchTile;
pub use status_message::{StatusMessage, LOADING_MESSAGE};
