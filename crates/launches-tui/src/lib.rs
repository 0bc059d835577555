//! launches-tui - Terminal UI for SpaceX Launches
//!
//! This crate provides the ratatui-based terminal interface: rendering of the
//! launch grid, tiles and details modal, terminal event polling for keys and
//! the mouse, and the run loop that drives launches-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run_with_source;
