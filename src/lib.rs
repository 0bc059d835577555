//! SpaceX Launches - browse one year of SpaceX launches in the terminal
//!
//! The binary wires the workspace crates together:
//! - [`launches_core`] - Domain types, validation, errors, logging
//! - [`launches_client`] - The launch API client
//! - [`launches_app`] - TEA state, update, settings
//! - [`launches_tui`] - Rendering and the run loop
//!
//! This library only holds the command-line surface so it can be tested.

pub mod cli;
