//! launches-app - Application state and orchestration for SpaceX Launches
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, [`Message`]s, the [`handler::update`]
//! function, and the actions that run the one-time launch fetch. It also owns
//! settings loading and OS signal handling.

pub mod actions;
pub mod config;
pub mod handler;
pub mod hit_map;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use hit_map::{Hit, HitMap, ModalRegion, Region, TileRegion};
pub use input_key::{InputKey, MouseInput};
pub use message::{FocusMove, Message};
pub use process::process_message;
pub use state::{AppState, Screen, FETCH_ERROR_MESSAGE};
