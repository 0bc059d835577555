//! Configuration file parsing for SpaceX Launches
//!
//! Supports `<config_dir>/spacex-launches/config.toml` or an explicit path
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings};
pub use types::*;
