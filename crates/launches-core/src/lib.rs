//! # launches-core - Core Domain Types
//!
//! Foundation crate for SpaceX Launches. Provides the launch record model,
//! boundary validation of the launch API response, error handling, and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Launch Records (`launch`)
//! - [`Launch`] - One launch as returned by the API
//! - [`Rocket`], [`LaunchLinks`] - Nested descriptors, every field optional
//! - [`LaunchOutcome`] - Tri-state launch result
//! - [`parse_launches()`] - Parse and validate a response body
//!
//! ### Domain Types (`types`)
//! - [`LoadPhase`] - Fetch lifecycle (Idle, Loading, Loaded, Failed)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum organized by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use launches_core::prelude::*;
//! ```

pub mod error;
pub mod launch;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all SpaceX Launches crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use launch::{
    format_date, is_valid_date_format, parse_launches, validate_launches, Launch, LaunchLinks,
    LaunchOutcome, Rocket, DEFAULT_DATE_FORMAT, UNKNOWN_ROCKET,
};
pub use types::LoadPhase;
