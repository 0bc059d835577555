//! # launches-client - Launch API Client
//!
//! Reads the launch list from the SpaceX REST API and validates it at the
//! boundary before anything else sees it.
//!
//! Depends on [`launches_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`LaunchEndpoint`] - Base URL plus the `launch_year` filter
//! - [`LaunchSource`] / [`LocalLaunchSource`] - Async seam for fetching launches
//! - [`HttpLaunchSource`] - reqwest-backed implementation

pub mod endpoint;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use endpoint::{LaunchEndpoint, DEFAULT_BASE_URL, DEFAULT_LAUNCH_YEAR};
pub use source::{HttpLaunchSource, LaunchSource, LocalLaunchSource, DEFAULT_TIMEOUT};
