//! Configuration types for SpaceX Launches
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `SourceSettings` - Where launches are read from
//! - `UiSettings` - Grid and date presentation

use launches_client::{LaunchEndpoint, DEFAULT_BASE_URL, DEFAULT_LAUNCH_YEAR, DEFAULT_TIMEOUT};
use launches_core::{Result, DEFAULT_DATE_FORMAT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest and largest number of tile columns
pub const MIN_COLUMNS: u16 = 1;
pub const MAX_COLUMNS: u16 = 6;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Launch API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Launches collection URL, without the year filter
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Year passed as `launch_year`
    #[serde(default = "default_launch_year")]
    pub launch_year: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            launch_year: default_launch_year(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SourceSettings {
    pub fn endpoint(&self) -> Result<LaunchEndpoint> {
        LaunchEndpoint::new(&self.base_url, self.launch_year)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Preferred number of tile columns (narrowed on small terminals)
    #[serde(default = "default_columns")]
    pub columns: u16,

    /// strftime pattern for launch dates in the details view
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            date_format: default_date_format(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_launch_year() -> u16 {
    DEFAULT_LAUNCH_YEAR
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_columns() -> u16 {
    3
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
