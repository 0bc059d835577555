//! Settings loader for config.toml

use super::types::{Settings, MAX_COLUMNS, MIN_COLUMNS};
use launches_core::prelude::*;
use launches_core::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "spacex-launches";

/// `<config_dir>/spacex-launches/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `explicit` or the default location.
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning. Out-of-range values are corrected.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    let mut settings = read_settings(&path);
    sanitize(&mut settings);
    settings
}

fn read_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match parse_settings_file(path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Ignoring {:?}, using defaults: {}", path, e);
            Settings::default()
        }
    }
}

fn parse_settings_file(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::config(e.to_string()))
}

fn sanitize(settings: &mut Settings) {
    let columns = settings.ui.columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
    if columns != settings.ui.columns {
        warn!(
            "ui.columns = {} out of range, using {}",
            settings.ui.columns, columns
        );
        settings.ui.columns = columns;
    }

    if !is_valid_date_format(&settings.ui.date_format) {
        warn!(
            "ui.date_format {:?} is not a valid strftime pattern, using {:?}",
            settings.ui.date_format, DEFAULT_DATE_FORMAT
        );
        settings.ui.date_format = DEFAULT_DATE_FORMAT.to_string();
    }
}
