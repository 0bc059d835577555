//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use launches_app::config::Settings;

/// SpaceX Launches - a terminal browser for one year of SpaceX launches
#[derive(Parser, Debug, Default)]
#[command(name = "launches", version)]
#[command(about = "Browse SpaceX launches in the terminal", long_about = None)]
pub struct Args {
    /// Settings file (default: <config dir>/spacex-launches/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Launch year to fetch, overriding the settings file
    #[arg(long, value_name = "YEAR")]
    pub year: Option<u16>,

    /// Launches collection URL, overriding the settings file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Args {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(year) = self.year {
            settings.source.launch_year = year;
        }
        if let Some(base_url) = &self.base_url {
            settings.source.base_url = base_url.clone();
        }
        settings
    }
}
