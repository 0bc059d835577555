//! SpaceX Launches - terminal browser for SpaceX launches
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use launches_app::config::load_settings;
use launches_client::HttpLaunchSource;
use launches_core::logging;
use spacex_launches::cli::Args;
use tracing::{error, info};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Initialize logging (to file, since TUI owns stdout)
    logging::init()?;

    let settings = args.apply_overrides(load_settings(args.config.as_deref()));
    info!(
        "Settings: year={} columns={} date_format={}",
        settings.source.launch_year, settings.ui.columns, settings.ui.date_format
    );

    let source = HttpLaunchSource::new(settings.source.endpoint()?, settings.source.timeout())?;

    let result = launches_tui::run_with_source(settings, source).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("SpaceX Launches exiting");
    Ok(result?)
}
