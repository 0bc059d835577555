//! Test utilities for launch sources
//!
//! Provides launch record builders and an in-memory [`LaunchSource`] that
//! counts how many times it was asked for data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use launches_core::prelude::*;
use launches_core::{Launch, LaunchLinks, Rocket};

use crate::source::LaunchSource;

/// Creates a launch with the fields every tile shows.
///
/// # Arguments
/// * `flight_number` - Tile key
/// * `mission_name` - Mission title
/// * `rocket_name` - Rocket name, `None` to exercise the placeholder
pub fn test_launch(flight_number: u32, mission_name: &str, rocket_name: Option<&str>) -> Launch {
    Launch {
        flight_number,
        mission_name: mission_name.to_string(),
        launch_year: Some("2020".to_string()),
        launch_date_utc: Utc
            .with_ymd_and_hms(2020, 1, 7, 2, 19, 0)
            .single()
            .unwrap_or_default(),
        rocket: rocket_name.map(|name| Rocket {
            rocket_name: Some(name.to_string()),
            rocket_type: Some("FT".to_string()),
        }),
        links: None,
        details: None,
        launch_success: None,
    }
}

/// The Starlink 2 record used throughout the test suites, details included.
pub fn starlink_2() -> Launch {
    let mut launch = test_launch(1, "Starlink 2", Some("Falcon 9"));
    launch.details = Some("SpaceX's second operational batch of Starlink satellites.".to_string());
    launch.launch_success = Some(true);
    launch.links = Some(LaunchLinks {
        mission_patch: Some("https://images2.imgbox.com/d2/3b/bQaWiil0_o.png".to_string()),
        mission_patch_small: Some("https://images2.imgbox.com/d2/3b/bQaWiil0_o.png".to_string()),
        ..LaunchLinks::default()
    });
    launch
}

/// What a [`StaticLaunchSource`] answers with
#[derive(Debug, Clone)]
pub enum StaticResponse {
    Launches(Vec<Launch>),
    HttpStatus(u16),
    Transport(String),
}

/// In-memory source returning a fixed response, optionally after a delay.
#[derive(Debug, Clone)]
pub struct StaticLaunchSource {
    response: StaticResponse,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
}

impl StaticLaunchSource {
    pub fn launches(launches: Vec<Launch>) -> Self {
        Self::new(StaticResponse::Launches(launches))
    }

    pub fn http_status(status: u16) -> Self {
        Self::new(StaticResponse::HttpStatus(status))
    }

    pub fn transport_error(message: &str) -> Self {
        Self::new(StaticResponse::Transport(message.to_string()))
    }

    fn new(response: StaticResponse) -> Self {
        Self {
            response,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Wait before answering, to observe the loading state
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches performed so far (shared between clones)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LaunchSource for StaticLaunchSource {
    async fn fetch_launches(&self) -> Result<Vec<Launch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.response {
            StaticResponse::Launches(launches) => Ok(launches.clone()),
            StaticResponse::HttpStatus(status) => Err(Error::Http { status: *status }),
            StaticResponse::Transport(message) => Err(Error::transport(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "static launch source".to_string()
    }
}
