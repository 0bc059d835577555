//! Launch records and boundary validation of the launch API response
//!
//! The API response is trusted for nothing: the body must be a JSON array,
//! every element must validate into a typed [`Launch`], and flight numbers
//! must be unique. A single bad record rejects the whole batch.

use std::collections::HashSet;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shown wherever a rocket name is missing
pub const UNKNOWN_ROCKET: &str = "Unknown";

/// Calendar date pattern used when none is configured (`07.01.2020`)
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// One launch as returned by the v3 launches endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    /// Unique within a fetched batch; used as the tile key
    pub flight_number: u32,
    pub mission_name: String,
    #[serde(default)]
    pub launch_year: Option<String>,
    pub launch_date_utc: DateTime<Utc>,
    #[serde(default)]
    pub rocket: Option<Rocket>,
    #[serde(default)]
    pub links: Option<LaunchLinks>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub launch_success: Option<bool>,
}

/// Rocket descriptor nested in a launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default)]
    pub rocket_name: Option<String>,
    #[serde(default)]
    pub rocket_type: Option<String>,
}

/// Link bundle nested in a launch. Any entry may be null or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub mission_patch: Option<String>,
    #[serde(default)]
    pub mission_patch_small: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

/// Tri-state launch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    Failure,
    Unknown,
}

impl LaunchOutcome {
    pub fn label(self) -> &'static str {
        match self {
            LaunchOutcome::Success => "Success",
            LaunchOutcome::Failure => "Failure",
            LaunchOutcome::Unknown => "Unknown",
        }
    }
}

impl From<Option<bool>> for LaunchOutcome {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => LaunchOutcome::Success,
            Some(false) => LaunchOutcome::Failure,
            None => LaunchOutcome::Unknown,
        }
    }
}

/// Treat null and blank strings alike
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl LaunchLinks {
    pub fn mission_patch(&self) -> Option<&str> {
        present(&self.mission_patch)
    }

    pub fn mission_patch_small(&self) -> Option<&str> {
        present(&self.mission_patch_small)
    }

    /// External links that are present, labelled for display
    pub fn external(&self) -> Vec<(&'static str, &str)> {
        [
            ("Article", present(&self.article_link)),
            ("Wikipedia", present(&self.wikipedia)),
            ("Video", present(&self.video_link)),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
        .collect()
    }
}

impl Launch {
    /// Rocket name, or `None` when the rocket or its name is missing
    pub fn rocket_name(&self) -> Option<&str> {
        self.rocket.as_ref().and_then(|r| present(&r.rocket_name))
    }

    pub fn rocket_name_or_placeholder(&self) -> &str {
        self.rocket_name().unwrap_or(UNKNOWN_ROCKET)
    }

    pub fn rocket_type(&self) -> Option<&str> {
        self.rocket.as_ref().and_then(|r| present(&r.rocket_type))
    }

    pub fn mission_patch(&self) -> Option<&str> {
        self.links.as_ref().and_then(LaunchLinks::mission_patch)
    }

    pub fn mission_patch_small(&self) -> Option<&str> {
        self.links.as_ref().and_then(LaunchLinks::mission_patch_small)
    }

    pub fn external_links(&self) -> Vec<(&'static str, &str)> {
        self.links
            .as_ref()
            .map(LaunchLinks::external)
            .unwrap_or_default()
    }

    /// Details text; `None` means the details section is omitted entirely
    pub fn details(&self) -> Option<&str> {
        present(&self.details)
    }

    pub fn outcome(&self) -> LaunchOutcome {
        self.launch_success.into()
    }

    /// Launch date as a calendar date using `pattern` (strftime syntax)
    pub fn formatted_date(&self, pattern: &str) -> String {
        format_date(&self.launch_date_utc, pattern)
    }
}

/// Format a date, falling back to [`DEFAULT_DATE_FORMAT`] if `pattern` is invalid.
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        out.clear();
        // The default pattern is a fixed valid strftime string
        let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
    }
    out
}

/// True if `pattern` is a strftime string chrono can render
pub fn is_valid_date_format(pattern: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Parse and validate a launch API response body.
///
/// Returns the launches in arrival order, or the first validation failure.
pub fn parse_launches(body: &str) -> Result<Vec<Launch>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    validate_launches(raw)
}

/// Validate already-decoded JSON values into launches.
pub fn validate_launches(raw: Vec<serde_json::Value>) -> Result<Vec<Launch>> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut launches = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let launch = validate_record(index, value)?;
        if !seen.insert(launch.flight_number) {
            return Err(Error::DuplicateFlight {
                flight_number: launch.flight_number,
            });
        }
        launches.push(launch);
    }

    Ok(launches)
}

fn validate_record(index: usize, value: serde_json::Value) -> Result<Launch> {
    if !value.is_object() {
        return Err(Error::validation(
            index,
            format!("expected an object, found {}", json_kind(&value)),
        ));
    }
    serde_json::from_value(value).map_err(|e| Error::validation(index, e.to_string()))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
