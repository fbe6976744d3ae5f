//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the network layer and the UI layer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single rocket launch in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Launch {
    /// Unique flight number (dedup key and expansion key)
    pub flight_number: u32,
    /// Mission name as shown on the card (e.g., "FalconSat")
    pub mission_name: String,
    /// Launch year as reported by the source (e.g., "2006")
    pub launch_year: String,
    /// Outcome: None while not yet known (e.g., upcoming launches)
    pub launch_success: Option<bool>,
    /// Free-form mission description
    #[serde(default)]
    pub details: Option<String>,
    /// External links (patch image, article, video)
    #[serde(default)]
    pub links: LaunchLinks,
    /// True if the launch has not happened yet
    #[serde(default)]
    pub upcoming: bool,
    /// ISO-8601 launch timestamp, used for chronological ordering
    pub launch_date_utc: String,
}

/// External links attached to a launch
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LaunchLinks {
    #[serde(default)]
    pub mission_patch: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
}

/// Badge shown next to the mission name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    Upcoming,
    Success,
    Failed,
}

impl StatusBadge {
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Upcoming => "Upcoming",
            StatusBadge::Success => "Success",
            StatusBadge::Failed => "Failed",
        }
    }
}

impl Launch {
    /// Badge for the card header.
    ///
    /// Upcoming wins over the outcome; a past launch with an unknown
    /// outcome is shown as failed.
    pub fn status_badge(&self) -> StatusBadge {
        if self.upcoming {
            StatusBadge::Upcoming
        } else if self.launch_success == Some(true) {
            StatusBadge::Success
        } else {
            StatusBadge::Failed
        }
    }

    /// Parse `launch_date_utc` into a UTC timestamp
    ///
    /// Accepts RFC 3339 (the catalog's native format), a naive
    /// date-time without offset, or a bare `YYYY-MM-DD` date.
    /// Returns None for anything else.
    pub fn launch_time(&self) -> Option<DateTime<Utc>> {
        parse_launch_time(&self.launch_date_utc)
    }

    /// Case-insensitive substring match on the mission name
    pub fn mission_matches(&self, needle_lowercase: &str) -> bool {
        needle_lowercase.is_empty()
            || self.mission_name.to_lowercase().contains(needle_lowercase)
    }
}

fn parse_launch_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
pub(crate) fn sample_launch(flight_number: u32, mission_name: &str, date: &str) -> Launch {
    Launch {
        flight_number,
        mission_name: mission_name.to_string(),
        launch_year: date.get(..4).unwrap_or_default().to_string(),
        launch_success: Some(true),
        details: None,
        links: LaunchLinks::default(),
        upcoming: false,
        launch_date_utc: date.to_string(),
    }
}
