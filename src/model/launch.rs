//! Launch record as delivered by the launch data source.
//!
//! Deserialization is lenient: every field except the flight number may be
//! absent, null or of the wrong type, and degrades to a placeholder at
//! presentation time.

use super::LaunchId;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder shown when a record carries no details text.
pub const NO_DETAILS_PLACEHOLDER: &str = "No details available";

/// A single launch record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "flight_number")]
    id: LaunchId,
    #[serde(default, deserialize_with = "lenient")]
    mission_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    upcoming: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    launch_date_local: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    details: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    links: Option<LaunchLinks>,
}

/// Decode an optional field, treating a value of the wrong type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Media links attached to a launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Small mission patch image URL.
    #[serde(default, deserialize_with = "lenient")]
    pub mission_patch_small: Option<String>,
}

impl LaunchRecord {
    /// Minimal record with an id and a mission name.
    pub fn new(id: LaunchId, mission_name: impl Into<String>) -> Self {
        Self {
            id,
            mission_name: Some(mission_name.into()),
            upcoming: None,
            launch_date_local: None,
            details: None,
            links: None,
        }
    }

    /// Set the upcoming flag.
    pub fn with_upcoming(mut self, upcoming: bool) -> Self {
        self.upcoming = Some(upcoming);
        self
    }

    /// Set the raw local launch timestamp.
    pub fn with_launch_date(mut self, raw: impl Into<String>) -> Self {
        self.launch_date_local = Some(raw.into());
        self
    }

    /// Set the details text.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the mission patch URL.
    pub fn with_patch_url(mut self, url: impl Into<String>) -> Self {
        self.links = Some(LaunchLinks {
            mission_patch_small: Some(url.into()),
        });
        self
    }

    /// Flight number identifying this record.
    pub fn id(&self) -> LaunchId {
        self.id
    }

    /// Mission name, empty when the source omitted it.
    pub fn mission_name(&self) -> &str {
        self.mission_name.as_deref().unwrap_or("")
    }

    /// True only when the source marked the launch as upcoming.
    pub fn is_upcoming(&self) -> bool {
        self.upcoming.unwrap_or(false)
    }

    /// Raw local launch timestamp as sent by the source.
    pub fn launch_date_raw(&self) -> Option<&str> {
        self.launch_date_local.as_deref()
    }

    /// Parsed local launch timestamp. `None` when absent or unparseable.
    pub fn launch_date(&self) -> Option<DateTime<FixedOffset>> {
        self.launch_date_local
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    }

    /// Details text, `None` when absent or blank.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref().filter(|d| !d.trim().is_empty())
    }

    /// Details text, or [`NO_DETAILS_PLACEHOLDER`] when absent.
    pub fn details_or_placeholder(&self) -> &str {
        self.details().unwrap_or(NO_DETAILS_PLACEHOLDER)
    }

    /// Mission patch URL, `None` when absent or empty.
    pub fn mission_patch_url(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| links.mission_patch_small.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Badge derived from the upcoming flag.
    pub fn status_badge(&self) -> StatusBadge {
        if self.is_upcoming() {
            StatusBadge::Upcoming
        } else {
            StatusBadge::Failed
        }
    }
}

/// Status badge shown on each card.
///
/// Every launch that is not upcoming is labelled `Failed`, successful past
/// launches included. The data source does carry `launch_success`; a
/// three-way badge needs a product decision first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge {
    /// Scheduled, not yet flown.
    Upcoming,
    /// Everything else.
    Failed,
}

impl StatusBadge {
    /// Text shown inside the badge.
    pub fn label(self) -> &'static str {
        match self {
            StatusBadge::Upcoming => "Upcoming",
            StatusBadge::Failed => "Failed",
        }
    }
}

/// Whole years elapsed between `date` and `today`.
///
/// Returns `None` when `date` lies after `today`.
pub fn years_since(date: NaiveDate, today: NaiveDate) -> Option<u32> {
    if date > today {
        return None;
    }
    let mut years = today.year() - date.year();
    if (today.month(), today.day()) < (date.month(), date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
