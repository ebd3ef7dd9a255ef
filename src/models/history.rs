//! Username history.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHistoryEntry {
    name: String,
    changed_to_at: Option<i64>,
}

/// One name an account has held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// The username
    pub name: String,
    /// When the account switched to this name; `None` for the original name
    pub changed_at: Option<DateTime<Utc>>,
}

impl HistoryEntry {
    /// True for the name the account was created with.
    pub fn is_original(&self) -> bool {
        self.changed_at.is_none()
    }

    /// Builds an entry from one element of the `/names` array.
    ///
    /// Returns `None` if the element has no `name`.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        let raw: RawHistoryEntry = serde_json::from_value(value).ok()?;
        let changed_at = match raw.changed_to_at {
            Some(ms) => Some(DateTime::from_timestamp(ms.div_euclid(1000), 0)?),
            None => None,
        };
        Some(Self {
            name: raw.name,
            changed_at,
        })
    }
}
