//! Data models shared across resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Who created or last modified a resource, and when (epoch seconds)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ModifiedCreated {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_default")]
    pub at: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_default")]
    pub by: String,
}

impl ModifiedCreated {
    /// Timestamp as RFC 3339, empty when unset
    pub fn at_rfc3339(&self) -> String {
        format_epoch(self.at)
    }
}

/// Render an epoch timestamp as RFC 3339.
///
/// Some endpoints report milliseconds; values past year 5138 in seconds are
/// treated as milliseconds.
pub fn format_epoch(value: i64) -> String {
    if value <= 0 {
        return String::new();
    }
    let dt = if value > 100_000_000_000 {
        DateTime::<Utc>::from_timestamp_millis(value)
    } else {
        DateTime::<Utc>::from_timestamp(value, 0)
    };
    dt.map(|d| d.to_rfc3339()).unwrap_or_default()
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Decode an explicit JSON `null` as the type's default value
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
