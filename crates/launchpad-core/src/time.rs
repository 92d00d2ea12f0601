//! RFC3339 parsing and serde glue for launch timestamps.
//!
//! Timestamps are normalized to UTC and written with a `Z` suffix, with
//! fractional seconds only when present (`2024-05-20T14:00:00Z`).

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::CoreError;

/// Parses an RFC3339 string, converting any offset to UTC.
///
/// The date and time must be joined by an uppercase `T` and a UTC zone must
/// be an uppercase `Z`. chrono alone also takes a space or lowercase letters.
pub fn parse_rfc3339(raw: &str) -> Result<DateTime<Utc>, CoreError> {
    if raw.as_bytes().get(10) != Some(&b'T') || raw.bytes().any(|b| b.is_ascii_lowercase()) {
        return Err(CoreError::InvalidTimeFormat);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| CoreError::InvalidTimeFormat)
}

/// Formats a timestamp the way it appears on the wire.
pub fn format_rfc3339(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = "crate::time::rfc3339")]` adapter.
pub mod rfc3339 {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_rfc3339(t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
