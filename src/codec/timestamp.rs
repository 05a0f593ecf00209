//! Fixed date-time profile for SCIM timestamps.
//!
//! Timestamps travel as `YYYY-MM-DDTHH:MM:SSZ`: UTC, whole seconds. Decoding
//! accepts any RFC 3339 date-time and normalises it into that profile, so a
//! decoded value always re-encodes canonically.
//!
//! The module doubles as a `#[serde(with = "...")]` helper for extension
//! types that carry timestamps.

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format for timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
const ZERO_TIMESTAMP_SECS: i64 = -62_135_596_800;

/// The zero-value timestamp, `0001-01-01T00:00:00Z`.
pub fn zero() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIMESTAMP_SECS, 0).unwrap_or_default()
}

/// Current time truncated to whole seconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Render a timestamp in the wire profile.
///
/// Years outside `0000..=9999` do not fit the four-digit profile; see
/// [`in_profile`].
pub fn format(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Whether `value` has a four-digit year and so survives encode then decode.
pub fn in_profile(value: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&value.year())
}

/// Parse a wire timestamp into the fixed profile.
///
/// Returns `None` when the text is not an RFC 3339 date-time.
pub fn parse(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc).trunc_subsecs(0))
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !in_profile(value) {
        return Err(serde::ser::Error::custom(format!(
            "timestamp year {} is outside the {} profile",
            value.year(),
            TIMESTAMP_FORMAT
        )));
    }
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid timestamp '{}', expected {}",
            text, TIMESTAMP_FORMAT
        ))
    })
}
