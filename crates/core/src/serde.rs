//! Serde helper functions for fixture and CMS deserialization.
//!
//! Content arrives as JSON written by hand or exported from the CMS, so
//! dates come in a few shapes and ids are sometimes numbers. These helpers
//! normalize at the boundary and reject anything they cannot read.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Parses a calendar date from fixture text.
///
/// Accepted formats:
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:MM[:SS]` (no offset, the date part is used)
/// - RFC 3339 with an offset; the date is taken in the offset the
///   timestamp was written in, never converted to the reader's zone.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
}

/// Deserialize a required calendar date using [`parse_calendar_date`].
pub fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_calendar_date(&s)
        .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}")))
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an id that may be a JSON string or an integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
