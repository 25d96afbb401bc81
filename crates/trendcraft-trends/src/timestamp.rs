//! Loose timestamp parsing for `published_at`.
//!
//! Collectors emit ISO-8601 (with or without offset, `Z` allowed) or the
//! fixed `YYYY-MM-DD HH:MM:SS` pattern. The wall-clock time is kept as
//! written; offsets are not normalized to UTC.

use chrono::{DateTime, NaiveDateTime, Timelike};

const ISO_NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const ISO_OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];
const FIXED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of extracting an hour of day from a raw timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourParse {
    /// Hour in `0..=23`.
    Parsed(u32),
    Unparseable,
}

/// Parse a raw `published_at` value into its wall-clock date and time.
///
/// Returns `None` for absent, blank, or unrecognized input.
#[must_use]
pub fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    parse_iso(raw).or_else(|| NaiveDateTime::parse_from_str(raw, FIXED_FORMAT).ok())
}

/// Extract the hour of day from a raw `published_at` value.
///
/// The business-hours substitution for [`HourParse::Unparseable`] is the
/// caller's job.
#[must_use]
pub fn parse_hour(raw: Option<&str>) -> HourParse {
    match parse_timestamp(raw) {
        Some(dt) => HourParse::Parsed(dt.hour()),
        None => HourParse::Unparseable,
    }
}

fn parse_iso(raw: &str) -> Option<NaiveDateTime> {
    if !raw.contains('T') {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    let with_offset = match raw.strip_suffix(['Z', 'z']) {
        Some(local) => format!("{local}+00:00"),
        None => raw.to_string(),
    };
    if let Some(dt) = ISO_OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&with_offset, fmt).ok())
    {
        return Some(dt.naive_local());
    }
    ISO_NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
