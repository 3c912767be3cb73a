//! Lenient date-string parsing for the date formatter.
//!
//! Inputs carrying a UTC offset keep the calendar date written in the
//! string; nothing is converted to the host timezone.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};

/// Date-time layouts with an explicit offset that RFC 3339 does not cover.
const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parse a date string into a calendar date.
///
/// Accepts ISO 8601 / RFC 3339 dates and date-times, partial ISO dates
/// (`2024-03` and `2024`), RFC 2822, and a few common written forms
/// (`2024/03/05`, `03/05/2024`, `March 5, 2024`, `5 Mar 2024`).
/// Leading and trailing whitespace is ignored. Years outside `0..=9999`
/// (including signed years such as `-0001-01-01`) are rejected.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    parse_any(input.trim()).filter(|date| (0..=9999).contains(&date.year()))
}

fn parse_any(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, fmt) {
            return Some(dt.date_naive());
        }
    }

    let naive = input.strip_suffix(['Z', 'z']).unwrap_or(input);
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }

    if let Some(date) = parse_partial_iso(input) {
        return Some(date);
    }

    DateTime::parse_from_rfc2822(input)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Serde adapter reading a date field with [`parse_date`], so documents
/// carrying ISO date-times (`2024-03-05T00:00:00.000Z`) load as well as
/// plain `YYYY-MM-DD` dates.
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| de::Error::custom(format!("unrecognized date '{raw}'")))
}

/// `YYYY-MM` → first of the month, `YYYY` → 1 January.
fn parse_partial_iso(input: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());

    match input.split_once('-') {
        Some((year, month)) if is_digits(year, 4) && is_digits(month, 2) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if is_digits(input, 4) => NaiveDate::from_ymd_opt(input.parse().ok()?, 1, 1),
        _ => None,
    }
}
