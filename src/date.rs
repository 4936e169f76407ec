//! date.rs
//!
//! Date and time display helpers used by the field resolver and the liturgy
//! document builders. Parish data stores dates as `YYYY-MM-DD`, times as
//! `HH:MM[:SS]` and datetimes as ISO 8601 strings; these helpers turn them
//! into the wording printed in worship aids.
//!
//! # Overview
//!
//! - **`format_date_pretty(date)`**: `2025-12-25` → `December 25, 2025`.
//! - **`format_date_weekday(date)`**: `2025-12-25` → `Thursday, December 25, 2025`.
//! - **`format_date_spanish(date)`**: `2025-12-25` → `25 de diciembre de 2025`.
//! - **`format_time(time)`**: `14:30:00` → `2:30 PM`.
//! - **`time_of_day(value)`**: extracts `HH:MM` from a datetime or a time.
//! - **`split_datetime(value)`**: separates the date part from the `HH:MM:SS` part.
//!
//! Input that cannot be parsed as a date is returned unchanged, so a
//! malformed value still shows up in the printed document rather than
//! vanishing.

use chrono::{Datelike, NaiveDate};

use crate::catalog::Language;

/// An injected pretty-date formatter. The resolver takes one of these
/// instead of calling a fixed helper so callers can swap the date wording.
pub type DateFormatter = fn(&str) -> String;

/// Names of months, index 1..12; index 0 is unused.
static MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

static MONTH_NAMES_ES: [&str; 13] = [
    "",
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Day names, 0 = Sunday.
static DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Parses the date part of `value`, accepting both `YYYY-MM-DD` and a full
/// ISO datetime such as `2025-12-25T10:00:00Z`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Formats a date as `December 25, 2025`.
///
/// ```
/// # use parish_liturgy::date::format_date_pretty;
/// assert_eq!(format_date_pretty("2025-12-25"), "December 25, 2025");
/// assert_eq!(format_date_pretty("2024-03-31T10:00:00Z"), "March 31, 2024");
/// assert_eq!(format_date_pretty("next Sunday"), "next Sunday");
/// ```
pub fn format_date_pretty(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} {}, {}",
            MONTH_NAMES[date.month() as usize],
            date.day(),
            date.year()
        ),
        None => value.to_string(),
    }
}

/// Formats a date with its weekday, e.g. `Thursday, December 25, 2025`.
pub fn format_date_weekday(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{}, {}",
            DAY_NAMES[date.weekday().num_days_from_sunday() as usize],
            format_date_pretty(value)
        ),
        None => value.to_string(),
    }
}

/// Formats a date in Spanish, e.g. `25 de diciembre de 2025`.
pub fn format_date_spanish(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTH_NAMES_ES[date.month() as usize],
            date.year()
        ),
        None => value.to_string(),
    }
}

/// Picks the pretty-date wording for a document language.
pub fn format_date_for(value: &str, language: Language) -> String {
    match language {
        Language::English => format_date_pretty(value),
        Language::Spanish => format_date_spanish(value),
    }
}

/// Formats a `HH:MM[:SS]` time in 12-hour form. Empty input gives an empty
/// string; unparsable input is returned unchanged.
///
/// ```
/// # use parish_liturgy::date::format_time;
/// assert_eq!(format_time("14:30:00"), "2:30 PM");
/// assert_eq!(format_time("09:15"), "9:15 AM");
/// assert_eq!(format_time("00:00:00"), "12:00 AM");
/// assert_eq!(format_time(""), "");
/// ```
pub fn format_time(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }

    let mut parts = value.split(':');
    let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
    let minute = parts.next().and_then(|m| m.get(..2)).and_then(|m| m.parse::<u32>().ok());

    match (hour, minute) {
        (Some(hour), Some(minute)) if hour < 24 && minute < 60 => {
            let period = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{}:{:02} {}", display_hour, minute, period)
        }
        _ => value.to_string(),
    }
}

/// Extracts `HH:MM` from either a datetime (`2025-12-25T10:30:00`) or a
/// plain time (`10:30:00`). Returns `None` when nothing follows the `T` of
/// a datetime.
pub fn time_of_day(value: &str) -> Option<String> {
    let time_part = match value.split_once('T') {
        Some((_, rest)) => rest,
        None => value,
    };
    let hhmm: String = time_part.chars().take(5).collect();
    if hhmm.is_empty() {
        None
    } else {
        Some(hhmm)
    }
}

/// Splits an ISO datetime into its date part and its `HH:MM:SS` part.
pub fn split_datetime(value: &str) -> (&str, Option<&str>) {
    match value.split_once('T') {
        Some((date, rest)) => {
            let end = rest
                .char_indices()
                .nth(8)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let time = &rest[..end];
            (date, if time.is_empty() { None } else { Some(time) })
        }
        None => (value, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pretty() {
        assert_eq!(format_date_pretty("2025-01-05"), "January 5, 2025");
        assert_eq!(format_date_pretty("2025-12-25T18:00:00+00:00"), "December 25, 2025");
        // Unparsable values come back untouched.
        assert_eq!(format_date_pretty("2025-13-01"), "2025-13-01");
        assert_eq!(format_date_pretty(""), "");
    }

    #[test]
    fn test_format_date_weekday() {
        assert_eq!(format_date_weekday("2025-12-25"), "Thursday, December 25, 2025");
        assert_eq!(format_date_weekday("2024-03-31"), "Sunday, March 31, 2024");
    }

    #[test]
    fn test_format_date_spanish() {
        assert_eq!(format_date_spanish("2025-12-25"), "25 de diciembre de 2025");
        assert_eq!(
            format_date_for("2025-05-04", Language::Spanish),
            "4 de mayo de 2025"
        );
        assert_eq!(
            format_date_for("2025-05-04", Language::English),
            "May 4, 2025"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("12:00:00"), "12:00 PM");
        assert_eq!(format_time("23:05"), "11:05 PM");
        assert_eq!(format_time("noon"), "noon");
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(time_of_day("2025-12-25T10:30:00Z").as_deref(), Some("10:30"));
        assert_eq!(time_of_day("18:00:00").as_deref(), Some("18:00"));
        assert_eq!(time_of_day("9:00").as_deref(), Some("9:00"));
        assert_eq!(time_of_day("2025-12-25T"), None);
    }

    #[test]
    fn test_split_datetime() {
        assert_eq!(
            split_datetime("2025-12-25T10:30:00.000Z"),
            ("2025-12-25", Some("10:30:00"))
        );
        assert_eq!(split_datetime("2025-12-25"), ("2025-12-25", None));
    }
}
