//! Human-readable wedding date formatting.
//!
//! Both formatters are total: input that cannot be parsed as a date is
//! returned unchanged so a malformed value never breaks a page.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts accepted for local date-times, tried in order.
const DATE_TIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses the wall-clock date-time of a wedding.
///
/// Offsets in RFC 3339 input are kept as written: `2024-09-21T16:00:00+02:00`
/// is 4 PM, the time printed on the card. A bare date means midnight.
fn parse_wedding_date_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();

    DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Formats a date-time as `Saturday, September 21, 2024, 4:00 PM`.
///
/// Returns `input` unchanged if it is not a recognizable date.
pub fn format_long(input: &str) -> String {
    match parse_wedding_date_time(input) {
        Some(dt) => dt.format("%A, %B %-d, %Y, %-I:%M %p").to_string(),
        None => {
            tracing::debug!(input, "Unparseable wedding date, using it verbatim");
            input.to_string()
        }
    }
}

/// Formats a date-time as `21 September 2024`.
///
/// Returns `input` unchanged if it is not a recognizable date.
pub fn format_compact(input: &str) -> String {
    match parse_wedding_date_time(input) {
        Some(dt) => dt.format("%-d %B %Y").to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_datetime_local() {
        let formatted = format_long("2024-09-21T16:00");

        assert_eq!(formatted, "Saturday, September 21, 2024, 4:00 PM");
        assert!(formatted.contains("Saturday"));
        assert!(formatted.contains("September 21"));
        assert!(formatted.contains("2024"));
        assert!(formatted.contains("4:00"));
    }

    #[test]
    fn test_format_compact_datetime_local() {
        assert_eq!(format_compact("2024-09-21T16:00"), "21 September 2024");
    }

    #[test]
    fn test_format_long_morning_and_midnight() {
        assert_eq!(
            format_long("2025-01-05T09:30"),
            "Sunday, January 5, 2025, 9:30 AM"
        );
        assert_eq!(
            format_long("2025-01-05T00:05"),
            "Sunday, January 5, 2025, 12:05 AM"
        );
    }

    #[test]
    fn test_format_with_seconds() {
        assert_eq!(format_compact("2024-09-21T16:00:30"), "21 September 2024");
        assert_eq!(format_compact("2024-09-21T16:00:30.250"), "21 September 2024");
    }

    #[test]
    fn test_format_rfc3339_keeps_wall_clock_time() {
        assert_eq!(
            format_long("2024-09-21T16:00:00+02:00"),
            "Saturday, September 21, 2024, 4:00 PM"
        );
    }

    #[test]
    fn test_format_space_separator() {
        assert_eq!(format_compact("2024-09-21 16:00"), "21 September 2024");
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_compact("2024-09-21"), "21 September 2024");
        assert_eq!(format_long("2024-09-21"), "Saturday, September 21, 2024, 12:00 AM");
    }

    #[test]
    fn test_format_single_digit_day() {
        assert_eq!(format_compact("2024-03-02T10:00"), "2 March 2024");
    }

    #[test]
    fn test_unparseable_input_is_returned_unchanged() {
        assert_eq!(format_long("not-a-date"), "not-a-date");
        assert_eq!(format_compact("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_impossible_date_is_returned_unchanged() {
        assert_eq!(format_long("2024-02-30T10:00"), "2024-02-30T10:00");
        assert_eq!(format_compact("2024-13-01"), "2024-13-01");
    }

    #[test]
    fn test_empty_input_is_returned_unchanged() {
        assert_eq!(format_long(""), "");
        assert_eq!(format_compact(""), "");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(format_compact("  2024-09-21T16:00 "), "21 September 2024");
    }
}
