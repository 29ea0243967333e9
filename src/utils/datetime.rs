use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::SchedulerError;

/// Display pattern for converted times, e.g. `"14 Jun, 09:30 AM"`.
///
/// 2-digit day, 3-letter month, zero-padded 12-hour clock, zero-padded
/// minutes, uppercase AM/PM. This exact shape is a compatibility contract
/// with the display layer.
pub const DISPLAY_FORMAT: &str = "%d %b, %I:%M %p";

/// Accepted meeting-time input shapes. The primary one matches an HTML
/// `datetime-local` field; the rest are keyboard-friendly variants.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a naive (zone-less) meeting time as typed by the organizer.
pub fn parse_meeting_time(input: &str) -> Result<NaiveDateTime, SchedulerError> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| SchedulerError::InvalidDateTime(input.to_string()))
}

/// Format a zoned date-time with the fixed display pattern.
pub fn format_local_time(dt: &DateTime<Tz>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_datetime_local_shape() {
        let dt = parse_meeting_time("2024-06-14T09:30").unwrap();
        assert_eq!(
            dt,
            NaiveDate::from_ymd_opt(2024, 6, 14)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_space_separator_and_seconds() {
        assert!(parse_meeting_time("2024-06-14 09:30").is_ok());
        let dt = parse_meeting_time("2024-06-14T09:30:45").unwrap();
        assert_eq!(dt.second(), 45);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_meeting_time("  2024-06-14T09:30  ").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let bad = vec![
            "not a date",
            "2024-13-01T09:30", // month 13
            "2024-06-32T09:30", // day 32
            "2024-06-14T25:00", // hour 25
            "14/06/2024 09:30",
            "2024-06-14",
        ];
        for input in bad {
            assert!(
                matches!(
                    parse_meeting_time(input),
                    Err(SchedulerError::InvalidDateTime(_))
                ),
                "should reject: {}",
                input
            );
        }
    }
}
