use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::SchedulerError;
use crate::services::registry::{TzdbProvider, ZoneProvider};
use crate::utils::datetime::{format_local_time, parse_meeting_time};

/// Rendered when no meeting time has been picked yet. The display layer
/// must be able to render before the organizer fills in the time field.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Converts a naive meeting time, anchored in a source zone, into the
/// wall-clock time of a target zone.
///
/// Both ends of the conversion are DST-aware: anchoring uses the source
/// zone's UTC offset in effect at that calendar date, and the result uses
/// the target zone's offset in effect at that instant.
#[derive(Debug, Clone)]
pub struct TimeZoneConverter<P: ZoneProvider = TzdbProvider> {
    provider: P,
}

impl TimeZoneConverter<TzdbProvider> {
    /// Converter backed by the bundled IANA zone database.
    pub fn new() -> Self {
        Self {
            provider: TzdbProvider::new(),
        }
    }
}

impl Default for TimeZoneConverter<TzdbProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ZoneProvider> TimeZoneConverter<P> {
    /// Converter with an injected zone-data provider.
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Convert a raw meeting-time input into the target zone's display
    /// string.
    ///
    /// An empty or whitespace-only input short-circuits to
    /// [`TIME_PLACEHOLDER`] before any zone lookup. Unknown zones and
    /// malformed date-times are errors, never silently defaulted.
    pub fn convert(
        &self,
        naive_input: &str,
        source_zone: &str,
        target_zone: &str,
    ) -> Result<String, SchedulerError> {
        if naive_input.trim().is_empty() {
            return Ok(TIME_PLACEHOLDER.to_string());
        }
        let naive = parse_meeting_time(naive_input)?;
        let localized = self.localize(naive, source_zone, target_zone)?;
        Ok(format_local_time(&localized))
    }

    /// Anchor `naive` in `source_zone` and re-express the resulting
    /// instant in `target_zone`.
    ///
    /// This is the instant-level core of [`convert`](Self::convert);
    /// callers that need the absolute instant rather than the display
    /// string use it directly.
    pub fn localize(
        &self,
        naive: NaiveDateTime,
        source_zone: &str,
        target_zone: &str,
    ) -> Result<DateTime<Tz>, SchedulerError> {
        let source = self.provider.resolve(source_zone)?;
        let target = self.provider.resolve(target_zone)?;
        let anchored = anchor_in_zone(naive, source)?;
        Ok(anchored.with_timezone(&target))
    }
}

/// Interpret a naive date-time as occurring in `zone`.
///
/// During a fall-back transition the same clock time occurs twice; the
/// earlier offset wins. During a spring-forward gap it never occurs at
/// all, which is reported as an invalid date-time rather than being
/// shifted to a nearby instant.
fn anchor_in_zone(naive: NaiveDateTime, zone: Tz) -> Result<DateTime<Tz>, SchedulerError> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(SchedulerError::InvalidDateTime(format!(
            "{} does not exist in {}",
            naive,
            zone.name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_before_time_is_picked() {
        let converter = TimeZoneConverter::new();
        assert_eq!(
            converter.convert("", "Asia/Kolkata", "America/New_York"),
            Ok(TIME_PLACEHOLDER.to_string())
        );
        assert_eq!(
            converter.convert("   ", "UTC", "UTC"),
            Ok(TIME_PLACEHOLDER.to_string())
        );
    }

    #[test]
    fn test_ambiguous_fall_back_hour_takes_earlier_offset() {
        // 2024-11-03 01:30 happens twice in New York; the earlier one is
        // still EDT (UTC-4), i.e. 05:30 UTC.
        let converter = TimeZoneConverter::new();
        let naive = parse_meeting_time("2024-11-03T01:30").unwrap();
        let localized = converter
            .localize(naive, "America/New_York", "UTC")
            .unwrap();
        let expected = chrono::NaiveDate::from_ymd_opt(2024, 11, 3)
            .unwrap()
            .and_hms_opt(5, 30, 0)
            .unwrap();
        assert_eq!(localized.naive_utc(), expected);
    }

    #[test]
    fn test_spring_forward_gap_is_rejected() {
        // 02:30 on 2024-03-10 was skipped in New York.
        let converter = TimeZoneConverter::new();
        let result = converter.convert("2024-03-10T02:30", "America/New_York", "UTC");
        assert!(matches!(result, Err(SchedulerError::InvalidDateTime(_))));
    }
}
