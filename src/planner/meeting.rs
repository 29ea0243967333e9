use chrono_tz::Tz;
use serde::Serialize;

/// The organizer's side of the session: the meeting time exactly as
/// typed (empty means "not picked yet") plus the zone it is anchored in.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingSpec {
    pub meeting_time: String,
    pub organizer_zone: Tz,
}

impl MeetingSpec {
    pub fn new(organizer_zone: Tz) -> Self {
        Self {
            meeting_time: String::new(),
            organizer_zone,
        }
    }

    /// True once the organizer has picked a meeting time.
    pub fn has_time(&self) -> bool {
        !self.meeting_time.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spec_has_no_time() {
        let spec = MeetingSpec::new(chrono_tz::Asia::Kolkata);
        assert!(!spec.has_time());
        assert_eq!(spec.organizer_zone, chrono_tz::Asia::Kolkata);
    }

    #[test]
    fn test_whitespace_counts_as_no_time() {
        let mut spec = MeetingSpec::new(chrono_tz::UTC);
        spec.meeting_time = "   ".to_string();
        assert!(!spec.has_time());
        spec.meeting_time = "2024-06-14T09:30".to_string();
        assert!(spec.has_time());
    }
}
