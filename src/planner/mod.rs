//! Session-scoped planner state: the meeting spec, the participant list,
//! and the derived per-participant schedule.

pub mod meeting;
pub mod participant;

pub use meeting::*;
pub use participant::*;

use serde::Serialize;

use crate::error::SchedulerError;
use crate::services::converter::TimeZoneConverter;
use crate::services::registry::{TzdbProvider, ZoneProvider};
use crate::utils::datetime::parse_meeting_time;

/// One row of the rendered schedule. Derived, never stored: recomputed on
/// every [`MeetingPlanner::schedule`] call from the meeting spec and a
/// participant's zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedTime {
    pub name: String,
    pub zone: String,
    pub local_time: String,
}

/// Owns everything a single page view owns: the meeting spec and the
/// participant list, wired to a converter. One instance per session; no
/// global state.
#[derive(Debug)]
pub struct MeetingPlanner<P: ZoneProvider = TzdbProvider> {
    converter: TimeZoneConverter<P>,
    meeting: MeetingSpec,
    participants: ParticipantList,
}

impl MeetingPlanner<TzdbProvider> {
    /// Planner backed by the bundled IANA zone database.
    pub fn new(organizer_zone: &str) -> Result<Self, SchedulerError> {
        Self::with_converter(TimeZoneConverter::new(), organizer_zone)
    }
}

impl<P: ZoneProvider> MeetingPlanner<P> {
    pub fn with_converter(
        converter: TimeZoneConverter<P>,
        organizer_zone: &str,
    ) -> Result<Self, SchedulerError> {
        let zone = converter.provider().resolve(organizer_zone)?;
        Ok(Self {
            converter,
            meeting: MeetingSpec::new(zone),
            participants: ParticipantList::new(),
        })
    }

    pub fn meeting(&self) -> &MeetingSpec {
        &self.meeting
    }

    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    /// Ordered zone identifiers, for populating zone-selection inputs.
    pub fn zone_names(&self) -> Vec<&'static str> {
        self.converter.provider().zone_names()
    }

    /// Set (or, with an empty input, clear) the meeting time. A non-empty
    /// input must parse; the stored value keeps the user's spelling.
    pub fn set_meeting_time(&mut self, input: &str) -> Result<(), SchedulerError> {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            parse_meeting_time(trimmed)?;
        }
        self.meeting.meeting_time = trimmed.to_string();
        Ok(())
    }

    /// Change the organizer's zone. Unknown identifiers leave the spec
    /// untouched.
    pub fn set_organizer_zone(&mut self, zone_name: &str) -> Result<(), SchedulerError> {
        self.meeting.organizer_zone = self.converter.provider().resolve(zone_name)?;
        Ok(())
    }

    /// Add a participant by name and zone identifier.
    pub fn add_participant(&mut self, name: &str, zone_name: &str) -> Result<(), SchedulerError> {
        let zone = self.converter.provider().resolve(zone_name)?;
        self.participants.add(name, zone)
    }

    /// Remove the participant at `index` (zero-based), returning it.
    pub fn remove_participant(&mut self, index: usize) -> Result<Participant, SchedulerError> {
        self.participants.remove(index)
    }

    /// Compute every participant's local meeting time, in list order.
    ///
    /// Before a meeting time is picked each row carries the placeholder;
    /// the zones themselves are always valid because they were resolved
    /// on the way in.
    pub fn schedule(&self) -> Result<Vec<LocalizedTime>, SchedulerError> {
        self.participants
            .iter()
            .map(|p| {
                let local_time = self.converter.convert(
                    &self.meeting.meeting_time,
                    self.meeting.organizer_zone.name(),
                    p.zone.name(),
                )?;
                Ok(LocalizedTime {
                    name: p.name.clone(),
                    zone: p.zone.name().to_string(),
                    local_time,
                })
            })
            .collect()
    }
}
