use chrono_tz::Tz;
use serde::Serialize;

use crate::error::SchedulerError;
use crate::utils::validation::validate_participant_name;

/// One attendee: a display name plus the zone their local time is shown in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub name: String,
    pub zone: Tz,
}

/// Owned, ordered collection of participants.
///
/// Insertion order is display order: new entries append, removal is by
/// position. Session-scoped only, nothing here is ever persisted.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ParticipantList {
    entries: Vec<Participant>,
}

impl ParticipantList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant. The name is trimmed and must be non-empty;
    /// on rejection the list is unchanged.
    pub fn add(&mut self, name: &str, zone: Tz) -> Result<(), SchedulerError> {
        validate_participant_name(name)?;
        self.entries.push(Participant {
            name: name.trim().to_string(),
            zone,
        });
        Ok(())
    }

    /// Remove and return the participant at `index` (zero-based).
    pub fn remove(&mut self, index: usize) -> Result<Participant, SchedulerError> {
        if index >= self.entries.len() {
            return Err(SchedulerError::IndexOutOfRange(index));
        }
        Ok(self.entries.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::Berlin;

    #[test]
    fn test_add_appends_in_order() {
        let mut list = ParticipantList::new();
        list.add("Alice", New_York).unwrap();
        list.add("Bob", Berlin).unwrap();
        let names: Vec<_> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_add_trims_name() {
        let mut list = ParticipantList::new();
        list.add("  Alice  ", New_York).unwrap();
        assert_eq!(list.iter().next().unwrap().name, "Alice");
    }

    #[test]
    fn test_add_rejects_empty_name_without_mutating() {
        let mut list = ParticipantList::new();
        assert_eq!(list.add("", New_York), Err(SchedulerError::InvalidName));
        assert_eq!(list.add("   ", New_York), Err(SchedulerError::InvalidName));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_by_position() {
        let mut list = ParticipantList::new();
        list.add("Alice", New_York).unwrap();
        list.add("Bob", Berlin).unwrap();
        list.add("Carol", New_York).unwrap();

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.name, "Bob");
        let names: Vec<_> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list = ParticipantList::new();
        list.add("Alice", New_York).unwrap();
        assert_eq!(list.remove(1), Err(SchedulerError::IndexOutOfRange(1)));
        assert_eq!(list.len(), 1);
    }
}
