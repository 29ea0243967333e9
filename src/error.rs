use thiserror::Error;

/// Errors produced by the scheduler core.
///
/// `InvalidZone` and `InvalidDateTime` are distinct conditions: an
/// unknown zone identifier must never be masked by a fallback zone, while
/// a malformed date-time is a user input error. An empty meeting time is
/// neither; it renders as a placeholder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// The zone identifier is not present in the time zone registry.
    #[error("unknown time zone '{0}'")]
    InvalidZone(String),

    /// The meeting time could not be interpreted as a calendar date-time.
    #[error("invalid date-time '{0}' (expected YYYY-MM-DDTHH:MM)")]
    InvalidDateTime(String),

    /// Participant names must contain at least one non-whitespace character.
    #[error("participant name cannot be empty")]
    InvalidName,

    /// Remove was asked for a position beyond the participant list.
    #[error("no participant at position {0}")]
    IndexOutOfRange(usize),
}
