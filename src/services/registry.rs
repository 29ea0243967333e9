use chrono_tz::{Tz, TZ_VARIANTS};

use crate::error::SchedulerError;

/// Source of time zone identifiers and their offset-transition schedules.
///
/// The conversion logic only ever talks to this trait, so the underlying
/// zone database can be swapped or updated (DST rules change by political
/// decision) without touching the conversion algorithm.
pub trait ZoneProvider {
    /// Ordered list of every known zone identifier, for populating
    /// zone-selection inputs.
    fn zone_names(&self) -> Vec<&'static str>;

    /// Resolve an identifier to its zone, including the full historical
    /// offset-transition schedule. Unknown identifiers are an error, never
    /// a fallback: a wrong zone silently treated as UTC produces a
    /// plausible-looking but wrong time.
    fn resolve(&self, name: &str) -> Result<Tz, SchedulerError>;
}

/// Zone provider backed by the bundled IANA time zone database.
#[derive(Debug, Default, Clone, Copy)]
pub struct TzdbProvider;

impl TzdbProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ZoneProvider for TzdbProvider {
    fn zone_names(&self) -> Vec<&'static str> {
        TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }

    fn resolve(&self, name: &str) -> Result<Tz, SchedulerError> {
        name.parse::<Tz>()
            .map_err(|_| SchedulerError::InvalidZone(name.to_string()))
    }
}
