use anyhow::{anyhow, Result};
use std::env;

use crate::services::registry::{TzdbProvider, ZoneProvider};

/// Default zone the meeting time is anchored in until changed.
pub const DEFAULT_ORGANIZER_ZONE: &str = "Asia/Kolkata";
/// Default zone for a new participant when none is given with `add`.
pub const DEFAULT_PARTICIPANT_ZONE: &str = "America/New_York";

#[derive(Debug, Clone)]
pub struct Config {
    pub organizer_zone: String,
    pub participant_zone: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `from_env` goes
    /// through here; tests use it directly to avoid mutating
    /// process-global environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let organizer_zone = lookup("SCHEDULER_ORGANIZER_ZONE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORGANIZER_ZONE.to_string());

        let participant_zone = lookup("SCHEDULER_PARTICIPANT_ZONE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PARTICIPANT_ZONE.to_string());

        // An invalid zone override must fail at startup, not surface later
        // as a conversion error.
        let provider = TzdbProvider::new();
        provider
            .resolve(&organizer_zone)
            .map_err(|_| anyhow!("SCHEDULER_ORGANIZER_ZONE is not a known time zone: {}", organizer_zone))?;
        provider
            .resolve(&participant_zone)
            .map_err(|_| anyhow!("SCHEDULER_PARTICIPANT_ZONE is not a known time zone: {}", participant_zone))?;

        Ok(Config {
            organizer_zone,
            participant_zone,
        })
    }
}
