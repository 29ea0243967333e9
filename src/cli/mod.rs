//! Interactive terminal front end.
//!
//! Owns the planner for the lifetime of the session and renders its state
//! after every mutating command, the way the original form re-renders its
//! lists on each input.

pub mod commands;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::cli::commands::{Command, COMMAND_HELP};
use crate::config::Config;
use crate::planner::MeetingPlanner;
use crate::utils::feedback::CommandFeedback;
use crate::utils::logging::{
    log_command_error, log_command_start, log_command_success, log_validation_error,
};
use crate::utils::validation::parse_position;

/// One interactive session: a planner plus the sink feedback is written
/// to. Generic over the sink so tests can drive it against a buffer.
pub struct Session<W: Write> {
    planner: MeetingPlanner,
    feedback: CommandFeedback<W>,
    default_participant_zone: String,
}

impl<W: Write> Session<W> {
    pub fn new(config: &Config, out: W) -> Result<Self> {
        let planner = MeetingPlanner::new(&config.organizer_zone)?;
        Ok(Self {
            planner,
            feedback: CommandFeedback::new(out),
            default_participant_zone: config.participant_zone.clone(),
        })
    }

    /// Opening banner with the current defaults.
    pub fn greet(&mut self) -> Result<()> {
        self.feedback.line("🕒 Time Zone Meeting Scheduler")?;
        self.feedback.info(&format!(
            "Organizer zone: {} (type 'help' for commands)",
            self.planner.meeting().organizer_zone.name()
        ))?;
        Ok(())
    }

    /// Handle one input line. Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(message) => {
                log_command_error("parse", &message);
                self.feedback.error(&message)?;
                return Ok(true);
            }
        };

        match command {
            Command::Help => self.show_help()?,
            Command::Time(input) => self.set_time(&input)?,
            Command::Zone(zone) => self.set_zone(&zone)?,
            Command::Add { name, zone } => self.add_participant(&name, zone.as_deref())?,
            Command::Remove(position) => self.remove_participant(&position)?,
            Command::List => self.list_participants()?,
            Command::Schedule { json } => self.show_schedule(json)?,
            Command::Zones(filter) => self.list_zones(filter.as_deref())?,
            Command::Quit => {
                self.feedback.info("Bye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn show_help(&mut self) -> Result<()> {
        self.feedback.line("Commands:")?;
        for (usage, description) in COMMAND_HELP {
            self.feedback
                .line(&format!("  {:<26} {}", usage, description))?;
        }
        Ok(())
    }

    fn set_time(&mut self, input: &str) -> Result<()> {
        log_command_start("time", Some(input));
        match self.planner.set_meeting_time(input) {
            Ok(()) if self.planner.meeting().has_time() => {
                log_command_success("time", Some(input));
                self.feedback
                    .success(&format!("Meeting time set to {}", input.trim()))?;
            }
            Ok(()) => {
                log_command_success("time", Some("cleared"));
                self.feedback.info("Meeting time cleared")?;
            }
            Err(e) => {
                log_validation_error("time", "meeting_time", input, &e.to_string());
                self.feedback.error(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn set_zone(&mut self, zone: &str) -> Result<()> {
        log_command_start("zone", Some(zone));
        match self.planner.set_organizer_zone(zone) {
            Ok(()) => {
                log_command_success("zone", Some(zone));
                self.feedback
                    .success(&format!("Organizer zone set to {}", zone))?;
            }
            Err(e) => {
                log_validation_error("zone", "organizer_zone", zone, &e.to_string());
                self.feedback.error(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn add_participant(&mut self, name: &str, zone: Option<&str>) -> Result<()> {
        let zone = zone.unwrap_or(&self.default_participant_zone);
        log_command_start("add", Some(name));
        match self.planner.add_participant(name, zone) {
            Ok(()) => {
                log_command_success("add", Some(name));
                self.feedback
                    .success(&format!("Added {} ({})", name.trim(), zone))?;
            }
            Err(e) => {
                log_validation_error("add", "participant", name, &e.to_string());
                self.feedback.error(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn remove_participant(&mut self, position: &str) -> Result<()> {
        log_command_start("remove", Some(position));
        let result = parse_position(position, self.planner.participants().len())
            .and_then(|index| self.planner.remove_participant(index));
        match result {
            Ok(removed) => {
                log_command_success("remove", Some(&removed.name));
                self.feedback
                    .success(&format!("Removed {}", removed.name))?;
            }
            Err(e) => {
                log_validation_error("remove", "position", position, &e.to_string());
                self.feedback.error(&e.to_string())?;
            }
        }
        Ok(())
    }

    fn list_participants(&mut self) -> Result<()> {
        if self.planner.participants().is_empty() {
            self.feedback.info("No participants added yet.")?;
            return Ok(());
        }
        for (i, participant) in self.planner.participants().iter().enumerate() {
            self.feedback.line(&format!(
                "{}. {} ({})",
                i + 1,
                participant.name,
                participant.zone.name()
            ))?;
        }
        Ok(())
    }

    fn show_schedule(&mut self, json: bool) -> Result<()> {
        log_command_start("schedule", None);
        let rows = match self.planner.schedule() {
            Ok(rows) => rows,
            Err(e) => {
                log_command_error("schedule", &e.to_string());
                self.feedback.error(&e.to_string())?;
                return Ok(());
            }
        };
        if rows.is_empty() {
            self.feedback.info("No participants added yet.")?;
            return Ok(());
        }
        if json {
            self.feedback.line(&serde_json::to_string_pretty(&rows)?)?;
            return Ok(());
        }
        for (i, row) in rows.iter().enumerate() {
            self.feedback.line(&format!(
                "{}. {} ({}): {}",
                i + 1,
                row.name,
                row.zone,
                row.local_time
            ))?;
        }
        Ok(())
    }

    fn list_zones(&mut self, filter: Option<&str>) -> Result<()> {
        let filter = filter.map(str::to_lowercase);
        let names: Vec<_> = self
            .planner
            .zone_names()
            .into_iter()
            .filter(|name| match &filter {
                Some(f) => name.to_lowercase().contains(f),
                None => true,
            })
            .collect();
        if names.is_empty() {
            self.feedback.warning("No matching time zones")?;
            return Ok(());
        }
        for name in &names {
            self.feedback.line(name)?;
        }
        self.feedback
            .info(&format!("{} time zones listed", names.len()))?;
        Ok(())
    }
}

/// Read commands from stdin until `quit` or end of input.
pub fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(config, io::stdout().lock())?;
    session.greet()?;
    for line in stdin.lock().lines() {
        if !session.handle_line(&line?)? {
            break;
        }
    }
    Ok(())
}
