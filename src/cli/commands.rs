//! Line-oriented command parsing for the interactive session.

/// Commands accepted at the prompt. A leading `/` is allowed and the
/// command word is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display the command overview
    Help,
    /// Set (or, with no argument, clear) the meeting time
    Time(String),
    /// Change the organizer's time zone
    Zone(String),
    /// Add a participant; the zone falls back to the configured default
    Add { name: String, zone: Option<String> },
    /// Remove a participant by their position in the listing
    Remove(String),
    /// List participants in insertion order
    List,
    /// Show the meeting time in every participant's zone
    Schedule { json: bool },
    /// List zone identifiers, optionally filtered by substring
    Zones(Option<String>),
    /// End the session
    Quit,
}

/// Usage/description pairs backing the `help` output.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("time YYYY-MM-DDTHH:MM", "Set the meeting time (no argument clears it)"),
    ("zone AREA/LOCATION", "Set the organizer's time zone"),
    ("add NAME [AREA/LOCATION]", "Add a participant"),
    ("remove N", "Remove the participant at position N"),
    ("list", "List participants"),
    ("schedule [--json]", "Show everyone's local meeting time"),
    ("zones [FILTER]", "List known time zone identifiers"),
    ("help", "Display this help message"),
    ("quit", "End the session"),
];

impl Command {
    /// Parse one input line. Empty lines are `None`; unrecognized input
    /// is an error message suitable for direct display.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let line = line.strip_prefix('/').unwrap_or(line);

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" => Command::Help,
            "time" => Command::Time(rest.to_string()),
            "zone" => {
                if rest.is_empty() {
                    return Err("usage: zone AREA/LOCATION".to_string());
                }
                Command::Zone(rest.to_string())
            }
            "add" => parse_add(rest)?,
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err("usage: remove N".to_string());
                }
                Command::Remove(rest.to_string())
            }
            "list" | "ls" => Command::List,
            "schedule" | "times" => Command::Schedule {
                json: matches!(rest, "--json" | "json"),
            },
            "zones" => Command::Zones(if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            }),
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(format!(
                    "unknown command '{}' (try 'help')",
                    other
                ))
            }
        };
        Ok(Some(command))
    }
}

/// `add NAME [ZONE]`: the zone, when present, is the final
/// `Area/Location` token; everything before it is the name, so names may
/// contain spaces without quoting.
fn parse_add(rest: &str) -> Result<Command, String> {
    if rest.is_empty() {
        return Err("usage: add NAME [AREA/LOCATION]".to_string());
    }
    match rest.rsplit_once(char::is_whitespace) {
        Some((name, last)) if last.contains('/') => Ok(Command::Add {
            name: name.trim().to_string(),
            zone: Some(last.to_string()),
        }),
        _ => Ok(Command::Add {
            name: rest.to_string(),
            zone: None,
        }),
    }
}
