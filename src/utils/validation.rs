use crate::error::SchedulerError;

/// Participant names must contain at least one non-whitespace character.
/// Length is capped so a pasted paragraph cannot become a list entry.
pub fn validate_participant_name(name: &str) -> Result<(), SchedulerError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(SchedulerError::InvalidName);
    }

    if name.len() > 100 {
        return Err(SchedulerError::InvalidName);
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(SchedulerError::InvalidName);
    }

    Ok(())
}

/// Parse a one-based list position as shown in CLI listings into a
/// zero-based index.
pub fn parse_position(arg: &str, len: usize) -> Result<usize, SchedulerError> {
    let position: usize = arg
        .trim()
        .parse()
        .map_err(|_| SchedulerError::IndexOutOfRange(0))?;
    if position == 0 || position > len {
        return Err(SchedulerError::IndexOutOfRange(position));
    }
    Ok(position - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_participant_name_valid() {
        assert!(validate_participant_name("Alice").is_ok());
        assert!(validate_participant_name("  Bob  ").is_ok());
        assert!(validate_participant_name("María José").is_ok());
        assert!(validate_participant_name("X").is_ok());
    }

    #[test]
    fn test_validate_participant_name_empty() {
        assert!(validate_participant_name("").is_err());
        assert!(validate_participant_name("   ").is_err());
        assert!(validate_participant_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_participant_name_too_long() {
        let long_name = "a".repeat(101);
        assert!(validate_participant_name(&long_name).is_err());

        let max_name = "a".repeat(100);
        assert!(validate_participant_name(&max_name).is_ok());
    }

    #[test]
    fn test_validate_participant_name_line_breaks() {
        assert!(validate_participant_name("Alice\nBob").is_err());
        assert!(validate_participant_name("Alice\rBob").is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("1", 3).unwrap(), 0);
        assert_eq!(parse_position("3", 3).unwrap(), 2);
        assert!(parse_position("0", 3).is_err());
        assert!(parse_position("4", 3).is_err());
        assert!(parse_position("abc", 3).is_err());
        assert!(parse_position("-1", 3).is_err());
    }
}
