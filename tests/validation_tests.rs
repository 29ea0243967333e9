use tz_meeting_scheduler::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_participant_names() {
        let valid_names = vec![
            "Alice".to_string(),
            "Mary Ann".to_string(),
            "José".to_string(),
            "A".to_string(),
            "a".repeat(100), // Exactly 100 characters
            "O'Brien".to_string(),
            "participant #1".to_string(),
        ];

        for name in valid_names {
            assert!(
                validate_participant_name(&name).is_ok(),
                "Should accept name: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_participant_names() {
        let invalid_names = vec![
            "".to_string(),       // Empty
            "   ".to_string(),    // Only whitespace
            "\t\n".to_string(),   // Only control whitespace
            "a".repeat(101),      // Too long
            "Ali\nce".to_string(), // Line break
        ];

        for name in invalid_names {
            assert!(
                validate_participant_name(&name).is_err(),
                "Should reject name: {:?}",
                name
            );
        }
    }

    #[test]
    fn test_participant_name_whitespace_handling() {
        // Surrounding whitespace is fine, it gets trimmed on add
        assert!(validate_participant_name("  Alice  ").is_ok());
        assert!(validate_participant_name("   ").is_err());
    }

    #[test]
    fn test_parse_position_one_based() {
        assert_eq!(parse_position("1", 5).unwrap(), 0);
        assert_eq!(parse_position("5", 5).unwrap(), 4);
        assert_eq!(parse_position(" 2 ", 5).unwrap(), 1);
    }

    #[test]
    fn test_parse_position_out_of_range() {
        assert!(parse_position("0", 5).is_err());
        assert!(parse_position("6", 5).is_err());
        assert!(parse_position("1", 0).is_err());
    }

    #[test]
    fn test_parse_position_not_a_number() {
        assert!(parse_position("first", 5).is_err());
        assert!(parse_position("", 5).is_err());
        assert!(parse_position("-1", 5).is_err());
        assert!(parse_position("1.5", 5).is_err());
    }
}
