use food_order_bot::utils::validation::*;

#[cfg(test)]
mod validation_tests {
    use super::*;

    // Mobile number validation tests
    #[test]
    fn test_valid_mobile_numbers() {
        let valid = vec!["9876543210", "  9876543210  ", "919876543210", "123456789012345"];

        for mobile in valid {
            assert!(validate_mobile(mobile).is_ok(), "Should accept mobile: {}", mobile);
        }
        assert_eq!(validate_mobile(" 9876543210\n").unwrap(), "9876543210");
    }

    #[test]
    fn test_invalid_mobile_numbers() {
        let invalid = vec![
            "",                 // Empty
            "   ",              // Whitespace only
            "987654321",        // Too short
            "1234567890123456", // Too long
            "+919876543210",    // Plus sign
            "98765 43210",      // Inner space
            "98765-43210",      // Dash
            "phone",            // Letters
        ];

        for mobile in invalid {
            assert!(validate_mobile(mobile).is_err(), "Should reject mobile: '{}'", mobile);
        }
    }

    // Quantity parsing tests
    #[test]
    fn test_quantity_bounds() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
        assert_eq!(parse_quantity(&MAX_QUANTITY.to_string()).unwrap(), MAX_QUANTITY);

        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("51").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("2.5").is_err());
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("").is_err());
    }

    // Address validation tests
    #[test]
    fn test_address_validation() {
        assert_eq!(
            validate_address("  12 Lake Road, Kolkata ").unwrap(),
            "12 Lake Road, Kolkata"
        );
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LEN)).is_ok());

        assert!(validate_address("").is_err());
        assert!(validate_address("   ").is_err());
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LEN + 1)).is_err());
    }

    // Note normalisation tests
    #[test]
    fn test_note_skip_variants() {
        for skip in ["skip", "Skip", "SKIP", "  skip  "] {
            assert_eq!(normalize_note(skip).unwrap(), "", "'{}' should clear the note", skip);
        }
    }

    #[test]
    fn test_note_is_kept_and_trimmed() {
        assert_eq!(normalize_note(" extra spicy ").unwrap(), "extra spicy");
        assert_eq!(normalize_note("skip the onions").unwrap(), "skip the onions");
        assert!(normalize_note(&"n".repeat(MAX_NOTE_LEN)).is_ok());
        assert!(normalize_note(&"n".repeat(MAX_NOTE_LEN + 1)).is_err());
    }

    #[test]
    fn test_confirmation() {
        assert!(is_confirmation("yes"));
        assert!(is_confirmation("YES"));
        assert!(is_confirmation(" Yes "));

        assert!(!is_confirmation("no"));
        assert!(!is_confirmation("y"));
        assert!(!is_confirmation("yes please"));
        assert!(!is_confirmation(""));
    }

    // Chat ID validation tests
    #[test]
    fn test_valid_chat_ids() {
        let valid_ids = vec![
            123456789,        // Regular user chat
            -123456789,       // Group chat
            -1001234567890,   // Supergroup chat
            1,                // Minimum positive
        ];

        for chat_id in valid_ids {
            assert!(validate_telegram_chat_id(chat_id).is_ok(), "Should accept chat ID: {}", chat_id);
        }
    }

    #[test]
    fn test_invalid_chat_ids() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-2_000_000_000_001).is_err());
    }
}
