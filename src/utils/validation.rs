use anyhow::{anyhow, Result};

pub const MAX_QUANTITY: u32 = 50;
pub const MAX_ADDRESS_LEN: usize = 300;
pub const MAX_NOTE_LEN: usize = 200;

/// Accepts 10 to 15 digits, surrounding whitespace ignored.
pub fn validate_mobile(input: &str) -> Result<String> {
    let mobile = input.trim();

    if mobile.is_empty() {
        return Err(anyhow!("Mobile number cannot be empty"));
    }

    if !mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(anyhow!("Mobile number can only contain digits"));
    }

    if mobile.len() < 10 {
        return Err(anyhow!("Mobile number must be at least 10 digits long"));
    }

    if mobile.len() > 15 {
        return Err(anyhow!("Mobile number cannot be longer than 15 digits"));
    }

    Ok(mobile.to_string())
}

pub fn parse_quantity(input: &str) -> Result<u32> {
    let quantity: u32 = input
        .trim()
        .parse()
        .map_err(|_| anyhow!("Quantity must be a whole number"))?;

    if quantity == 0 {
        return Err(anyhow!("Quantity must be at least 1"));
    }

    if quantity > MAX_QUANTITY {
        return Err(anyhow!("Quantity cannot be more than {}", MAX_QUANTITY));
    }

    Ok(quantity)
}

pub fn validate_address(input: &str) -> Result<String> {
    let address = input.trim();

    if address.is_empty() {
        return Err(anyhow!("Address cannot be empty"));
    }

    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(anyhow!("Address cannot be longer than {} characters", MAX_ADDRESS_LEN));
    }

    Ok(address.to_string())
}

/// `skip` (any case) means no note.
pub fn normalize_note(input: &str) -> Result<String> {
    let note = input.trim();

    if note.eq_ignore_ascii_case("skip") {
        return Ok(String::new());
    }

    if note.chars().count() > MAX_NOTE_LEN {
        return Err(anyhow!("Note cannot be longer than {} characters", MAX_NOTE_LEN));
    }

    Ok(note.to_string())
}

pub fn is_confirmation(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Supergroups live around -100xxxxxxxxxx; anything further out is bogus
    if chat_id < -2_000_000_000_000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mobile_valid() {
        assert_eq!(validate_mobile("9876543210").unwrap(), "9876543210");
        assert_eq!(validate_mobile("  919876543210 ").unwrap(), "919876543210");
    }

    #[test]
    fn test_validate_mobile_invalid() {
        assert!(validate_mobile("").is_err());
        assert!(validate_mobile("12345").is_err());
        assert!(validate_mobile("+919876543210").is_err());
        assert!(validate_mobile("98765 43210").is_err());
        assert!(validate_mobile(&"9".repeat(16)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3").unwrap(), 3);
        assert_eq!(parse_quantity(" 50 ").unwrap(), 50);
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("51").is_err());
        assert!(parse_quantity("two").is_err());
    }

    #[test]
    fn test_normalize_note() {
        assert_eq!(normalize_note("skip").unwrap(), "");
        assert_eq!(normalize_note("SKIP").unwrap(), "");
        assert_eq!(normalize_note(" less spicy ").unwrap(), "less spicy");
        assert!(normalize_note(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_is_confirmation() {
        assert!(is_confirmation("yes"));
        assert!(is_confirmation(" YES "));
        assert!(!is_confirmation("y"));
        assert!(!is_confirmation("no"));
    }

    #[test]
    fn test_validate_telegram_chat_id() {
        assert!(validate_telegram_chat_id(1062517560).is_ok());
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3_000_000_000_000).is_err());
    }
}
