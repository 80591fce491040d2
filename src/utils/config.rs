// Centralized configuration for FFInfo Bot

/// Player info endpoint, overridable via INFO_API_URL
pub const DEFAULT_INFO_API_URL: &str = "http://raw.thug4ff.com/info";

/// Profile-card image endpoint, overridable via PROFILE_CARD_URL
pub const DEFAULT_PROFILE_CARD_URL: &str = "https://genprofile-24nr.onrender.com/api/profile";

/// Config file path, overridable via INFO_CONFIG_FILE
pub const DEFAULT_CONFIG_FILE: &str = "info_channels.json";

pub const COMMAND_PREFIX: &str = "!";

/// UIDs are all digits and at least this long
pub const MIN_UID_DIGITS: usize = 6;

/// Explicit bound on outbound HTTP requests
pub const HTTP_TIMEOUT_SECS: u64 = 10;

pub const REPORT_FOOTER: &str = "DEVELOPED BY MIDOU X CHEAT";

/// Discord embed colors
pub mod colors {
    pub const SUCCESS: u32 = 0x2ecc71;
    pub const ERROR: u32 = 0xff0000;
}

/// Validate a player UID: digits only, at least MIN_UID_DIGITS of them
pub fn is_valid_uid(uid: &str) -> bool {
    uid.len() >= MIN_UID_DIGITS && uid.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uid() {
        assert!(is_valid_uid("123456"));
        assert!(is_valid_uid("98765432101"));
    }

    #[test]
    fn test_short_uid_rejected() {
        assert!(!is_valid_uid("12345"));
        assert!(!is_valid_uid(""));
    }

    #[test]
    fn test_non_numeric_uid_rejected() {
        assert!(!is_valid_uid("12345a"));
        assert!(!is_valid_uid("abcdef"));
        assert!(!is_valid_uid("１２３４５６")); // full-width digits are not ascii
        assert!(!is_valid_uid("123 456"));
    }
}
