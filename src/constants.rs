//! Application-wide constants.
//!
//! Centralizes magic numbers and strings for better maintainability.

// ============================================================================
// Short Code Generation Constants
// ============================================================================

/// Characters used for generating short codes (URL-safe alphanumeric)
pub const SHORT_CODE_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Default length of generated short codes
pub const DEFAULT_SHORT_CODE_LENGTH: usize = 6;

/// Default maximum attempts when allocating a unique short code
pub const DEFAULT_MAX_GENERATE_ATTEMPTS: u32 = 10;

// ============================================================================
// URL Validation Constants
// ============================================================================

/// Maximum allowed URL length in characters
pub const MAX_URL_LENGTH: usize = 2048;

// ============================================================================
// Demo Seed Constants
// ============================================================================

/// Short code of the demo mapping seeded at startup
pub const DEMO_SHORT_CODE: &str = "abc123";

/// Target URL of the demo mapping seeded at startup
pub const DEMO_TARGET_URL: &str = "https://example.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_length() {
        // Ensure alphabet contains exactly 62 characters (0-9, a-z, A-Z)
        assert_eq!(SHORT_CODE_ALPHABET.len(), 62);
    }

    #[test]
    fn test_alphabet_is_alphanumeric() {
        assert!(SHORT_CODE_ALPHABET.iter().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generation_constants() {
        assert!(DEFAULT_SHORT_CODE_LENGTH >= 1);
        assert!(DEFAULT_MAX_GENERATE_ATTEMPTS >= 1);
    }

    #[test]
    fn test_demo_seed_constants() {
        assert_eq!(DEMO_SHORT_CODE.len(), DEFAULT_SHORT_CODE_LENGTH);
        assert!(DEMO_TARGET_URL.starts_with("https://"));
    }
}
