//! Shared service utilities.

use nanoid::nanoid;

use crate::constants::SHORT_CODE_ALPHABET;

/// Generate a random short code using nanoid
///
/// Samples uniformly from the 62-character alphanumeric alphabet. No
/// uniqueness or unpredictability guarantee is made here; uniqueness is
/// enforced by the store's insert-if-absent at allocation time.
pub fn generate_short_code(length: usize) -> String {
    nanoid!(length, &SHORT_CODE_ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_short_code_length() {
        for length in [1, 6, 12] {
            assert_eq!(generate_short_code(length).len(), length);
        }
    }

    #[test]
    fn test_generate_short_code_is_alphanumeric() {
        let code = generate_short_code(64);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
