//! Short identifier generation and validation.
//!
//! Identifiers are random strings over the 62-character alphanumeric
//! alphabet. Uniqueness is the caller's concern: [`generate_unique_short_id`]
//! takes an existence check and draws candidates until one is free, while the
//! database unique constraint remains the final authority at insert time.

use std::future::Future;

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Characters allowed in a short identifier.
pub const SHORT_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated identifiers.
pub const DEFAULT_SHORT_ID_LENGTH: usize = 6;

/// Maximum accepted length for a user-supplied identifier.
pub const MAX_SHORT_ID_LENGTH: usize = 16;

/// Path segments that can never be claimed as short identifiers.
///
/// These collide with routes served by the application itself.
pub const RESERVED_SHORT_IDS: &[&str] = &["api", "files", "health"];

/// Generates a random identifier of the given length.
pub fn generate_short_id(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| SHORT_ID_ALPHABET[rng.random_range(0..SHORT_ID_ALPHABET.len())] as char)
        .collect()
}

/// Returns true for non-empty strings composed entirely of alphabet characters.
pub fn is_valid_short_id(short_id: &str) -> bool {
    !short_id.is_empty() && short_id.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Validates a user-supplied custom identifier.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for reserved, over-length, or malformed
/// identifiers. Whether the identifier is already taken is checked separately
/// against the store.
pub fn validate_custom_short_id(short_id: &str) -> Result<(), AppError> {
    if RESERVED_SHORT_IDS.contains(&short_id) {
        return Err(AppError::bad_request(
            "This identifier is reserved",
            json!({ "short_id": short_id }),
        ));
    }

    if short_id.len() > MAX_SHORT_ID_LENGTH || !is_valid_short_id(short_id) {
        return Err(AppError::bad_request(
            "Invalid name for a short link",
            json!({ "short_id": short_id }),
        ));
    }

    Ok(())
}

/// Draws random identifiers until `exists` reports one absent.
///
/// The loop is unbounded: at the default length a repeated collision is
/// astronomically unlikely, and an arbitrary retry cap would turn that
/// near-impossibility into a spurious failure mode. The check is read-only,
/// so two concurrent callers can still race to the same identifier; the
/// insert path surfaces that as a conflict.
pub async fn generate_unique_short_id<F, Fut, E>(length: usize, mut exists: F) -> Result<String, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    loop {
        let candidate = generate_short_id(length);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::convert::Infallible;

    #[test]
    fn test_generate_short_id_has_requested_length() {
        for length in [1, 6, 16] {
            assert_eq!(generate_short_id(length).len(), length);
        }
    }

    #[test]
    fn test_generate_short_id_uses_only_alphabet_chars() {
        for _ in 0..100 {
            let short_id = generate_short_id(DEFAULT_SHORT_ID_LENGTH);
            assert!(short_id.bytes().all(|b| b.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_short_id_varies() {
        let mut seen = HashSet::new();
        for _ in 0..100 {
            seen.insert(generate_short_id(DEFAULT_SHORT_ID_LENGTH));
        }
        assert!(seen.len() > 90);
    }

    #[test]
    fn test_is_valid_short_id_accepts_letters_and_digits() {
        assert!(is_valid_short_id("abc123"));
        assert!(is_valid_short_id("Z"));
        assert!(is_valid_short_id("00000000"));
    }

    #[test]
    fn test_is_valid_short_id_rejects_empty() {
        assert!(!is_valid_short_id(""));
    }

    #[test]
    fn test_is_valid_short_id_rejects_whitespace_and_punctuation() {
        assert!(!is_valid_short_id("abc 123"));
        assert!(!is_valid_short_id("abc-123"));
        assert!(!is_valid_short_id("abc_123"));
        assert!(!is_valid_short_id("абв"));
    }

    #[test]
    fn test_validate_custom_short_id_rejects_reserved() {
        for &reserved in RESERVED_SHORT_IDS {
            assert!(validate_custom_short_id(reserved).is_err());
        }
    }

    #[test]
    fn test_validate_custom_short_id_rejects_over_length() {
        let short_id = "a".repeat(MAX_SHORT_ID_LENGTH + 1);
        assert!(validate_custom_short_id(&short_id).is_err());
    }

    #[test]
    fn test_validate_custom_short_id_accepts_max_length() {
        let short_id = "a".repeat(MAX_SHORT_ID_LENGTH);
        assert!(validate_custom_short_id(&short_id).is_ok());
    }

    #[tokio::test]
    async fn test_generate_unique_short_id_skips_taken_candidates() {
        // The first three candidates are reported taken, so the generator
        // must draw exactly four times and return the fourth.
        let draws = Cell::new(0usize);

        let result = generate_unique_short_id(DEFAULT_SHORT_ID_LENGTH, |_candidate| {
            let taken = draws.get() < 3;
            draws.set(draws.get() + 1);
            async move { Ok::<bool, Infallible>(taken) }
        })
        .await;

        assert_eq!(draws.get(), 4);
        let short_id = result.unwrap();
        assert_eq!(short_id.len(), DEFAULT_SHORT_ID_LENGTH);
    }

    #[tokio::test]
    async fn test_generate_unique_short_id_propagates_check_errors() {
        let result = generate_unique_short_id(DEFAULT_SHORT_ID_LENGTH, |_candidate| async {
            Err::<bool, &str>("store unavailable")
        })
        .await;

        assert_eq!(result.unwrap_err(), "store unavailable");
    }
}
