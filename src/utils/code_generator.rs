//! Short code generation utilities.
//!
//! Provides random, human-friendly code generation for shortened links.
//! Uniqueness is probabilistic only; collision handling lives in the
//! storage layer (see [`crate::application::services::LinkService`]).

use rand::Rng;

/// Characters allowed in generated short codes.
///
/// Letters and digits with the visually confusable glyphs (`0`/`O`,
/// `1`/`l`/`I`) removed, leaving 57 symbols. Codes drawn from this set can
/// be read off a screen and retyped without ambiguity.
const CODE_ALPHABET: &[u8] = b"abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Default length for generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Error returned when a caller requests a code of length zero.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("code length must be at least 1, got {0}")]
pub struct InvalidLengthError(pub usize);

/// Generates a random short code of the given length.
///
/// Each character is drawn independently (with replacement) from the
/// 57-symbol safe alphabet using the thread-local CSPRNG. No two calls
/// coordinate; callers that need uniqueness must check storage.
///
/// # Errors
///
/// Returns [`InvalidLengthError`] if `length` is zero.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_generator::{generate_short_code, DEFAULT_CODE_LENGTH};
///
/// let code = generate_short_code(DEFAULT_CODE_LENGTH).unwrap();
/// assert_eq!(code.len(), 6);
/// assert!(!code.contains(['0', 'O', 'l', 'I']));
/// ```
pub fn generate_short_code(length: usize) -> Result<String, InvalidLengthError> {
    generate_short_code_with(&mut rand::rng(), length)
}

/// Generates a random short code using the provided random source.
///
/// Behaves exactly like [`generate_short_code`] but draws randomness from
/// `rng`. Pass a seeded [`rand::rngs::StdRng`] to make generation
/// deterministic in tests without weakening production randomness.
///
/// # Errors
///
/// Returns [`InvalidLengthError`] if `length` is zero.
pub fn generate_short_code_with<R: Rng>(
    rng: &mut R,
    length: usize,
) -> Result<String, InvalidLengthError> {
    if length == 0 {
        return Err(InvalidLengthError(length));
    }

    let code = (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_57_symbols() {
        assert_eq!(CODE_ALPHABET.len(), 57);
    }

    #[test]
    fn test_alphabet_symbols_unique() {
        let unique: HashSet<_> = CODE_ALPHABET.iter().collect();
        assert_eq!(unique.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn test_alphabet_excludes_confusable_characters() {
        for confusable in [b'0', b'O', b'1', b'l', b'I'] {
            assert!(!CODE_ALPHABET.contains(&confusable));
        }
    }

    #[test]
    fn test_generate_default_length() {
        let code = generate_short_code(DEFAULT_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), 6);
    }

    #[test]
    fn test_generate_specified_length() {
        let code = generate_short_code(10).unwrap();
        assert_eq!(code.len(), 10);
    }

    #[test]
    fn test_generate_length_one() {
        let code = generate_short_code(1).unwrap();
        assert_eq!(code.len(), 1);
    }

    #[test]
    fn test_generate_exact_length_for_range() {
        for length in 1..=16 {
            let code = generate_short_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_generate_zero_length_is_error() {
        let result = generate_short_code(0);
        assert_eq!(result.unwrap_err(), InvalidLengthError(0));
    }

    #[test]
    fn test_generated_codes_exclude_confusable_characters() {
        for _ in 0..100 {
            let code = generate_short_code(DEFAULT_CODE_LENGTH).unwrap();
            assert!(
                !code.contains(['0', 'O', '1', 'l', 'I']),
                "code '{}' contains a confusable character",
                code
            );
        }
    }

    #[test]
    fn test_generated_codes_use_only_alphabet_characters() {
        let code = generate_short_code(64).unwrap();
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_repeated_calls_are_mostly_distinct() {
        let mut codes = HashSet::new();
        for _ in 0..100 {
            codes.insert(generate_short_code(DEFAULT_CODE_LENGTH).unwrap());
        }

        // 57^6 possible codes; expect at least 95 of 100 pairwise distinct.
        assert!(codes.len() >= 95, "only {} distinct codes", codes.len());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = generate_short_code_with(&mut StdRng::seed_from_u64(42), 8).unwrap();
        let b = generate_short_code_with(&mut StdRng::seed_from_u64(42), 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_generation_differs_across_seeds() {
        let a = generate_short_code_with(&mut StdRng::seed_from_u64(1), 12).unwrap();
        let b = generate_short_code_with(&mut StdRng::seed_from_u64(2), 12).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_seeded_generation_zero_length_is_error() {
        let result = generate_short_code_with(&mut StdRng::seed_from_u64(7), 0);
        assert!(result.is_err());
    }
}
