//! Short key generation.
//!
//! Keys are fixed-length lowercase hexadecimal strings cut from freshly
//! generated random 128-bit values.

use rand::Rng;

/// Length of a short key in hexadecimal characters.
pub const KEY_LENGTH: usize = 6;

/// Upper bound on collision retries before generation gives up.
///
/// The keyspace holds 16^6 ≈ 16.7M keys, so hitting this bound at the
/// designed scale would take a store that is nearly full.
const MAX_ATTEMPTS: usize = 1000;

/// No unused short key was found within the retry bound.
#[derive(Debug, thiserror::Error)]
#[error("no free short key found after {attempts} attempts")]
pub struct KeyspaceExhausted {
    pub attempts: usize,
}

/// Produces a single random candidate key.
///
/// Formats a random `u128` as 32 hex digits and keeps the first
/// [`KEY_LENGTH`] characters. The result always matches `^[0-9a-f]{6}$`.
pub fn candidate() -> String {
    let value: u128 = rand::rng().random();
    let mut hex = format!("{value:032x}");
    hex.truncate(KEY_LENGTH);
    hex
}

/// Generates a key not currently present according to `is_taken`.
///
/// Loops up to [`MAX_ATTEMPTS`] times generating candidates and checking
/// them against the supplied membership predicate. The returned key is
/// guaranteed unused only at the moment of the check; the caller must
/// hold exclusive access over the backing key set across both this call
/// and the subsequent insertion for the guarantee to carry over.
///
/// # Errors
///
/// Returns [`KeyspaceExhausted`] when every candidate collided.
pub fn generate_unique<F>(is_taken: F) -> Result<String, KeyspaceExhausted>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..MAX_ATTEMPTS {
        let key = candidate();

        if !is_taken(&key) {
            return Ok(key);
        }
    }

    Err(KeyspaceExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_hex_lower(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn test_candidate_has_correct_length() {
        assert_eq!(candidate().len(), KEY_LENGTH);
    }

    #[test]
    fn test_candidate_is_lowercase_hex() {
        for _ in 0..100 {
            let key = candidate();
            assert!(is_hex_lower(&key), "unexpected key shape: {key}");
        }
    }

    #[test]
    fn test_candidates_are_spread_across_keyspace() {
        let mut keys = HashSet::new();

        for _ in 0..1000 {
            keys.insert(candidate());
        }

        // A handful of birthday collisions is possible in 16.7M keys,
        // anything below this bound would mean broken randomness.
        assert!(keys.len() > 990);
    }

    #[test]
    fn test_generate_unique_skips_taken_keys() {
        let taken: HashSet<String> = std::iter::repeat_with(candidate).take(100).collect();

        let key = generate_unique(|k| taken.contains(k)).unwrap();

        assert!(!taken.contains(&key));
        assert_eq!(key.len(), KEY_LENGTH);
    }

    #[test]
    fn test_generate_unique_exhaustion() {
        let result = generate_unique(|_| true);

        let err = result.unwrap_err();
        assert_eq!(err.attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn test_generate_unique_empty_set() {
        assert!(generate_unique(|_| false).is_ok());
    }
}
