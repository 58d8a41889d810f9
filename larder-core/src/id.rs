//! Identifier generation
//!
//! Identifiers are a readable prefix followed by a random base62 suffix.
//! Uniqueness is statistical: nothing is looked up, so the suffix must be
//! long enough to make collisions negligible (16 characters give ~95 bits).

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::domain::recipe::{RECIPE_ID_PREFIX, RECIPE_ID_SUFFIX_LENGTH};

/// Generate `prefix` followed by `suffix_length` random alphanumeric characters
///
/// The suffix is drawn from the thread-local CSPRNG.
pub fn generate(prefix: &str, suffix_length: usize) -> String {
    let mut id = String::with_capacity(prefix.len() + suffix_length);
    id.push_str(prefix);
    id.extend(
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(suffix_length)
            .map(char::from),
    );
    id
}

/// Generate a fresh recipe identifier
pub fn recipe_id() -> String {
    generate(RECIPE_ID_PREFIX, RECIPE_ID_SUFFIX_LENGTH)
}
