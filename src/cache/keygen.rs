//! Key Generator Module
//!
//! Produces random hex keys and retries on collision with existing keys.

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// Total attempts made by [`generate_unique_key`]: one try plus 15 retries.
pub const MAX_KEY_ATTEMPTS: usize = 16;

// == Random Hex Key ==
/// Generates `length` random hex characters.
///
/// Draws `ceil(length / 2)` random bytes, so odd lengths are truncated by one
/// character.
pub fn random_hex_key(length: usize) -> String {
    let mut bytes = vec![0u8; length.div_ceil(2)];
    rand::rng().fill(&mut bytes[..]);

    let mut key = hex::encode(bytes);
    key.truncate(length);
    key
}

// == Generate Unique Key ==
/// Generates a key for which `exists` returns false.
///
/// Gives up after [`MAX_KEY_ATTEMPTS`] candidates and reports
/// [`StoreError::KeyExhausted`] rather than handing back a colliding key.
///
/// # Arguments
/// * `length` - Number of hex characters per key
/// * `exists` - Collision check against the current store
pub fn generate_unique_key<F>(length: usize, exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    for attempt in 1..=MAX_KEY_ATTEMPTS {
        let candidate = random_hex_key(length);
        if !exists(&candidate) {
            return Ok(candidate);
        }
        debug!(attempt, "Generated key collided with an existing key");
    }

    warn!(
        attempts = MAX_KEY_ATTEMPTS,
        key_length = length,
        "Key generation exhausted without finding a free key"
    );
    Err(StoreError::KeyExhausted {
        attempts: MAX_KEY_ATTEMPTS,
    })
}
