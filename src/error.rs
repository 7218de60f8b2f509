//! Error types for the store
//!
//! Provides unified error handling using thiserror. Only contract violations
//! and environment problems are errors; "key already exists" and "key does
//! not exist" are ordinary outcomes reported through
//! [`WriteOutcome`](crate::cache::WriteOutcome).

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key violates the key contract (empty or too long)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configuration rejected at construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every generated key collided with an existing one
    #[error("Unable to generate a unique key after {attempts} attempts")]
    KeyExhausted { attempts: usize },

    /// The cleanup task needs a Tokio runtime to be spawned on
    #[error("No Tokio runtime available to run the cleanup task")]
    NoRuntime,
}

// == Result Type Alias ==
/// Convenience Result type for the store.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::InvalidKey("Key cannot be empty".to_string()).to_string(),
            "Invalid key: Key cannot be empty"
        );
        assert_eq!(
            StoreError::KeyExhausted { attempts: 16 }.to_string(),
            "Unable to generate a unique key after 16 attempts"
        );
    }
}
