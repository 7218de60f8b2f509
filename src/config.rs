//! Configuration Module
//!
//! Handles loading, defaulting and validating store configuration.

use std::env;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Result, StoreError};

/// Default time-to-live for entries: 24 hours.
pub const DEFAULT_EXPIRE_MS: u64 = 86_400_000;

/// Default period between background sweeps: 24 hours.
pub const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 86_400_000;

/// Default number of hex characters in a generated key.
pub const DEFAULT_KEY_LENGTH: usize = 8;

/// Recommended range for `key_length`. Values outside it only warn.
pub const RECOMMENDED_KEY_LENGTH: std::ops::RangeInclusive<usize> = 6..=32;

/// Store configuration parameters.
///
/// Supplied once at construction and immutable afterwards. Can be built in
/// code, deserialized (camelCase field names, missing fields take defaults)
/// or read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Maximum number of entries, `None` = unbounded
    pub max_items: Option<usize>,
    /// Milliseconds added to "now" to compute an entry's expiration
    pub expire_ms: u64,
    /// Hex characters in keys produced by the key generator
    pub key_length: usize,
    /// Milliseconds between background sweep runs
    pub cleanup_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_STORE_MAX_ITEMS` - Maximum entries (default: unbounded)
    /// - `TTL_STORE_EXPIRE_MS` - Entry TTL in milliseconds (default: 86400000)
    /// - `TTL_STORE_KEY_LENGTH` - Generated key length (default: 8)
    /// - `TTL_STORE_CLEANUP_INTERVAL_MS` - Sweep period in milliseconds (default: 86400000)
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_items: env::var("TTL_STORE_MAX_ITEMS")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(defaults.max_items),
            expire_ms: env::var("TTL_STORE_EXPIRE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expire_ms),
            key_length: env::var("TTL_STORE_KEY_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.key_length),
            cleanup_interval_ms: env::var("TTL_STORE_CLEANUP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cleanup_interval_ms),
        }
    }

    // == Validate ==
    /// Checks the configuration before a store is built from it.
    ///
    /// Hard failures: `max_items` of zero, `key_length` of zero and a zero
    /// `cleanup_interval_ms`. A `key_length` outside
    /// [`RECOMMENDED_KEY_LENGTH`] is accepted with a warning.
    pub fn validate(&self) -> Result<()> {
        if self.max_items == Some(0) {
            return Err(StoreError::InvalidConfig(
                "maxItems must be a positive integer".to_string(),
            ));
        }

        if self.key_length == 0 {
            return Err(StoreError::InvalidConfig(
                "keyLength must be greater than zero".to_string(),
            ));
        }

        if self.cleanup_interval_ms == 0 {
            return Err(StoreError::InvalidConfig(
                "cleanupIntervalMs must be greater than zero".to_string(),
            ));
        }

        if !RECOMMENDED_KEY_LENGTH.contains(&self.key_length) {
            warn!(
                key_length = self.key_length,
                "keyLength is outside the recommended range of {}..={}",
                RECOMMENDED_KEY_LENGTH.start(),
                RECOMMENDED_KEY_LENGTH.end()
            );
        }

        Ok(())
    }

    /// Sweep period as a [`Duration`].
    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_millis(self.cleanup_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: None,
            expire_ms: DEFAULT_EXPIRE_MS,
            key_length: DEFAULT_KEY_LENGTH,
            cleanup_interval_ms: DEFAULT_CLEANUP_INTERVAL_MS,
        }
    }
}
