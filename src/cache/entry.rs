//! Entry Module
//!
//! Defines the uniform wrapper stored for every key: the caller's value plus
//! its expiration and last-update timestamps.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

// == Entry ==
/// A stored value with its expiration metadata.
///
/// Serializes as `{"value": .., "expireAt": .., "updateAt": ..}` for every
/// value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry<V> {
    /// The stored value
    pub value: V,
    /// Instant at or after which the entry is stale
    pub expire_at: DateTime<Utc>,
    /// Instant of the most recent write
    pub update_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `expire_ms` - TTL in milliseconds, added to "now" for `expire_at`
    pub fn new(value: V, expire_ms: u64) -> Self {
        Self::stamped(value, Utc::now(), expire_ms)
    }

    /// Creates an entry written at `now`.
    ///
    /// A TTL too large to represent saturates at the latest representable instant.
    pub fn stamped(value: V, now: DateTime<Utc>, expire_ms: u64) -> Self {
        let expire_at = i64::try_from(expire_ms)
            .ok()
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            value,
            expire_at,
            update_at: now,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiration predicate used by the sweeper: stale once `expire_at <= now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_at <= now
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let remaining = (self.expire_at - Utc::now()).num_milliseconds();
        u64::try_from(remaining).unwrap_or(0)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_stamps_expiration_from_now() {
        let now = Utc::now();
        let entry = Entry::stamped("value", now, 1_000);

        assert_eq!(entry.value, "value");
        assert_eq!(entry.update_at, now);
        assert_eq!(entry.expire_at, now + TimeDelta::milliseconds(1_000));
        assert!(!entry.is_expired_at(now));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = Entry::new(1u32, 50);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(80));

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = Entry::stamped("test", now, 0);

        // expire_at == now counts as expired
        assert!(entry.is_expired_at(now));
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = Entry::new("test", 10_000);

        let remaining_ms = entry.ttl_remaining_ms();
        assert!(remaining_ms <= 10_000);
        assert!(remaining_ms >= 9_000);
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let entry = Entry::new((), u64::MAX);
        assert_eq!(entry.expire_at, DateTime::<Utc>::MAX_UTC);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_serializes_uniform_shape() {
        let now = Utc::now();
        let entry = Entry::stamped(vec![1, 2, 3], now, 1_000);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["value"], serde_json::json!([1, 2, 3]));
        assert!(json.get("expireAt").is_some());
        assert!(json.get("updateAt").is_some());
    }
}
