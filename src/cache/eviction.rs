//! Eviction Module
//!
//! Capacity protection by evicting the entry closest to expiring. No access
//! recency is tracked anywhere, so this is not an LRU policy.

use std::collections::HashMap;

use crate::cache::Entry;

// == Earliest Expiry Evictor ==
/// Decides when the store is full and which entry to give up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EarliestExpiryEvictor {
    /// Capacity bound, `None` = unbounded
    max_items: Option<usize>,
}

impl EarliestExpiryEvictor {
    // == Constructor ==
    /// Creates an evictor for the given capacity bound.
    pub fn new(max_items: Option<usize>) -> Self {
        Self { max_items }
    }

    /// Returns the configured capacity bound.
    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    // == Is Full ==
    /// Returns true when `len` entries leave no room for another one.
    pub fn is_full(&self, len: usize) -> bool {
        self.max_items.is_some_and(|max| len >= max)
    }

    // == Select Victim ==
    /// Picks the entry with the earliest `expire_at`.
    ///
    /// Ties go to the lexicographically smallest key so the choice does not
    /// depend on map iteration order. Returns None for an empty map.
    pub fn select_victim<V>(&self, entries: &HashMap<String, Entry<V>>) -> Option<String> {
        entries
            .iter()
            .min_by(|(a_key, a), (b_key, b)| {
                a.expire_at
                    .cmp(&b.expire_at)
                    .then_with(|| a_key.cmp(b_key))
            })
            .map(|(key, _)| key.clone())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, Utc};

    fn entries_expiring_in(offsets_ms: &[(&str, i64)]) -> HashMap<String, Entry<u8>> {
        let now = Utc::now();
        offsets_ms
            .iter()
            .map(|(key, offset)| {
                let entry = Entry {
                    value: 0,
                    expire_at: now + TimeDelta::milliseconds(*offset),
                    update_at: now,
                };
                (key.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn test_unbounded_is_never_full() {
        let evictor = EarliestExpiryEvictor::new(None);
        assert!(!evictor.is_full(0));
        assert!(!evictor.is_full(usize::MAX));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let evictor = EarliestExpiryEvictor::new(Some(2));
        assert!(!evictor.is_full(1));
        assert!(evictor.is_full(2));
        assert!(evictor.is_full(3));
    }

    #[test]
    fn test_select_victim_empty() {
        let evictor = EarliestExpiryEvictor::new(Some(1));
        let entries: HashMap<String, Entry<u8>> = HashMap::new();
        assert_eq!(evictor.select_victim(&entries), None);
    }

    #[test]
    fn test_select_victim_earliest_expiry() {
        let evictor = EarliestExpiryEvictor::new(Some(3));
        let entries = entries_expiring_in(&[("late", 3_000), ("soon", 100), ("mid", 1_000)]);

        assert_eq!(evictor.select_victim(&entries), Some("soon".to_string()));
    }

    #[test]
    fn test_select_victim_tie_breaks_on_key() {
        let evictor = EarliestExpiryEvictor::new(Some(3));
        let entries = entries_expiring_in(&[("b", 500), ("c", 500), ("a", 500)]);

        assert_eq!(evictor.select_victim(&entries), Some("a".to_string()));
    }
}
