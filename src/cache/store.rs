//! Cache Store Module
//!
//! Single-owner entry map with the CRUD surface, capacity protection and
//! expiration sweep. Not synchronized; [`ExpiringStore`](crate::ExpiringStore)
//! wraps it in a lock for shared use.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::cache::{
    generate_unique_key, EarliestExpiryEvictor, Entry, StoreStats, WriteOutcome, MAX_KEY_LENGTH,
};
use crate::config::Config;
use crate::error::{Result, StoreError};

// == Cache Store ==
/// Entry map with TTL stamping and soonest-to-expire eviction.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, Entry<V>>,
    /// Capacity policy
    evictor: EarliestExpiryEvictor,
    /// Removal statistics
    stats: StoreStats,
    /// TTL in milliseconds applied on every write
    expire_ms: u64,
    /// Hex length of generated keys
    key_length: usize,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store after validating `config`.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            entries: HashMap::new(),
            evictor: EarliestExpiryEvictor::new(config.max_items),
            stats: StoreStats::new(),
            expire_ms: config.expire_ms,
            key_length: config.key_length,
        })
    }

    // == Add ==
    /// Inserts a new key.
    ///
    /// Returns [`WriteOutcome::AlreadyExists`] without touching the store if
    /// the key is present. Otherwise makes room if needed and stores a freshly
    /// stamped entry.
    pub fn add(&mut self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        validate_key(key)?;

        if self.entries.contains_key(key) {
            return Ok(WriteOutcome::AlreadyExists);
        }

        self.make_room();
        Ok(self.write(key, value))
    }

    // == Update ==
    /// Overwrites an existing key.
    ///
    /// Returns [`WriteOutcome::NotFound`] if the key is absent. The capacity
    /// policy still runs for a present key, so a full store may evict one
    /// entry (possibly this one, which is then written back).
    pub fn update(&mut self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        validate_key(key)?;

        if !self.entries.contains_key(key) {
            return Ok(WriteOutcome::NotFound);
        }

        self.make_room();
        Ok(self.write(key, value))
    }

    // == Upsert ==
    /// Creates or overwrites a key. Capacity is only protected for new keys.
    pub fn upsert(&mut self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        validate_key(key)?;

        if !self.entries.contains_key(key) {
            self.make_room();
        }

        Ok(self.write(key, value))
    }

    // == Get ==
    /// Returns the entry for `key`, if present.
    ///
    /// Entries past their expiration are still returned until a sweep removes
    /// them; `expire_at` is part of the result.
    pub fn get(&self, key: &str) -> Result<Option<&Entry<V>>> {
        validate_key(key)?;
        Ok(self.entries.get(key))
    }

    // == Delete ==
    /// Removes an entry. Returns whether the key was present.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;

        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        Ok(removed)
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Sweep Expired ==
    /// Removes all entries whose `expire_at` is at or before now.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Unique Key ==
    /// Generates a random hex key not currently present in the store.
    pub fn unique_key(&self) -> Result<String> {
        generate_unique_key(self.key_length, |candidate| {
            self.entries.contains_key(candidate)
        })
    }

    // == Accessors ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn max_items(&self) -> Option<usize> {
        self.evictor.max_items()
    }

    pub fn expire_ms(&self) -> u64 {
        self.expire_ms
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Returns current store statistics.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Make Room ==
    /// Frees one slot when at capacity: sweeps first, then evicts the entry
    /// closest to expiring if the sweep was not enough.
    fn make_room(&mut self) {
        if !self.evictor.is_full(self.entries.len()) {
            return;
        }

        let swept = self.sweep_expired();
        if swept > 0 {
            debug!(swept, "Capacity sweep reclaimed expired entries");
        }

        if !self.evictor.is_full(self.entries.len()) {
            return;
        }

        if let Some(victim) = self.evictor.select_victim(&self.entries) {
            self.entries.remove(&victim);
            self.stats.record_eviction();
            debug!(key = %victim, "Evicted entry closest to expiring");
        }
    }

    fn write(&mut self, key: &str, value: V) -> WriteOutcome<V> {
        let entry = Entry::new(value, self.expire_ms);
        self.entries.insert(key.to_string(), entry.clone());
        self.stats.set_total_entries(self.entries.len());
        WriteOutcome::stored(key, entry)
    }
}

// == Key Validation ==
/// Rejects keys that break the key contract before any mutation.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey("Key cannot be empty".to_string()));
    }

    if key.len() > MAX_KEY_LENGTH {
        return Err(StoreError::InvalidKey(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }

    Ok(())
}
