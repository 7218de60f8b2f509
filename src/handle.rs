//! Expiring Store Handle
//!
//! Thread-safe public surface. Owns the entry map behind a single lock and
//! the background sweep task started at construction.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

use crate::cache::{CacheStore, Entry, StoreStats, WriteOutcome};
use crate::config::Config;
use crate::error::Result;
use crate::tasks::{spawn_cleanup_task, CleanupHandle};

/// Key-value store with TTL expiration, capacity eviction and unique keys.
///
/// Every operation takes the store lock exactly once, so compound
/// check-then-act sequences (and sweeps) never interleave. Share it across
/// threads with `Arc<ExpiringStore<V>>`.
///
/// # Example
/// ```no_run
/// use ttl_store::{Config, ExpiringStore};
///
/// #[tokio::main]
/// async fn main() -> ttl_store::Result<()> {
///     let store = ExpiringStore::new(Config {
///         max_items: Some(1_000),
///         expire_ms: 60_000,
///         ..Config::default()
///     })?;
///
///     let key = store.unique_key()?;
///     store.add(&key, "session data".to_string())?;
///     assert!(store.get(&key)?.is_some());
///
///     store.stop_cleanup();
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ExpiringStore<V> {
    inner: Arc<Mutex<CacheStore<V>>>,
    cleanup: CleanupHandle,
    cleanup_interval: Duration,
}

impl<V> ExpiringStore<V>
where
    V: Clone + Send + 'static,
{
    // == Constructor ==
    /// Creates an empty store and starts its sweep task.
    ///
    /// # Errors
    /// - [`StoreError::InvalidConfig`](crate::StoreError::InvalidConfig) for a rejected config
    /// - [`StoreError::NoRuntime`](crate::StoreError::NoRuntime) outside a Tokio runtime
    pub fn new(config: Config) -> Result<Self> {
        let inner = Arc::new(Mutex::new(CacheStore::new(&config)?));
        let cleanup_interval = config.cleanup_interval();
        let cleanup = spawn_cleanup_task(inner.clone(), cleanup_interval)?;

        info!(
            max_items = ?config.max_items,
            expire_ms = config.expire_ms,
            key_length = config.key_length,
            cleanup_interval_ms = config.cleanup_interval_ms,
            "Expiring store initialized"
        );

        Ok(Self {
            inner,
            cleanup,
            cleanup_interval,
        })
    }

    /// Creates a store from environment variables (see [`Config::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    // == CRUD ==
    /// Inserts a new key; [`WriteOutcome::AlreadyExists`] if it is present.
    pub fn add(&self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        self.inner.lock().add(key, value)
    }

    /// Overwrites an existing key; [`WriteOutcome::NotFound`] if it is absent.
    pub fn update(&self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        self.inner.lock().update(key, value)
    }

    /// Creates or overwrites a key.
    pub fn upsert(&self, key: &str, value: V) -> Result<WriteOutcome<V>> {
        self.inner.lock().upsert(key, value)
    }

    /// Returns a copy of the entry for `key`, if present.
    pub fn get(&self, key: &str) -> Result<Option<Entry<V>>> {
        Ok(self.inner.lock().get(key)?.cloned())
    }

    /// Removes `key`. Returns whether it was present.
    pub fn delete(&self, key: &str) -> Result<bool> {
        self.inner.lock().delete(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.lock().contains_key(key)
    }

    // == Maintenance ==
    /// Runs a sweep now, independent of the timer. Returns entries removed.
    pub fn sweep_expired(&self) -> usize {
        self.inner.lock().sweep_expired()
    }

    /// Generates a random hex key not present in the store at the time of return.
    ///
    /// Does not reserve the key; pass it to [`add`](Self::add) to claim it.
    pub fn unique_key(&self) -> Result<String> {
        self.inner.lock().unique_key()
    }

    /// Cancels the recurring sweep. Idempotent.
    pub fn stop_cleanup(&self) {
        self.cleanup.stop();
    }

    pub fn is_cleanup_running(&self) -> bool {
        self.cleanup.is_running()
    }

    // == Accessors ==
    /// Current number of entries.
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn max_items(&self) -> Option<usize> {
        self.inner.lock().max_items()
    }

    pub fn expire_ms(&self) -> u64 {
        self.inner.lock().expire_ms()
    }

    pub fn key_length(&self) -> usize {
        self.inner.lock().key_length()
    }

    pub fn cleanup_interval(&self) -> Duration {
        self.cleanup_interval
    }

    pub fn stats(&self) -> StoreStats {
        self.inner.lock().stats()
    }
}
