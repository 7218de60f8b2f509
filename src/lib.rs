//! TTL Store - An in-process key-value store
//!
//! Augments a plain map with time-based expiration, capacity-bound eviction
//! of the entry closest to expiring, and collision-checked random keys.

pub mod cache;
pub mod config;
pub mod error;
pub mod handle;
pub mod tasks;

pub use cache::{CacheStore, Entry, StoreStats, WriteOutcome};
pub use config::Config;
pub use error::{Result, StoreError};
pub use handle::ExpiringStore;
pub use tasks::{spawn_cleanup_task, CleanupHandle};
