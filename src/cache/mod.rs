//! Cache Module
//!
//! Provides the in-process entry store with TTL expiration, soonest-to-expire
//! eviction and unique key generation.

mod entry;
mod eviction;
mod keygen;
mod outcome;
mod stats;
mod store;


// Re-export public types
pub use entry::Entry;
pub use eviction::EarliestExpiryEvictor;
pub use keygen::{generate_unique_key, random_hex_key, MAX_KEY_ATTEMPTS};
pub use outcome::WriteOutcome;
pub use stats::StoreStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
