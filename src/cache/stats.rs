//! Store Statistics Module
//!
//! Counts removals made by the store itself. Reads are deliberately not
//! counted: the store keeps no access-frequency information.

use serde::Serialize;

// == Store Stats ==
/// Removal counters and current size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Entries removed to satisfy the capacity bound
    pub evictions: u64,
    /// Entries removed by sweeps because they expired
    pub expirations: u64,
    /// Sweeps run, scheduled or capacity-triggered
    pub sweeps: u64,
    /// Current number of entries in the store
    pub total_entries: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Sweep ==
    /// Records one sweep that removed `removed` entries.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.expirations += removed as u64;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
