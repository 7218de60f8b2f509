//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside a store.
//!
//! # Tasks
//! - TTL Sweep: Removes expired entries at the configured interval

mod cleanup;

pub use cleanup::{spawn_cleanup_task, CleanupHandle};
