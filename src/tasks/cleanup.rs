//! Expiration Sweep Task
//!
//! Background task that periodically removes expired entries from a store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;
use crate::error::{Result, StoreError};

/// Owned handle to a running sweep task.
///
/// Stopping is explicit through [`CleanupHandle::stop`]; dropping the handle
/// stops the task as well so it cannot outlive its owner.
#[derive(Debug)]
pub struct CleanupHandle {
    task: JoinHandle<()>,
    stopped: AtomicBool,
}

impl CleanupHandle {
    /// Cancels the recurring sweep. Safe to call any number of times.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            self.task.abort();
            info!("TTL sweep task stopped");
        }
    }

    /// Returns true until the task has been stopped or has finished.
    pub fn is_running(&self) -> bool {
        !self.stopped.load(Ordering::SeqCst) && !self.task.is_finished()
    }

    /// Returns true once the underlying task has fully terminated.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CleanupHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The task sleeps first, so the first sweep happens one interval after
/// spawning. Each tick takes the store lock for the duration of one sweep.
///
/// # Errors
/// Returns [`StoreError::NoRuntime`] when called outside a Tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::<String>::new(&Config::default())?));
/// let cleanup = spawn_cleanup_task(store.clone(), Duration::from_secs(60))?;
/// // Later, during shutdown:
/// cleanup.stop();
/// ```
pub fn spawn_cleanup_task<V>(
    store: Arc<Mutex<CacheStore<V>>>,
    interval: Duration,
) -> Result<CleanupHandle>
where
    V: Clone + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;

    let task = runtime.spawn(async move {
        info!(
            interval_ms = (interval.as_millis() as u64),
            "Starting TTL sweep task"
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.lock().sweep_expired();

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    });

    Ok(CleanupHandle {
        task,
        stopped: AtomicBool::new(false),
    })
}
