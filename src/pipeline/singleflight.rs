//! Per-key mutual exclusion for regeneration.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed lock map: at most one regeneration in flight per lesson key.
/// Waiters queue on the same lock and re-check the store once they hold
/// it, picking up the winner's result instead of generating again.
#[derive(Default)]
pub struct FlightMap {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FlightMap {
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // TODO: evict idle entries; the map grows with distinct
            // (user, lesson) keys over a long-lived process.
            locks.entry(key.to_string()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
