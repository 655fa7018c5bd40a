//! Per-event write serialization.
//!
//! The budget check in `add_user` reads the current allocation and then writes a
//! new user. Two writers on the same event must not interleave between those
//! steps, so every event-scoped mutation runs while holding that event's lock.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use eventadmin_core::EventId;

/// One async mutex per event, created on first use.
///
/// Entries are never evicted. Events are never removed either, so the map is
/// bounded by the number of events.
#[derive(Debug, Default)]
pub struct EventWriteLocks {
    inner: Mutex<HashMap<EventId, Arc<AsyncMutex<()>>>>,
}

impl EventWriteLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive write access to `event_id`.
    pub async fn acquire(&self, event_id: EventId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(map.entry(event_id).or_default())
        };
        lock.lock_owned().await
    }
}
