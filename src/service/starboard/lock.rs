//! Per-message serialisation of reconciliations.
//!
//! Two reactions landing on the same message at once would otherwise both observe "no
//! record" and both send a repost. `MessageLocks` hands out one async mutex per original
//! message id; entries are dropped again once nobody holds or waits on them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = HashMap<u64, Arc<AsyncMutex<()>>>;

#[derive(Clone, Default)]
pub struct MessageLocks {
    entries: Arc<Mutex<LockMap>>,
}

impl MessageLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other reconciliation holds `message_id`, then holds it until the
    /// returned guard is dropped.
    pub async fn lock(&self, message_id: u64) -> MessageLockGuard {
        let entry = self
            .entries()
            .entry(message_id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone();

        let guard = entry.lock_owned().await;

        MessageLockGuard {
            message_id,
            locks: self.clone(),
            guard: Some(guard),
        }
    }

    /// Number of messages currently locked or waited on.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    fn entries(&self) -> MutexGuard<'_, LockMap> {
        // The map is left consistent by every critical section, so a poisoned lock is safe
        // to reuse.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the lock for one message; releases it and prunes the entry on drop.
pub struct MessageLockGuard {
    message_id: u64,
    locks: MessageLocks,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for MessageLockGuard {
    fn drop(&mut self) {
        self.guard.take();

        let mut entries = self.locks.entries();
        let unused = entries
            .get(&self.message_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1);
        if unused {
            entries.remove(&self.message_id);
        }
    }
}
