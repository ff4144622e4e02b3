//! Per-item serialization for the admission sequence.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// One async mutex per item id, created lazily.
///
/// Admission is a read-decide-write sequence against per-item state. Holding
/// the item's lock across the whole sequence keeps two concurrent creations
/// from both observing an empty conflict set and both committing overlapping
/// offers. Readers and cancellations do not take the lock; status refresh is
/// idempotent and safe to race.
#[derive(Default)]
pub(crate) struct ItemLocks {
  // TODO: prune entries with no outstanding guards (strong_count == 1).
  items: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ItemLocks {
  pub fn new() -> Self { Self::default() }

  /// Take the lock for `item_id`, creating it on first use.
  pub async fn acquire(&self, item_id: Uuid) -> OwnedMutexGuard<()> {
    let lock = {
      let mut items = self.items.lock().await;
      items.entry(item_id).or_default().clone()
    };
    lock.lock_owned().await
  }
}
