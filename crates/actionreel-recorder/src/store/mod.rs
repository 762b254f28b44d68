//! Action store.
//!
//! Ordered action sequence of one recording session. Every mutation is
//! written through to a [`DurableCache`] and announced to subscribers.
//! Persistence failures never reach the caller: the sequence stays usable
//! in memory and the failure is logged.

mod cache;

pub use cache::{FileCache, MemoryCache, cache_from_config};

use actionreel_protocols::{Action, DurableCache};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Read model published after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreSnapshot {
    pub count: usize,
    /// Incremented on every mutation.
    pub revision: u64,
}

/// Ordered, persisted action sequence.
pub struct ActionStore {
    actions: Vec<Action>,
    cache: Box<dyn DurableCache>,
    key: String,
    revision: u64,
    snapshot_tx: watch::Sender<StoreSnapshot>,
}

impl ActionStore {
    /// Open the store under `key`, restoring any sequence already cached.
    pub fn open(cache: Box<dyn DurableCache>, key: impl Into<String>) -> Self {
        let key = key.into();
        let actions = restore(cache.as_ref(), &key);
        if !actions.is_empty() {
            info!("Restored {} recorded actions from cache", actions.len());
        }
        let (snapshot_tx, _) = watch::channel(StoreSnapshot {
            count: actions.len(),
            revision: 0,
        });
        Self {
            actions,
            cache,
            key,
            revision: 0,
            snapshot_tx,
        }
    }

    /// Append `action`, keeping timestamps non-decreasing.
    pub fn append(&mut self, mut action: Action) -> &Action {
        if let Some(last) = self.actions.last() {
            action.timestamp = action.timestamp.max(last.timestamp);
        }
        debug!(
            action_type = %action.action_type,
            index = self.actions.len(),
            "Appending action"
        );
        self.actions.push(action);
        self.changed();
        let index = self.actions.len() - 1;
        &self.actions[index]
    }

    /// Remove the action at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Action> {
        if index >= self.actions.len() {
            return None;
        }
        let removed = self.actions.remove(index);
        self.changed();
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.actions.clear();
        self.changed();
    }

    /// Replace the whole sequence, e.g. after editing.
    pub fn replace_all(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        self.changed();
    }

    pub fn count(&self) -> usize {
        self.actions.len()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Receiver of [`StoreSnapshot`]s for count badges and list views.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            count: self.actions.len(),
            revision: self.revision,
        }
    }

    /// Write the sequence to the cache. Called on every mutation and when
    /// the page unloads.
    pub fn persist(&mut self) {
        let json = match serde_json::to_string(&self.actions) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize recorded actions: {}", e);
                return;
            }
        };
        if let Err(e) = self.cache.store(&self.key, &json) {
            warn!("Failed to persist recorded actions under {}: {}", self.key, e);
        }
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.persist();
        self.snapshot_tx.send_replace(self.snapshot());
    }
}

fn restore(cache: &dyn DurableCache, key: &str) -> Vec<Action> {
    let raw = match cache.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to load recorded actions from {}: {}", key, e);
            return Vec::new();
        }
    };
    match Action::list_from_json(&raw) {
        Ok(actions) => actions,
        Err(e) => {
            warn!("Discarding unreadable recorded actions under {}: {}", key, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
