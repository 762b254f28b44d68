//! Durable cache protocol.
//!
//! A session-scoped key/value store that survives same-origin navigations.
//! The recorder keeps its action sequence there as a JSON string.

use crate::error::CacheError;

/// Session-scoped persistence for serialized recorder state.
pub trait DurableCache: Send {
    /// Load the value stored under `key`.
    fn load(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn store(&mut self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CacheError>;
}
