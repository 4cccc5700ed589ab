//! Port for durable client-side key-value storage.
//!
//! Mirrors the browser's `localStorage`: string values under string keys,
//! synchronous access, values surviving a reload. The session store keeps its
//! token here so a returning visitor stays signed in.

use super::define_port_error;

define_port_error! {
    /// Errors raised by durable store adapters.
    pub enum DurableStoreError {
        /// Storage is disabled or inaccessible (private mode, quota, sandbox).
        Unavailable { message: String } =>
            "durable store unavailable: {message}",
        /// A read or write failed while storage was reachable.
        Io { key: String, message: String } =>
            "durable store i/o failed for {key}: {message}",
    }
}

/// Synchronous string key-value storage.
#[cfg_attr(test, mockall::automock)]
pub trait DurableStore: Send + Sync {
    /// Return the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, DurableStoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<(), DurableStoreError>;

    /// Remove `key`; removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), DurableStoreError>;
}
