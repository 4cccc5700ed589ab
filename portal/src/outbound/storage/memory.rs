//! Process-local durable store.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{DurableStore, DurableStoreError};

/// Map-backed store. Values live as long as the adapter.
#[derive(Debug, Default)]
pub struct InMemoryDurableStore {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryDurableStore {
    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect(),
            ),
        }
    }
}

impl DurableStore for InMemoryDurableStore {
    fn read(&self, key: &str) -> Result<Option<String>, DurableStoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DurableStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DurableStoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
