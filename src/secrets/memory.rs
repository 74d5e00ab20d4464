use std::collections::HashMap;
use std::sync::Mutex;

use super::{SecretBackend, StoreError};

/// Process-memory store. Less secure than the keychain and gone on restart.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Unavailable {
            backend: "memory",
            reason: "lock poisoned".to_string(),
        })?;
        Ok(f(&mut entries))
    }
}

impl SecretBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, entry: &str) -> Result<Option<String>, StoreError> {
        self.with_entries(|m| m.get(entry).cloned())
    }

    fn set(&self, entry: &str, value: &str) -> Result<(), StoreError> {
        self.with_entries(|m| {
            m.insert(entry.to_string(), value.to_string());
        })?;
        tracing::debug!(entry, "stored secret in memory");
        Ok(())
    }

    fn delete(&self, entry: &str) -> Result<(), StoreError> {
        self.with_entries(|m| {
            m.remove(entry);
        })
    }
}
