use crate::model::StoreKind;

use super::{KeyringBackend, MemoryBackend, SecretBackend, StoreError};

pub struct SecretChain {
    backends: Vec<Box<dyn SecretBackend>>,
}

impl SecretChain {
    pub fn new(backends: Vec<Box<dyn SecretBackend>>) -> Self {
        Self { backends }
    }

    pub fn for_kind(kind: StoreKind, service: &str) -> Self {
        match kind {
            StoreKind::Keychain => Self::new(vec![
                Box::new(KeyringBackend::new(service)),
                Box::new(MemoryBackend::new()),
            ]),
            StoreKind::Memory => Self::new(vec![Box::new(MemoryBackend::new())]),
        }
    }

    pub fn backends(&self) -> &[Box<dyn SecretBackend>] {
        &self.backends
    }

    /// First present value wins. Backends that fail are skipped.
    pub fn get(&self, entry: &str) -> Option<String> {
        for backend in &self.backends {
            match backend.get(entry) {
                Ok(Some(value)) => return Some(value),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(backend = backend.name(), entry, error = %err, "secret read failed");
                }
            }
        }
        None
    }

    /// Write to the first backend that accepts the value and drop the entry
    /// from every other backend. Returns the name of the backend used.
    pub fn set(&self, entry: &str, value: &str) -> Result<&'static str, StoreError> {
        let mut stored_at = None;
        for (idx, backend) in self.backends.iter().enumerate() {
            match backend.set(entry, value) {
                Ok(()) => {
                    stored_at = Some(idx);
                    break;
                }
                Err(err) => {
                    tracing::error!(backend = backend.name(), entry, error = %err, "secret write failed");
                }
            }
        }

        let Some(idx) = stored_at else {
            return Err(StoreError::Exhausted);
        };

        let used = self.backends[idx].name();
        if idx > 0 {
            tracing::warn!(
                backend = used,
                entry,
                "secure storage unavailable; downgraded to a less secure store"
            );
        }

        for (other, backend) in self.backends.iter().enumerate() {
            if other == idx {
                continue;
            }
            if let Err(err) = backend.delete(entry) {
                tracing::debug!(backend = backend.name(), entry, error = %err, "stale secret not cleared");
            }
        }

        Ok(used)
    }

    /// Remove the entry everywhere. Returns how many backends failed to delete.
    pub fn delete(&self, entry: &str) -> usize {
        let mut failures = 0;
        for backend in &self.backends {
            if let Err(err) = backend.delete(entry) {
                failures += 1;
                tracing::warn!(backend = backend.name(), entry, error = %err, "secret delete failed");
            }
        }
        failures
    }
}

#[cfg(test)]
#[path = "../tests/secrets/chain_tests.rs"]
mod tests;
