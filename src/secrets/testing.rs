use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{MemoryBackend, SecretBackend, StoreError};

/// Memory-backed store whose reads and writes can be switched off, shared with
/// the test through an `Arc` so its contents stay observable.
#[derive(Clone, Default)]
pub(crate) struct FlakyBackend {
    inner: Arc<MemoryBackend>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    label: &'static str,
}

impl FlakyBackend {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    pub(crate) fn broken(label: &'static str) -> Self {
        let b = Self::new(label);
        b.set_failing(true);
        b
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.fail_reads.store(failing, Ordering::SeqCst);
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn set_fail_writes(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    /// Bypasses the failure switches.
    pub(crate) fn peek(&self, entry: &str) -> Option<String> {
        self.inner.get(entry).ok().flatten()
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                backend: self.label,
                reason: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl SecretBackend for FlakyBackend {
    fn name(&self) -> &'static str {
        self.label
    }

    fn get(&self, entry: &str) -> Result<Option<String>, StoreError> {
        self.check(&self.fail_reads)?;
        self.inner.get(entry)
    }

    fn set(&self, entry: &str, value: &str) -> Result<(), StoreError> {
        self.check(&self.fail_writes)?;
        self.inner.set(entry, value)
    }

    fn delete(&self, entry: &str) -> Result<(), StoreError> {
        self.check(&self.fail_writes)?;
        self.inner.delete(entry)
    }
}
