//! Secret storage for the client: an ordered chain of backends.
//!
//! The first backend is the most trustworthy one available (the OS keychain);
//! later ones are weaker fallbacks that only see writes when everything in
//! front of them failed.

use thiserror::Error;

mod chain;
mod keyring_backend;
mod memory;

#[cfg(test)]
pub(crate) mod testing;

pub use self::chain::SecretChain;
pub use self::keyring_backend::KeyringBackend;
pub use self::memory::MemoryBackend;

/// Keychain service name every client entry lives under.
pub const SERVICE_NAME: &str = "seclab";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{backend} unavailable: {reason}")]
    Unavailable {
        backend: &'static str,
        reason: String,
    },

    #[error("no secret backend accepted the write")]
    Exhausted,
}

pub trait SecretBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// `Ok(None)` when the entry does not exist.
    fn get(&self, entry: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, entry: &str, value: &str) -> Result<(), StoreError>;

    /// Deleting a missing entry succeeds.
    fn delete(&self, entry: &str) -> Result<(), StoreError>;
}
