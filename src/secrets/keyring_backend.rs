use super::{SecretBackend, StoreError};

/// OS keychain (macOS Keychain, Windows Credential Manager, Linux keyutils).
pub struct KeyringBackend {
    service: String,
}

impl KeyringBackend {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, entry: &str) -> Result<keyring::Entry, StoreError> {
        keyring::Entry::new(&self.service, entry).map_err(unavailable)
    }
}

fn unavailable(err: keyring::Error) -> StoreError {
    StoreError::Unavailable {
        backend: "keychain",
        reason: err.to_string(),
    }
}

impl SecretBackend for KeyringBackend {
    fn name(&self) -> &'static str {
        "keychain"
    }

    fn get(&self, entry: &str) -> Result<Option<String>, StoreError> {
        match self.entry(entry)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(unavailable(err)),
        }
    }

    fn set(&self, entry: &str, value: &str) -> Result<(), StoreError> {
        self.entry(entry)?.set_password(value).map_err(unavailable)
    }

    fn delete(&self, entry: &str) -> Result<(), StoreError> {
        match self.entry(entry)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(unavailable(err)),
        }
    }
}
