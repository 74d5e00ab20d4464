use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::secrets::SecretChain;

const CREDENTIALS_ENTRY: &str = "credentials";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    None,
    Present { username: String, token: String },
}

#[derive(Serialize, Deserialize)]
struct StoredCredentials {
    username: String,
    token: String,
}

/// The single cached `(username, token)` pair.
#[derive(Clone)]
pub struct CredentialCache {
    chain: Arc<SecretChain>,
}

impl CredentialCache {
    pub fn new(chain: Arc<SecretChain>) -> Self {
        Self { chain }
    }

    pub fn load(&self) -> Credentials {
        let Some(raw) = self.chain.get(CREDENTIALS_ENTRY) else {
            return Credentials::None;
        };
        match serde_json::from_str::<StoredCredentials>(&raw) {
            Ok(s) if !s.username.is_empty() && !s.token.is_empty() => Credentials::Present {
                username: s.username,
                token: s.token,
            },
            Ok(_) => {
                self.reset();
                Credentials::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "cached credentials unreadable; purging");
                self.reset();
                Credentials::None
            }
        }
    }

    pub fn save(&self, username: &str, token: &str) -> Result<()> {
        let raw = serde_json::to_string(&StoredCredentials {
            username: username.to_string(),
            token: token.to_string(),
        })
        .context("serialize credentials")?;
        let backend = self
            .chain
            .set(CREDENTIALS_ENTRY, &raw)
            .context("store credentials")?;
        tracing::info!(backend, username, "stored credentials");
        Ok(())
    }

    /// Clear the entry from every backend, primary and fallback alike.
    pub fn reset(&self) {
        let failures = self.chain.delete(CREDENTIALS_ENTRY);
        if failures > 0 {
            tracing::warn!(failures, "credentials not cleared from every store");
        }
    }
}

#[cfg(test)]
#[path = "tests/credentials_tests.rs"]
mod tests;
