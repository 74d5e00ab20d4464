use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    pub base_url: String,

    #[serde(default)]
    pub store: StoreKind,

    /// PEM certificate the client pins to. When set, built-in roots are not trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_cert: Option<PathBuf>,

    /// Allow the offline demo login when the service is unreachable.
    #[serde(default)]
    pub offline_demo: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: 1,
            base_url: DEFAULT_BASE_URL.to_string(),
            store: StoreKind::default(),
            pinned_cert: None,
            offline_demo: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// OS keychain first, process memory when the keychain fails.
    #[default]
    Keychain,

    /// Process memory only.
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Keychain => "keychain",
            StoreKind::Memory => "memory",
        }
    }
}

impl std::str::FromStr for StoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keychain" => Ok(StoreKind::Keychain),
            "memory" => Ok(StoreKind::Memory),
            other => Err(anyhow::anyhow!(
                "unknown store '{}' (expected keychain or memory)",
                other
            )),
        }
    }
}
