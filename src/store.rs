use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::ClientConfig;

pub const DEFAULT_HOME_DIR: &str = ".seclab";

/// Client home directory: `config.json` and the TUI log file.
///
/// Secrets never land here; they go through [`crate::secrets::SecretChain`].
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open `root`, creating it with a default config when missing.
    pub fn open_or_init(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            fs::create_dir_all(root)
                .with_context(|| format!("create client home {}", root.display()))?;
        }
        let store = Self {
            root: root.to_path_buf(),
        };
        if !store.config_path().exists() {
            store
                .write_config(&ClientConfig::default())
                .context("write default config")?;
        }
        Ok(store)
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("seclab.log")
    }

    pub fn read_config(&self) -> Result<ClientConfig> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let bytes = fs::read(&path).context("read config.json")?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported client config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ClientConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")?;
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
