use std::fs;

use anyhow::{Context, Result};
use thiserror::Error;

use crate::model::Note;

mod endpoints;
mod http_client;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// True when the service never answered.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Login against the session service.
pub trait AuthApi {
    fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;
}

/// The protected notes resource.
pub trait NotesApi {
    fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError>;
    fn add_note(&self, token: &str, text: &str) -> Result<Note, ApiError>;
}

pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, pinned_cert: Option<&std::path::Path>) -> Result<Self> {
        let url =
            reqwest::Url::parse(base_url).with_context(|| format!("parse base url {}", base_url))?;
        if url.scheme() == "http" && !is_loopback(url.host_str().unwrap_or_default()) {
            tracing::warn!(
                base_url,
                "talking to a remote host over plain http; credentials travel unencrypted"
            );
        }

        let mut builder = reqwest::blocking::Client::builder().user_agent("seclab");
        if let Some(path) = pinned_cert {
            let pem = fs::read(path)
                .with_context(|| format!("read pinned certificate {}", path.display()))?;
            let cert = reqwest::Certificate::from_pem(&pem).context("parse pinned certificate")?;
            builder = builder
                .use_rustls_tls()
                .tls_built_in_root_certs(false)
                .add_root_certificate(cert);
            tracing::info!(cert = %path.display(), "certificate pinning enabled");
        }
        let client = builder.build().context("build reqwest client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(cfg: &crate::model::ClientConfig) -> Result<Self> {
        Self::new(&cfg.base_url, cfg.pinned_cert.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]" | "::1")
}

impl AuthApi for ApiClient {
    fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        ApiClient::login(self, username, password)
    }
}

impl NotesApi for ApiClient {
    fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
        ApiClient::list_notes(self, token)
    }

    fn add_note(&self, token: &str, text: &str) -> Result<Note, ApiError> {
        ApiClient::add_note(self, token, text)
    }
}

#[cfg(test)]
#[path = "tests/remote_tests.rs"]
mod tests;
