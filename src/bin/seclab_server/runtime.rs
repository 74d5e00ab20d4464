use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use seclab::token::TokenSigner;

use crate::notes_repo::MemoryNoteRepository;
use crate::routes::app;
use crate::types::AppState;
use crate::users::UserTable;

const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 3600;

#[derive(Parser)]
#[command(name = "seclab-server")]
#[command(about = "Session and notes service for the security lab client", long_about = None)]
pub(crate) struct Args {
    /// Address to listen on
    #[arg(long, env = "SECLAB_ADDR", default_value = "0.0.0.0:3000")]
    pub(crate) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(crate) addr_file: Option<PathBuf>,

    /// Shared secret for signing session tokens (random per process when unset)
    #[arg(long, env = "SECLAB_JWT_SECRET", hide_env_values = true)]
    pub(crate) jwt_secret: Option<String>,

    /// Session token lifetime in seconds (at most one year)
    #[arg(
        long,
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TOKEN_TTL_SECS)
    )]
    pub(crate) token_ttl_secs: u64,
}

pub(crate) async fn run() -> Result<()> {
    let args = Args::parse();
    seclab::logging::init_stderr("seclab_server=info,seclab=info");

    let state = Arc::new(build_state(&args)?);

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;

    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(%local_addr, "seclab-server listening");
    tracing::info!(
        users = ?state.users.usernames().collect::<Vec<_>>(),
        "demo accounts loaded"
    );

    if let Some(addr_file) = &args.addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

pub(crate) fn build_state(args: &Args) -> Result<AppState> {
    let secret = signing_secret(args.jwt_secret.as_deref())?;
    Ok(AppState {
        signer: Arc::new(TokenSigner::new(
            secret.as_bytes(),
            Duration::from_secs(args.token_ttl_secs),
        )),
        users: Arc::new(UserTable::seeded()),
        notes: Arc::new(MemoryNoteRepository::seeded()),
    })
}

pub(crate) fn signing_secret(configured: Option<&str>) -> Result<String> {
    if let Some(secret) = configured.filter(|s| !s.is_empty()) {
        return Ok(secret.to_string());
    }

    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("generate secret: {}", e))?;
    tracing::warn!("no --jwt-secret configured; tokens will not survive a restart");
    Ok(bytes.iter().map(|b| format!("{:02x}", b)).collect())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

#[cfg(test)]
#[path = "../../tests/bin/seclab_server/runtime_tests.rs"]
mod tests;
