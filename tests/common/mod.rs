use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

pub struct ServerGuard {
    pub base_url: String,
    _scratch: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let scratch = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = scratch.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_seclab-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--jwt-secret",
            TEST_JWT_SECRET,
        ])
        .env_remove("SECLAB_ADDR")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn seclab-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        _scratch: scratch,
        child,
    })
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Log in over raw HTTP and return the issued token.
#[allow(dead_code)]
pub fn login(base_url: &str, username: &str, password: &str) -> Result<String> {
    let resp: serde_json::Value = reqwest::blocking::Client::new()
        .post(format!("{}/login", base_url))
        .json(&serde_json::json!({"username": username, "password": password}))
        .send()
        .context("login")?
        .error_for_status()
        .context("login status")?
        .json()
        .context("parse login")?;
    resp.get("token")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .context("login response missing token")
}
