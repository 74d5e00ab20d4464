use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use seclab::credentials::CredentialCache;
use seclab::model::{ClientConfig, Note, StoreKind};
use seclab::notes_feed::{FeedSource, NotesFeed};
use seclab::payment::PaymentVault;
use seclab::remote::{ApiClient, ApiError};
use seclab::secrets::{SERVICE_NAME, SecretChain};
use seclab::session::Session;
use seclab::store::LocalStore;

use crate::{CardCommands, Commands, ConfigCommands, NotesCommands};

/// Everything a command needs: config, a service client and a restored session.
struct Client {
    cfg: ClientConfig,
    api: ApiClient,
    session: Session,
}

impl Client {
    fn open(home: &Path) -> Result<Self> {
        let store = LocalStore::open_or_init(home)?;
        let cfg = store.read_config()?;
        let api = ApiClient::from_config(&cfg)?;

        let chain = Arc::new(SecretChain::for_kind(cfg.store, SERVICE_NAME));
        let mut session = Session::new(
            CredentialCache::new(chain.clone()),
            PaymentVault::new(chain),
        )
        .with_offline_demo(cfg.offline_demo);
        session.restore();

        Ok(Self {
            cfg,
            api,
            session,
        })
    }

    fn require_token(&self) -> Result<&str> {
        self.session
            .token()
            .context("not logged in (run `seclab login --username ... --password ...`)")
    }
}

pub(crate) fn handle_command(home: &Path, command: Commands) -> Result<()> {
    match command {
        Commands::Login {
            url,
            username,
            password,
        } => {
            if let Some(url) = url {
                let store = LocalStore::open_or_init(home)?;
                let mut cfg = store.read_config()?;
                cfg.base_url = url;
                store.write_config(&cfg)?;
            }

            let mut client = Client::open(home)?;
            let claims = client
                .session
                .login(&client.api, &username, &password)
                .context("login")?;
            println!(
                "Logged in as {} ({}) at {}",
                claims.name,
                username,
                client.api.base_url()
            );
        }

        Commands::Logout => {
            let mut client = Client::open(home)?;
            client.session.logout();
            println!("Logged out");
        }

        Commands::Status { json } => {
            let client = Client::open(home)?;
            handle_status(&client, json)?;
        }

        Commands::Notes { command } => {
            let client = Client::open(home)?;
            handle_notes_command(&client, command)?;
        }

        Commands::Card { command } => {
            let client = Client::open(home)?;
            handle_card_command(&client, command)?;
        }

        Commands::Config { command } => {
            let store = LocalStore::open_or_init(home)?;
            handle_config_command(&store, command)?;
        }
    }

    Ok(())
}

fn handle_status(client: &Client, json: bool) -> Result<()> {
    let (Some(username), Some(claims), Some(token)) = (
        client.session.username(),
        client.session.claims(),
        client.session.token(),
    ) else {
        if json {
            println!("{}", serde_json::json!({"logged_in": false}));
        } else {
            println!("Not logged in");
        }
        return Ok(());
    };

    let service = match client.api.whoami(token) {
        Ok(_) => "accepted".to_string(),
        Err(ApiError::Forbidden(_)) | Err(ApiError::Unauthorized(_)) => "rejected".to_string(),
        Err(err) => format!("unreachable ({})", err),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "logged_in": true,
                "username": username,
                "name": claims.name,
                "sub": claims.sub,
                "exp": claims.exp,
                "service": service,
                "base_url": client.cfg.base_url,
            }))
            .context("serialize status json")?
        );
    } else {
        println!("user: {} ({})", claims.name, username);
        println!("sub: {}", claims.sub);
        if let Some(exp) = claims.exp {
            println!("expires: {}", fmt_epoch(exp));
        }
        println!("service: {} {}", client.cfg.base_url, service);
    }
    Ok(())
}

fn fmt_epoch(secs: u64) -> String {
    time::OffsetDateTime::from_unix_timestamp(secs as i64)
        .ok()
        .and_then(|t| {
            t.format(&time::format_description::well_known::Rfc3339)
                .ok()
        })
        .unwrap_or_else(|| secs.to_string())
}

fn handle_notes_command(client: &Client, command: NotesCommands) -> Result<()> {
    let token = client.require_token()?;
    let mut feed = NotesFeed::new();

    match command {
        NotesCommands::List { json } => {
            feed.refresh(&client.api, Some(token));
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(feed.notes()).context("serialize notes json")?
                );
            } else {
                for note in feed.notes() {
                    println!("{:>4}  {}  {}", note.id, note.timestamp, note.text);
                }
            }
            if feed.source() == FeedSource::Offline {
                eprintln!("(service unavailable; showing offline sample notes)");
            }
        }
        NotesCommands::Add { text } => {
            let note = feed.add(&client.api, Some(token), &text)?;
            println!("{}", describe_added(&feed, &note));
        }
    }
    Ok(())
}

/// Offline ids are local placeholders, so they are not reported.
fn describe_added(feed: &NotesFeed, note: &Note) -> String {
    match feed.source() {
        FeedSource::Live => format!("Added note {}", note.id),
        FeedSource::Offline => "Service unavailable; note was not saved".to_string(),
    }
}

fn handle_card_command(client: &Client, command: CardCommands) -> Result<()> {
    let vault = client.session.payments();
    match command {
        CardCommands::Save { number, cvv } => {
            client.require_token()?;
            let card = vault.save(&number, &cvv)?;
            println!("Saved card {}", card.masked());
        }
        CardCommands::Show => match vault.load() {
            Some(card) => println!("{}", card.masked()),
            None => println!("No saved card"),
        },
        CardCommands::Clear => {
            vault.clear();
            println!("Card removed");
        }
    }
    Ok(())
}

fn handle_config_command(store: &LocalStore, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("base_url: {}", cfg.base_url);
                println!("store: {}", cfg.store.as_str());
                match &cfg.pinned_cert {
                    Some(p) => println!("pinned_cert: {}", p.display()),
                    None => println!("pinned_cert: (none)"),
                }
                println!("offline_demo: {}", cfg.offline_demo);
            }
        }
        ConfigCommands::Set {
            url,
            store: store_kind,
            pinned_cert,
            clear_pinned_cert,
            offline_demo,
        } => {
            let mut cfg = store.read_config()?;
            apply_config_changes(
                &mut cfg,
                ConfigChanges {
                    url,
                    store: store_kind,
                    pinned_cert,
                    clear_pinned_cert,
                    offline_demo,
                },
            )?;
            store.write_config(&cfg)?;
            println!("Config updated");
        }
    }
    Ok(())
}

#[derive(Default)]
struct ConfigChanges {
    url: Option<String>,
    store: Option<String>,
    pinned_cert: Option<PathBuf>,
    clear_pinned_cert: bool,
    offline_demo: Option<bool>,
}

fn apply_config_changes(cfg: &mut ClientConfig, changes: ConfigChanges) -> Result<()> {
    if let Some(url) = changes.url {
        reqwest::Url::parse(&url).with_context(|| format!("parse url {}", url))?;
        cfg.base_url = url;
    }
    if let Some(store) = changes.store {
        cfg.store = store.parse::<StoreKind>()?;
    }
    if changes.clear_pinned_cert {
        cfg.pinned_cert = None;
    }
    if let Some(path) = changes.pinned_cert {
        if !path.is_file() {
            anyhow::bail!("pinned certificate {} not found", path.display());
        }
        cfg.pinned_cert = Some(path);
    }
    if let Some(enabled) = changes.offline_demo {
        cfg.offline_demo = enabled;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli_exec_tests.rs"]
mod tests;
