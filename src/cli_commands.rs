use std::path::PathBuf;

use clap::Subcommand;

use crate::{CardCommands, ConfigCommands, NotesCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and cache the session token in secure storage
    Login {
        /// Service base URL (saved to config)
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        username: String,
        #[arg(long, env = "SECLAB_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Clear the cached token and any saved payment card
    Logout,

    /// Show the cached session and whether the service accepts it
    Status {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Read or add shared notes
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },

    /// Manage the saved payment card
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },

    /// Show or change client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Where `--home` points when not given.
pub(crate) fn default_home() -> PathBuf {
    PathBuf::from(seclab::store::DEFAULT_HOME_DIR)
}
