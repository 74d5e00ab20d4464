use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum NotesCommands {
    /// List notes (falls back to sample data when the service is down)
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note
    Add { text: String },
}

#[derive(Subcommand)]
pub(crate) enum CardCommands {
    /// Save card number and CVV to secure storage
    Save {
        #[arg(long)]
        number: String,
        #[arg(long)]
        cvv: String,
    },

    /// Show the saved card, masked
    Show,

    /// Remove the saved card
    Clear,
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the current configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update configuration fields
    Set {
        #[arg(long)]
        url: Option<String>,
        /// Secret storage: keychain|memory
        #[arg(long)]
        store: Option<String>,
        /// PEM certificate to pin
        #[arg(long, conflicts_with = "clear_pinned_cert")]
        pinned_cert: Option<PathBuf>,
        #[arg(long)]
        clear_pinned_cert: bool,
        /// Allow the offline demo login when the service is unreachable
        #[arg(long)]
        offline_demo: Option<bool>,
    },
}
