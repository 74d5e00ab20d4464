use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::Commands;
use crate::cli_commands::default_home;

#[derive(Parser)]
#[command(name = "seclab")]
#[command(about = "Security lab client: session, notes and payment card", long_about = None)]
pub(crate) struct Cli {
    /// Client home directory (config and TUI log)
    #[arg(long, env = "SECLAB_HOME")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let home = cli.home.unwrap_or_else(default_home);

    match cli.command {
        None => {
            seclab::tui::run_with_options(seclab::tui::TuiRunOptions { home })
                .context("run terminal UI")?;
        }
        Some(command) => {
            seclab::logging::init_stderr("seclab=warn");
            crate::cli_exec::handle_command(&home, command)?
        }
    }

    Ok(())
}
