//! Tictactoe - unified CLI
//!
//! Runs the console or terminal UI front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe::{GameConfig, run_console, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command.unwrap_or(Command::Console {
        player_one: None,
        player_two: None,
    }) {
        Command::Console {
            player_one,
            player_two,
        } => {
            init_console_tracing();
            let config = config.with_player_names(player_one, player_two);
            info!("Starting console game");
            run_console(io::stdin().lock(), io::stdout().lock(), &config)?;
            Ok(())
        }
        Command::Tui => {
            init_file_tracing(&config)?;
            run_tui(&config)
        }
    }
}

/// Logs to stderr; quiet unless RUST_LOG asks for more.
fn init_console_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Logs to the configured file to avoid interfering with the TUI.
fn init_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}
