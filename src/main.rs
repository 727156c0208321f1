//! Gridtactoe - terminal shell
//!
//! Thin presentation layer around the game library: parses the CLI,
//! resolves settings, and hands an owned game to the event loop.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gridtactoe::{GameConfig, RandomChooser};
use tracing::info;

/// Default settings file looked up when `--config` is not given.
const SETTINGS_FILE: &str = "gridtactoe.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file: the terminal belongs to the game while it runs.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = load_config(&cli)?;
    let chooser = match cli.seed {
        Some(seed) => RandomChooser::seeded(seed),
        None => RandomChooser::new(),
    };

    info!("starting gridtactoe");
    tui::run(&config, chooser)
}

/// Resolves settings: explicit file, default file if present, built-in
/// defaults - with CLI flags winning over all of them.
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = if let Some(path) = &cli.config {
        GameConfig::from_file(path)?
    } else if std::path::Path::new(SETTINGS_FILE).exists() {
        GameConfig::from_file(SETTINGS_FILE)?
    } else {
        GameConfig::default()
    };

    let config = base.with_overrides(cli.size, cli.cell_size)?;
    info!(
        size = *config.size(),
        cell_size = *config.cell_size(),
        "settings resolved"
    );
    Ok(config)
}
