//! Command-line interface for gridtactoe.

use clap::Parser;
use std::path::PathBuf;

/// Gridtactoe - tic-tac-toe on an N×N grid, three in a row wins
#[derive(Parser, Debug)]
#[command(name = "gridtactoe")]
#[command(about = "Play tic-tac-toe on an N×N grid against a random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board dimension N (at least 3), overrides the settings file
    #[arg(long)]
    pub size: Option<usize>,

    /// Pixel size of one grid cell, overrides the settings file
    #[arg(long)]
    pub cell_size: Option<u16>,

    /// Seed for the computer's move selection, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file path (the terminal belongs to the game while it runs)
    #[arg(long, default_value = "gridtactoe.log")]
    pub log_file: PathBuf,
}
