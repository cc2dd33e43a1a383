//! Command-line interface for the gridline TUI.

use clap::{Parser, ValueEnum};
use gridline_core::GameMode;
use std::path::PathBuf;

/// Gridline - generalized tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "gridline")]
#[command(about = "Line up marks on a grid before the computer does", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Field width in cells
    #[arg(long)]
    pub width: Option<i32>,

    /// Field height in cells
    #[arg(long)]
    pub height: Option<i32>,

    /// Run length required to win
    #[arg(long)]
    pub win_length: Option<i32>,

    /// Opponent mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to a TOML config file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's random fallback, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Opponent mode flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Play against the computer
    Computer,
    /// Two humans share the board
    Human,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Computer => GameMode::HumanVsComputer,
            ModeArg::Human => GameMode::HumanVsHuman,
        }
    }
}
