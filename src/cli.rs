//! Command-line arguments.

use clap::Parser;

use crate::core::{BoardConfig, ConfigError};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "term-tetris", version, about = "Falling-block puzzle game for the terminal")]
pub struct Args {
    /// Visible rows of the well.
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT)]
    pub board_height: usize,

    /// Columns of the well.
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH)]
    pub board_width: usize,

    /// Play with typed commands instead of the full-screen UI.
    #[arg(long)]
    pub text: bool,

    /// Seed for a reproducible piece sequence.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(self.board_height, self.board_width)
    }
}
