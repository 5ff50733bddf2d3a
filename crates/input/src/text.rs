//! Line-oriented commands for the text host.

use thiserror::Error;

use crate::types::Command;

/// Help text listing the textual and keyboard commands.
pub const INSTRUCTIONS: &str = "\
How to play:
  L / Left arrow    move the piece left
  R / Right arrow   move the piece right
  D / Down arrow    move the piece down
  DD / Space        drop the piece to the bottom
  U / Up arrow      rotate the piece clockwise
  P                 pause or resume
  H / ?             show these instructions
  N / r             start a new game
  Q / Esc           quit

Complete a row to clear it. The game ends when the stack reaches the top.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("no command given")]
    Empty,
    #[error("commands are letters only, got {0:?}")]
    NotAlphabetic(String),
    #[error("unsupported command {0:?}")]
    Unsupported(String),
}

/// Parse one line of input. Surrounding whitespace and case are ignored.
///
/// ```
/// use term_tetris_input::text::{parse_command, ParseCommandError};
/// use term_tetris_input::types::Command;
///
/// assert_eq!(parse_command(" dd\n"), Ok(Command::HardDrop));
/// assert_eq!(parse_command(""), Err(ParseCommandError::Empty));
/// ```
pub fn parse_command(line: &str) -> Result<Command, ParseCommandError> {
    let word = line.trim();
    if word.is_empty() {
        return Err(ParseCommandError::Empty);
    }
    if !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ParseCommandError::NotAlphabetic(word.to_string()));
    }
    match word.to_ascii_uppercase().as_str() {
        "L" => Ok(Command::MoveLeft),
        "R" => Ok(Command::MoveRight),
        "D" => Ok(Command::MoveDown),
        "DD" => Ok(Command::HardDrop),
        "U" => Ok(Command::Rotate),
        "P" => Ok(Command::Pause),
        "H" => Ok(Command::Help),
        "N" => Ok(Command::Restart),
        "Q" => Ok(Command::Quit),
        _ => Err(ParseCommandError::Unsupported(word.to_string())),
    }
}
