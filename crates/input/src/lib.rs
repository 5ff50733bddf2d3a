//! Input module (engine-facing).
//!
//! Translates raw input into [`crate::types::Command`]s and nothing more:
//! [`map`] handles `crossterm` key events for the full-screen host, [`text`]
//! parses typed lines for the prompt host. No command is synthesized here.

pub mod map;
pub mod text;

pub use term_tetris_types as types;

pub use map::{command_for_key, should_quit};
pub use text::{parse_command, ParseCommandError, INSTRUCTIONS};
