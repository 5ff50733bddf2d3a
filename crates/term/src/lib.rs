//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! snapshots into a plain framebuffer that is then flushed to the terminal,
//! with full control over the aspect ratio (2 columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
