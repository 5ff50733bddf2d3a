//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `term_tetris::{core, engine, input, term, types}`
//! and adds what only the binary needs: the two [`host`] implementations and the
//! [`cli`] arguments.

pub mod cli;
pub mod host;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
