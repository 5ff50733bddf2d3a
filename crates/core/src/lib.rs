//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else: no terminal, no
//! clock, no global randomness. The random source is injected into the
//! [`PieceGenerator`], so a seed reproduces a whole game.
//!
//! # Module Structure
//!
//! - [`geometry`]: grid points, rotation pivots and the 90° transform
//! - [`shapes`]: the seven-piece catalog and the uniform shape draw
//! - [`board`]: padded grid with collision queries and row clearing
//! - [`piece`]: the active piece and its remove/try/restore transactions
//! - [`generator`]: next-shape buffer and spawn placement
//! - [`scoring`]: Classic Nintendo line scores, levels and gravity speed
//! - [`statistics`]: per-shape spawn counters
//! - [`config`]: validated board dimensions
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Board, PieceGenerator, Scorer};
//! use term_tetris_core::types::Direction;
//!
//! let mut board = Board::new(20, 10);
//! let mut generator = PieceGenerator::from_seed(12345);
//! let mut piece = generator.spawn_next(&mut board);
//!
//! piece.drop_to_floor(&mut board);
//! assert!(!piece.shift(&mut board, Direction::Down));
//!
//! let cleared = board.clear_rows(&piece.rows_occupied());
//! let mut scorer = Scorer::new();
//! if cleared > 0 {
//!     scorer.add_lines(cleared as u32);
//! }
//! assert!(!board.reached_top_row());
//! ```

pub mod board;
pub mod config;
pub mod generator;
pub mod geometry;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod statistics;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use generator::PieceGenerator;
pub use geometry::{rotate90, Pivot, Point};
pub use piece::ActivePiece;
pub use scoring::{fall_interval_ms, level_for_lines, line_score, Scorer};
pub use statistics::Statistics;
