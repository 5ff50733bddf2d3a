use term_tetris_core::geometry::Point;
use term_tetris_core::Statistics;

use crate::session::Phase;
use crate::types::{Cell, ShapeKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, EMPTY};

/// The falling piece as seen by a renderer.
///
/// Cells are in visible coordinates: `y` is negative while a cell is still in
/// the hidden rows above the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub cells: [Point; 4],
    /// Where a hard drop would put the piece.
    pub preview: [Point; 4],
    /// The piece can no longer move down; the next step down freezes it.
    pub grounded: bool,
}

/// Read-only view of a session for renderers and hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Visible rows, row-major. The active piece is included.
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub next: ShapeKind,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub stats: Statistics,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Cell at a visible `(row, col)`; `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.board.get(row * self.width + col).copied()
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(EMPTY)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            board: vec![EMPTY; DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT],
            active: None,
            next: ShapeKind::I,
            score: 0,
            lines: 0,
            level: 0,
            stats: Statistics::default(),
            phase: Phase::Spawning,
        }
    }
}
