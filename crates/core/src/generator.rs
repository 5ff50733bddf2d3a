//! Piece generator - uniform shape draws and spawn placement
//!
//! One upcoming shape is buffered so it can be previewed. The random source is
//! injected; seeding it yields a reproducible piece sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::geometry::Point;
use crate::piece::ActivePiece;
use crate::shapes::random_shape;
use crate::types::{ShapeKind, SPAWN_MIN_COLUMN, SPAWN_RIGHT_MARGIN};

#[derive(Debug, Clone)]
pub struct PieceGenerator<R = StdRng> {
    rng: R,
    next: ShapeKind,
}

impl PieceGenerator<StdRng> {
    /// Deterministic generator for replays and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceGenerator<R> {
    pub fn new(mut rng: R) -> Self {
        let next = random_shape(&mut rng);
        Self { rng, next }
    }

    /// The buffered upcoming shape.
    pub fn peek_next(&self) -> ShapeKind {
        self.next
    }

    /// Spawn the buffered shape on row 0 and buffer a fresh one.
    ///
    /// The anchor column is uniform in `[SPAWN_MIN_COLUMN, width - SPAWN_RIGHT_MARGIN]`.
    ///
    /// # Panics
    ///
    /// If the spawn cells are not free. Check [`Board::reached_top_row`] first.
    pub fn spawn_next(&mut self, board: &mut Board) -> ActivePiece {
        let kind = std::mem::replace(&mut self.next, random_shape(&mut self.rng));
        let col = self.spawn_column(board.width());
        ActivePiece::spawn(board, kind, Point::new(col as i32, 0))
    }

    fn spawn_column(&mut self, width: usize) -> usize {
        assert!(
            width >= SPAWN_MIN_COLUMN + SPAWN_RIGHT_MARGIN,
            "board width {width} leaves no spawn column"
        );
        self.rng
            .gen_range(SPAWN_MIN_COLUMN..=width - SPAWN_RIGHT_MARGIN)
    }

    /// Discard the buffered shape and draw a new one.
    pub fn reset(&mut self) {
        self.next = random_shape(&mut self.rng);
    }
}
