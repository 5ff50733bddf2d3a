//! Active piece - the falling tetromino and its board transactions
//!
//! The piece's cells are written into the board grid. Every move or rotation
//! lifts those cells off the board, tries the candidate placement, and either
//! commits it or puts the original cells back. That sequence is owned by
//! [`Lift`], so no caller can leave the board with the piece missing.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::geometry::{rotate90, Pivot, Point};
use crate::shapes::{layout, Cells};
use crate::types::{Direction, ShapeKind};

/// The piece currently under player control.
///
/// The board is borrowed per operation, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivePiece {
    kind: ShapeKind,
    cells: Cells,
    pivot: Pivot,
}

impl ActivePiece {
    /// Place a new `kind` piece anchored at `anchor` (grid coordinates).
    ///
    /// # Panics
    ///
    /// If any of the layout cells is outside the grid or occupied.
    pub fn spawn(board: &mut Board, kind: ShapeKind, anchor: Point) -> Self {
        let (cells, pivot) = layout(kind, anchor);
        board.add(&cells, kind);
        Self { kind, cells, pivot }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Current cells in grid coordinates, in layout order.
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Move one step. Returns false when blocked; the piece is then unchanged.
    pub fn shift(&mut self, board: &mut Board, direction: Direction) -> bool {
        let candidate = self.cells.map(|p| p.shift(direction));
        let mut lift = Lift::new(board, self.kind, self.cells);
        if !lift.place(&candidate) {
            return false;
        }
        self.cells = candidate;
        self.pivot = self.pivot.shift(direction);
        true
    }

    /// Rotate 90° clockwise about the pivot. No kicks: a rotation that does
    /// not fit fails and the piece stays as it was.
    pub fn rotate(&mut self, board: &mut Board) -> bool {
        let pivot = self.pivot;
        let candidate = self.cells.map(|p| rotate90(p, pivot, false));
        let mut lift = Lift::new(board, self.kind, self.cells);
        if lift.place(&candidate) {
            self.cells = candidate;
            return true;
        }
        debug_assert_eq!(
            candidate.map(|p| rotate90(p, pivot, true)),
            self.cells,
            "inverse rotation must restore the original cells"
        );
        false
    }

    /// Step down until blocked. Returns the number of rows travelled.
    pub fn drop_to_floor(&mut self, board: &mut Board) -> usize {
        let mut rows = 0;
        while self.shift(board, Direction::Down) {
            rows += 1;
        }
        rows
    }

    /// Whether every column of the piece has room below its lowest cell.
    pub fn can_descend(&self, board: &Board) -> bool {
        self.column_bottoms().iter().all(|&p| board.space_below(p))
    }

    /// Where the piece would come to rest if dropped now. Does not touch the board.
    pub fn landing_preview(&self, board: &Board) -> Cells {
        let fall = self
            .column_bottoms()
            .iter()
            .map(|p| board.distance_to_floor_or_stack(p.y, p.x))
            .min()
            .unwrap_or(0) as i32;
        self.cells.map(|p| p.offset(0, fall))
    }

    /// Distinct grid rows covered by the piece, top to bottom.
    pub fn rows_occupied(&self) -> ArrayVec<i32, 4> {
        let mut rows: ArrayVec<i32, 4> = self.cells.iter().map(|p| p.y).collect();
        rows.sort_unstable();
        dedup(&mut rows);
        rows
    }

    /// The lowest piece cell of each occupied column.
    fn column_bottoms(&self) -> ArrayVec<Point, 4> {
        let mut bottoms: ArrayVec<Point, 4> = ArrayVec::new();
        for &p in &self.cells {
            match bottoms.iter_mut().find(|b| b.x == p.x) {
                Some(b) if p.y > b.y => *b = p,
                Some(_) => {}
                None => bottoms.push(p),
            }
        }
        bottoms
    }
}

fn dedup(values: &mut ArrayVec<i32, 4>) {
    let mut write = 0;
    for read in 0..values.len() {
        if write == 0 || values[read] != values[write - 1] {
            values[write] = values[read];
            write += 1;
        }
    }
    values.truncate(write);
}

/// A piece lifted off the board for the duration of one move attempt.
///
/// Dropping it without a successful [`Lift::place`] writes the original cells
/// back.
struct Lift<'b> {
    board: &'b mut Board,
    kind: ShapeKind,
    original: Cells,
    committed: bool,
}

impl<'b> Lift<'b> {
    fn new(board: &'b mut Board, kind: ShapeKind, original: Cells) -> Self {
        board.remove(&original, kind);
        Self {
            board,
            kind,
            original,
            committed: false,
        }
    }

    fn place(&mut self, candidate: &Cells) -> bool {
        if !self.board.can_add(candidate) {
            return false;
        }
        self.board.add(candidate, self.kind);
        self.committed = true;
        true
    }
}

impl Drop for Lift<'_> {
    fn drop(&mut self) {
        if !self.committed && !std::thread::panicking() {
            self.board.add(&self.original, self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EMPTY, ROW_PADDING};

    fn occupied(board: &Board) -> Vec<Point> {
        let mut cells = Vec::new();
        for row in 0..board.grid_height() as i32 {
            for col in 0..board.width() as i32 {
                if board.get(row, col) != Some(EMPTY) {
                    cells.push(Point::new(col, row));
                }
            }
        }
        cells.sort();
        cells
    }

    fn sorted(cells: &[Point]) -> Vec<Point> {
        let mut v = cells.to_vec();
        v.sort();
        v
    }

    #[test]
    fn spawn_writes_cells_into_grid() {
        let mut board = Board::new(20, 10);
        let piece = ActivePiece::spawn(&mut board, ShapeKind::T, Point::new(4, 0));
        assert_eq!(sorted(piece.cells()), occupied(&board));
        for p in piece.cells() {
            assert_eq!(board.get(p.y, p.x), Some(ShapeKind::T.id()));
        }
    }

    #[test]
    fn shift_moves_cells_and_pivot() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::O, Point::new(4, 0));

        assert!(piece.shift(&mut board, Direction::Right));
        assert_eq!(piece.cells()[0], Point::new(5, 0));
        assert_eq!(piece.pivot(), Pivot::new(5.5, 0.5));
        assert_eq!(occupied(&board).len(), 4);

        assert!(piece.shift(&mut board, Direction::Down));
        assert_eq!(piece.pivot(), Pivot::new(5.5, 1.5));
    }

    #[test]
    fn blocked_shift_leaves_board_untouched() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::I, Point::new(0, 5));
        let before = board.clone();
        let cells = *piece.cells();

        assert!(!piece.shift(&mut board, Direction::Left));
        assert_eq!(board, before);
        assert_eq!(*piece.cells(), cells);
    }

    #[test]
    fn shift_is_blocked_by_settled_cells() {
        let mut board = Board::new(20, 10);
        board.add(&[Point::new(6, 5)], ShapeKind::Z);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::O, Point::new(4, 5));

        assert!(!piece.shift(&mut board, Direction::Right));
        assert_eq!(board.get(5, 6), Some(ShapeKind::Z.id()));
        assert_eq!(occupied(&board).len(), 5);
    }

    #[test]
    fn rotate_turns_i_vertical() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::I, Point::new(3, 5));
        assert!(piece.rotate(&mut board));
        assert_eq!(
            sorted(piece.cells()),
            vec![
                Point::new(5, 4),
                Point::new(5, 5),
                Point::new(5, 6),
                Point::new(5, 7)
            ]
        );
        assert_eq!(sorted(piece.cells()), occupied(&board));
        // The pivot does not move on rotation.
        assert_eq!(piece.pivot(), Pivot::new(4.5, 5.5));
    }

    #[test]
    fn failed_rotation_restores_exact_cells() {
        let mut board = Board::new(20, 10);
        // Vertical I would need rows 4..=7 of column 5.
        board.add(&[Point::new(5, 7)], ShapeKind::S);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::I, Point::new(3, 5));
        let before = board.clone();
        let cells = *piece.cells();

        assert!(!piece.rotate(&mut board));
        assert_eq!(*piece.cells(), cells);
        assert_eq!(board, before);
    }

    #[test]
    fn rotation_out_of_the_top_fails() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::I, Point::new(3, 0));
        // Vertical I would reach row -1.
        assert!(!piece.rotate(&mut board));
        assert_eq!(piece.cells()[0], Point::new(3, 0));
    }

    #[test]
    fn o_rotation_keeps_the_same_cells() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::O, Point::new(4, 4));
        assert!(piece.rotate(&mut board));
        assert_eq!(
            sorted(piece.cells()),
            sorted(&[
                Point::new(4, 4),
                Point::new(5, 4),
                Point::new(4, 5),
                Point::new(5, 5)
            ])
        );
    }

    #[test]
    fn can_descend_checks_every_column() {
        let mut board = Board::new(20, 10);
        // T: top cell at (4, 10), bar at row 11 over columns 3..=5.
        let piece = ActivePiece::spawn(&mut board, ShapeKind::T, Point::new(4, 10));
        assert!(piece.can_descend(&board));

        board.add(&[Point::new(5, 12)], ShapeKind::J);
        assert!(!piece.can_descend(&board));
    }

    #[test]
    fn landing_preview_uses_closest_column() {
        let mut board = Board::new(20, 10);
        let bottom = board.grid_height() as i32 - 1;
        board.add(&[Point::new(3, bottom)], ShapeKind::Z);
        let piece = ActivePiece::spawn(&mut board, ShapeKind::T, Point::new(4, 0));
        let before = board.clone();

        let preview = piece.landing_preview(&board);
        // The bar rests on the stack in column 3.
        assert_eq!(preview[1], Point::new(3, bottom - 1));
        assert_eq!(preview[0], Point::new(4, bottom - 2));
        assert_eq!(board, before);
    }

    #[test]
    fn drop_to_floor_matches_preview() {
        let mut board = Board::new(20, 10);
        let mut piece = ActivePiece::spawn(&mut board, ShapeKind::L, Point::new(5, 0));
        let preview = piece.landing_preview(&board);
        let rows = piece.drop_to_floor(&mut board);

        assert_eq!(*piece.cells(), preview);
        assert_eq!(rows, board.grid_height() - 2);
        assert!(!piece.can_descend(&board));
    }

    #[test]
    fn rows_are_distinct_and_sorted() {
        let mut board = Board::new(20, 10);
        let piece = ActivePiece::spawn(&mut board, ShapeKind::S, Point::new(4, ROW_PADDING as i32));
        assert_eq!(piece.rows_occupied().as_slice(), &[2, 3]);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn spawn_onto_occupied_cell_panics() {
        let mut board = Board::new(20, 10);
        board.add(&[Point::new(4, 0)], ShapeKind::I);
        ActivePiece::spawn(&mut board, ShapeKind::O, Point::new(4, 0));
    }
}
