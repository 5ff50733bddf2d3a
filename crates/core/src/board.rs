//! Board module - manages the game grid
//!
//! The board is a `height x width` well plus [`ROW_PADDING`] hidden rows on top.
//! Cells hold [`EMPTY`] or the identifier of the shape occupying them, and the
//! active piece lives in the grid itself rather than in an overlay.
//!
//! Two coordinate systems are in play:
//! - *grid* coordinates (`Point`, `row`/`col` arguments of the placement and
//!   collision methods) include the padding, row 0 being the topmost hidden row;
//! - *visible* coordinates ([`Board::value_at`], [`Board::write_visible`],
//!   [`Board::height`]) start at the first visible row.
//!
//! Storage is a flat row-major vector so rows can be compacted with `copy_within`.

use std::fmt;

use crate::geometry::Point;
use crate::types::{Cell, ShapeKind, EMPTY, ROW_PADDING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    /// Visible rows (padding excluded).
    height: usize,
    /// Row-major, `(height + ROW_PADDING) * width` cells.
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `height` visible rows.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; (height + ROW_PADDING) * width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Visible height; the hidden rows are not counted.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of rows piece cells may occupy.
    pub fn grid_height(&self) -> usize {
        self.height + ROW_PADDING
    }

    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.grid_height() {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Read a cell in grid coordinates. `None` when out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(Point::new(col, row)).map(|i| self.cells[i])
    }

    /// True iff every cell is inside the grid and currently empty.
    pub fn can_add(&self, cells: &[Point]) -> bool {
        cells
            .iter()
            .all(|&p| matches!(self.index(p).map(|i| self.cells[i]), Some(EMPTY)))
    }

    /// Write `kind` into every cell.
    ///
    /// # Panics
    ///
    /// If any target cell is out of bounds or already occupied. Callers must
    /// have checked [`Board::can_add`] (or just removed the same piece).
    pub fn add(&mut self, cells: &[Point], kind: ShapeKind) {
        for &p in cells {
            let i = self.checked_index(p);
            assert_eq!(
                self.cells[i], EMPTY,
                "cannot add {kind:?} at {p:?}: cell is occupied"
            );
        }
        for &p in cells {
            let i = self.checked_index(p);
            self.cells[i] = kind.id();
        }
    }

    /// Clear every cell of a piece.
    ///
    /// # Panics
    ///
    /// If any target cell does not hold `kind`.
    pub fn remove(&mut self, cells: &[Point], kind: ShapeKind) {
        for &p in cells {
            let i = self.checked_index(p);
            assert_eq!(
                self.cells[i],
                kind.id(),
                "cannot remove {kind:?} at {p:?}: cell holds another value"
            );
        }
        for &p in cells {
            let i = self.checked_index(p);
            self.cells[i] = EMPTY;
        }
    }

    fn checked_index(&self, p: Point) -> usize {
        match self.index(p) {
            Some(i) => i,
            None => panic!("cell {p:?} is outside the {}x{} grid", self.width, self.grid_height()),
        }
    }

    /// Whether the cell directly below `p` exists and is empty.
    pub fn space_below(&self, p: Point) -> bool {
        self.index(Point::new(p.x, p.y + 1))
            .is_some_and(|i| self.cells[i] == EMPTY)
    }

    /// Empty rows directly below `(row, col)` before the floor or a filled cell.
    pub fn distance_to_floor_or_stack(&self, row: i32, col: i32) -> usize {
        let mut distance = 0;
        let mut below = Point::new(col, row + 1);
        while let Some(i) = self.index(below) {
            if self.cells[i] != EMPTY {
                break;
            }
            distance += 1;
            below.y += 1;
        }
        distance
    }

    /// Game over condition: anything settled in the first visible row.
    pub fn reached_top_row(&self) -> bool {
        self.row_slice(ROW_PADDING).iter().any(|&c| c != EMPTY)
    }

    /// Whether grid row `row` has no empty cell. Out-of-range rows are never full.
    pub fn full_row(&self, row: usize) -> bool {
        if row >= self.grid_height() {
            return false;
        }
        self.row_slice(row).iter().all(|&c| c != EMPTY)
    }

    #[inline]
    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Remove every full row among `rows` (grid coordinates) and compact.
    ///
    /// Surviving rows keep their order and slide down; the same number of empty
    /// rows appear at the top, so the grid height never changes. Rows not listed
    /// are kept even if full. Returns the number of rows removed.
    ///
    /// Scans bottom to top with a read and a write cursor, so indices of rows
    /// above a removed one are never invalidated mid-pass.
    pub fn clear_rows(&mut self, rows: &[i32]) -> usize {
        let width = self.width;
        let mut removed = 0;
        let mut write_y = self.grid_height();

        for read_y in (0..self.grid_height()).rev() {
            let candidate = rows.iter().any(|&r| r == read_y as i32);
            if candidate && self.full_row(read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        removed
    }

    /// Read a cell in visible coordinates, for display.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is outside the visible well.
    pub fn value_at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) is outside the visible {}x{} well",
            self.height,
            self.width
        );
        self.cells[(row + ROW_PADDING) * self.width + col]
    }

    /// Copy the visible rows (row-major) into `out`, reusing its allocation.
    pub fn write_visible(&self, out: &mut Vec<Cell>) {
        out.clear();
        out.extend_from_slice(&self.cells[ROW_PADDING * self.width..]);
    }

    /// Empty the whole grid, hidden rows included.
    pub fn reset(&mut self) {
        self.cells = vec![EMPTY; self.grid_height() * self.width];
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let ch = ShapeKind::from_id(self.value_at(row, col)).map_or('.', ShapeKind::letter);
                write!(f, "{ch}")?;
            }
            if row + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_BOARD_HEIGHT,
            crate::types::DEFAULT_BOARD_WIDTH,
        )
    }
}
