//! Shapes module - the fixed piece catalog
//!
//! Each shape is pure data: given the top-left reference cell (the anchor), it
//! yields the four occupied cells and the rotation pivot. The cell order is
//! part of the layout and stays stable through moves and rotations.

use rand::Rng;

use crate::geometry::{Pivot, Point};
use crate::types::ShapeKind;

/// The four cells of one piece.
pub type Cells = [Point; 4];

/// Cells and pivot for `kind` anchored at `anchor`.
///
/// ```
/// use term_tetris_core::geometry::{Pivot, Point};
/// use term_tetris_core::shapes::layout;
/// use term_tetris_core::types::ShapeKind;
///
/// let (cells, pivot) = layout(ShapeKind::I, Point::new(5, 5));
/// assert_eq!(cells, [Point::new(5, 5), Point::new(6, 5), Point::new(7, 5), Point::new(8, 5)]);
/// assert_eq!(pivot, Pivot::new(6.5, 5.5));
/// ```
pub fn layout(kind: ShapeKind, anchor: Point) -> (Cells, Pivot) {
    let Point { x, y } = anchor;
    let p = Point::new;
    match kind {
        ShapeKind::I => (
            [p(x, y), p(x + 1, y), p(x + 2, y), p(x + 3, y)],
            Pivot::new(f64::from(x) + 1.5, f64::from(y) + 0.5),
        ),
        ShapeKind::J => {
            let cells = [p(x, y), p(x, y + 1), p(x + 1, y + 1), p(x + 2, y + 1)];
            (cells, Pivot::from(cells[2]))
        }
        ShapeKind::L => {
            let cells = [p(x, y), p(x - 2, y + 1), p(x - 1, y + 1), p(x, y + 1)];
            // Middle of the long bar.
            (cells, Pivot::from(cells[2]))
        }
        ShapeKind::O => (
            [p(x, y), p(x + 1, y), p(x, y + 1), p(x + 1, y + 1)],
            Pivot::new(f64::from(x) + 0.5, f64::from(y) + 0.5),
        ),
        ShapeKind::S => {
            let cells = [p(x, y), p(x + 1, y), p(x - 1, y + 1), p(x, y + 1)];
            (cells, Pivot::from(cells[3]))
        }
        ShapeKind::T => {
            let cells = [p(x, y), p(x - 1, y + 1), p(x, y + 1), p(x + 1, y + 1)];
            (cells, Pivot::from(cells[2]))
        }
        ShapeKind::Z => {
            let cells = [p(x, y), p(x + 1, y), p(x + 1, y + 1), p(x + 2, y + 1)];
            (cells, Pivot::from(cells[2]))
        }
    }
}

/// Uniform draw among the seven shapes.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}
