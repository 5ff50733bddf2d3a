//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed between the rules engine, the input
//! layer and the renderers. Nothing here depends on a terminal, a clock or a
//! random source.
//!
//! # Board Dimensions
//!
//! The default well is 20 rows by 10 columns. The board keeps
//! [`ROW_PADDING`] hidden rows above the visible area so freshly spawned pieces
//! can move and rotate before they become visible. Row indices grow downward.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_MS` | 750 | Gravity interval at level 0 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Fastest gravity interval |
//! | `LOOP_SLEEP_MS` | 20 | Idle sleep of the run loop |
//! | `GAME_OVER_DELAY_MS` | 500 | Pause before the game-over screen |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{Command, Direction, ShapeKind};
//!
//! assert_eq!(ShapeKind::T.id(), 6);
//! assert_eq!(ShapeKind::from_id(7), Some(ShapeKind::Z));
//! assert_eq!(Direction::from_command(Command::MoveLeft), Some(Direction::Left));
//! assert_eq!(Direction::Down.delta(), (0, 1));
//! ```

/// Hidden rows above the visible well.
pub const ROW_PADDING: usize = 2;

/// Default number of visible rows.
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Default number of columns.
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Leftmost column a piece anchor may spawn in.
///
/// The L, S and T layouts reach up to two columns left of their anchor.
pub const SPAWN_MIN_COLUMN: usize = 2;

/// The anchor column range ends `SPAWN_RIGHT_MARGIN` columns before the right wall.
///
/// The I layout reaches three columns right of its anchor.
pub const SPAWN_RIGHT_MARGIN: usize = 4;

/// Gravity interval at level 0 (milliseconds per row).
pub const BASE_FALL_MS: u32 = 750;

/// Gravity speed-up per level.
pub const FALL_STEP_MS: u32 = 50;

/// Gravity never gets faster than this.
pub const MIN_FALL_MS: u32 = 100;

/// Idle sleep of the run loop when no command arrived.
pub const LOOP_SLEEP_MS: u64 = 20;

/// Pause between topping out and drawing the game-over screen.
pub const GAME_OVER_DELAY_MS: u64 = 500;

/// Lines needed per level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the game board: [`EMPTY`] or a shape identifier (1-7).
pub type Cell = u8;

/// Value of an unoccupied cell.
pub const EMPTY: Cell = 0;

/// The seven tetromino shapes.
///
/// Each shape has a fixed identifier stored in board cells and a display letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shapes in identifier order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Identifier written into board cells (never [`EMPTY`]).
    pub const fn id(self) -> Cell {
        match self {
            ShapeKind::I => 1,
            ShapeKind::J => 2,
            ShapeKind::L => 3,
            ShapeKind::O => 4,
            ShapeKind::S => 5,
            ShapeKind::T => 6,
            ShapeKind::Z => 7,
        }
    }

    /// Zero-based position in [`ShapeKind::ALL`], for per-shape tables.
    pub const fn index(self) -> usize {
        self.id() as usize - 1
    }

    pub const fn letter(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::O => 'O',
            ShapeKind::S => 'S',
            ShapeKind::T => 'T',
            ShapeKind::Z => 'Z',
        }
    }

    /// Decode a board cell.
    ///
    /// ```
    /// use term_tetris_types::{ShapeKind, EMPTY};
    ///
    /// assert_eq!(ShapeKind::from_id(4), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_id(EMPTY), None);
    /// assert_eq!(ShapeKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }
}

/// Unit shift directions. Rows grow downward, so `Down` is `(0, +1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` offset of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Single-step movement for a command, if it is one.
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Abstract commands consumed by the engine.
///
/// Hosts translate raw input into this set and forward it in the order received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; freezes the piece when blocked
    MoveDown,
    /// Drop piece as far as it goes and freeze it
    HardDrop,
    /// Rotate piece 90° clockwise about its pivot
    Rotate,
    /// Toggle pause
    Pause,
    Quit,
    /// Show the instructions
    Help,
    /// Start a new game
    Restart,
}
