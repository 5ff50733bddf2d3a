//! Session - one game's state machine
//!
//! ```text
//! Spawning -> Falling -> (freeze) -> Spawning | GameOver
//!               ^  |
//!               |  v
//!              Paused
//! ```
//!
//! `Spawning` is transient: it is resolved inside [`Session::start`] and inside
//! the [`Session::apply`] call that froze a piece, so callers only ever observe
//! `Falling`, `Paused` or `GameOver` after starting.

use rand::rngs::StdRng;
use rand::Rng;

use term_tetris_core::geometry::Point;
use term_tetris_core::{ActivePiece, Board, BoardConfig, PieceGenerator, Scorer, Statistics};

use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Direction, ShapeKind, ROW_PADDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Paused,
    GameOver,
}

/// What a freeze did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreezeReport {
    pub lines_cleared: u32,
    /// Gravity should speed up.
    pub leveled_up: bool,
    /// No new piece could be spawned.
    pub game_over: bool,
}

/// Outcome of one [`Session::apply`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// The command has no meaning in the current phase.
    Ignored,
    Moved,
    Rotated,
    /// A move or rotation did not fit; nothing changed.
    Blocked,
    Froze(FreezeReport),
    Paused,
    Resumed,
    Restarted,
    Help,
    Quit,
}

pub struct Session<R = StdRng> {
    config: BoardConfig,
    board: Board,
    generator: PieceGenerator<R>,
    scorer: Scorer,
    stats: Statistics,
    active: Option<ActivePiece>,
    phase: Phase,
}

impl Session<StdRng> {
    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::from_generator(config, PieceGenerator::from_seed(seed))
    }

    pub fn with_entropy(config: BoardConfig) -> Self {
        Self::from_generator(config, PieceGenerator::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn new(config: BoardConfig, rng: R) -> Self {
        Self::from_generator(config, PieceGenerator::new(rng))
    }

    fn from_generator(config: BoardConfig, generator: PieceGenerator<R>) -> Self {
        Self {
            config,
            board: Board::new(config.height(), config.width()),
            generator,
            scorer: Scorer::new(),
            stats: Statistics::new(),
            active: None,
            phase: Phase::Spawning,
        }
    }

    /// Spawn the first piece. No-op once the game has started.
    pub fn start(&mut self) {
        if self.phase == Phase::Spawning {
            self.spawn_step();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_shape(&self) -> ShapeKind {
        self.generator.peek_next()
    }

    pub fn score(&self) -> u32 {
        self.scorer.score()
    }

    pub fn lines(&self) -> u32 {
        self.scorer.lines_cleared()
    }

    pub fn level(&self) -> u32 {
        self.scorer.level()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn scorer_mut(&mut self) -> &mut Scorer {
        &mut self.scorer
    }

    /// Fill the lowest row the active piece will land in, leaving holes for
    /// the piece's own cells, so the next hard drop clears it.
    #[cfg(test)]
    pub(crate) fn fill_landing_row(&mut self) {
        let Some(piece) = self.active.as_ref() else {
            return;
        };
        let preview = piece.landing_preview(&self.board);
        let Some(row) = preview.iter().map(|p| p.y).max() else {
            return;
        };
        let holes: Vec<Point> = (0..self.board.width() as i32)
            .map(|x| Point::new(x, row))
            .filter(|p| !preview.contains(p))
            .filter(|p| self.board.get(p.y, p.x) == Some(crate::types::EMPTY))
            .collect();
        self.board.add(&holes, ShapeKind::Z);
    }

    /// Apply one command.
    pub fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Quit => return Response::Quit,
            Command::Help => return Response::Help,
            Command::Restart => {
                self.restart();
                return Response::Restarted;
            }
            Command::Pause => return self.toggle_pause(),
            _ => {}
        }

        if self.phase != Phase::Falling {
            return Response::Ignored;
        }

        match command {
            Command::MoveLeft | Command::MoveRight => {
                let Some(direction) = Direction::from_command(command) else {
                    return Response::Ignored;
                };
                self.with_active(|piece, board| piece.shift(board, direction), Response::Moved)
            }
            Command::MoveDown => {
                match self.with_active(|piece, board| piece.shift(board, Direction::Down), Response::Moved) {
                    Response::Blocked => Response::Froze(self.freeze()),
                    other => other,
                }
            }
            Command::Rotate => self.with_active(|piece, board| piece.rotate(board), Response::Rotated),
            Command::HardDrop => {
                if let Some(piece) = self.active.as_mut() {
                    piece.drop_to_floor(&mut self.board);
                }
                Response::Froze(self.freeze())
            }
            Command::Pause | Command::Quit | Command::Help | Command::Restart => Response::Ignored,
        }
    }

    fn with_active(
        &mut self,
        attempt: impl FnOnce(&mut ActivePiece, &mut Board) -> bool,
        success: Response,
    ) -> Response {
        let Some(piece) = self.active.as_mut() else {
            return Response::Ignored;
        };
        if attempt(piece, &mut self.board) {
            success
        } else {
            Response::Blocked
        }
    }

    fn toggle_pause(&mut self) -> Response {
        match self.phase {
            Phase::Falling => {
                self.phase = Phase::Paused;
                Response::Paused
            }
            Phase::Paused => {
                self.phase = Phase::Falling;
                Response::Resumed
            }
            Phase::Spawning | Phase::GameOver => Response::Ignored,
        }
    }

    /// The piece has come to rest: clear rows, score, spawn the next one.
    fn freeze(&mut self) -> FreezeReport {
        let Some(piece) = self.active.take() else {
            return FreezeReport::default();
        };
        debug_assert!(!piece.can_descend(&self.board));

        let lines_cleared = self.board.clear_rows(&piece.rows_occupied()) as u32;
        let leveled_up = lines_cleared > 0 && self.scorer.add_lines(lines_cleared);

        self.phase = Phase::Spawning;
        self.spawn_step();

        FreezeReport {
            lines_cleared,
            leveled_up,
            game_over: self.phase == Phase::GameOver,
        }
    }

    fn spawn_step(&mut self) {
        if self.board.reached_top_row() {
            self.active = None;
            self.phase = Phase::GameOver;
            return;
        }
        let piece = self.generator.spawn_next(&mut self.board);
        self.stats.record(piece.kind());
        self.active = Some(piece);
        self.phase = Phase::Falling;
    }

    fn restart(&mut self) {
        self.board.reset();
        self.scorer.reset();
        self.stats.reset();
        self.generator.reset();
        self.active = None;
        self.phase = Phase::Spawning;
        self.spawn_step();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Fill `out`, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_visible(&mut out.board);
        out.active = self.active.as_ref().map(|piece| ActiveSnapshot {
            kind: piece.kind(),
            cells: piece.cells().map(to_visible),
            preview: piece.landing_preview(&self.board).map(to_visible),
            grounded: !piece.can_descend(&self.board),
        });
        out.next = self.generator.peek_next();
        out.score = self.scorer.score();
        out.lines = self.scorer.lines_cleared();
        out.level = self.scorer.level();
        out.stats = self.stats;
        out.phase = self.phase;
    }
}

fn to_visible(p: Point) -> Point {
    p.offset(0, -(ROW_PADDING as i32))
}
