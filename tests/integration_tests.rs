//! Integration tests for the rules engine and the session loop

use term_tetris::core::geometry::Point;
use term_tetris::core::{ActivePiece, Board, BoardConfig, PieceGenerator, Scorer};
use term_tetris::engine::{Phase, Response, Session};
use term_tetris::types::{Command, Direction, ShapeKind, EMPTY, ROW_PADDING};

fn occupied_visible(board: &Board) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 0..board.height() {
        for col in 0..board.width() {
            if board.value_at(row, col) != EMPTY {
                cells.push((col, row));
            }
        }
    }
    cells
}

#[test]
fn test_o_piece_falls_to_the_floor() {
    let mut board = Board::new(20, 10);
    let mut piece = ActivePiece::spawn(&mut board, ShapeKind::O, Point::new(4, 0));

    // Spawned in the hidden rows, the O travels the whole padded grid.
    let travel = board.grid_height() - 2;
    for step in 0..travel {
        assert!(piece.shift(&mut board, Direction::Down), "step {step} failed");
    }
    assert!(!piece.shift(&mut board, Direction::Down));
    assert!(!piece.can_descend(&board));

    let cleared = board.clear_rows(&piece.rows_occupied());
    assert_eq!(cleared, 0);
    let mut cells = occupied_visible(&board);
    cells.sort_by_key(|&(col, row)| (row, col));
    assert_eq!(cells, vec![(4, 18), (5, 18), (4, 19), (5, 19)]);
    assert!(!board.reached_top_row());
}

#[test]
fn test_i_piece_completes_bottom_row() {
    let mut board = Board::new(20, 10);
    let floor = board.grid_height() as i32 - 1;
    let filler: Vec<Point> = (0..10)
        .filter(|x| !(3..=6).contains(x))
        .map(|x| Point::new(x, floor))
        .collect();
    board.add(&filler, ShapeKind::T);

    let mut piece = ActivePiece::spawn(&mut board, ShapeKind::I, Point::new(3, 0));
    piece.drop_to_floor(&mut board);
    assert_eq!(piece.cells()[0], Point::new(3, floor));

    let mut scorer = Scorer::new();
    let cleared = board.clear_rows(&piece.rows_occupied());
    assert_eq!(cleared, 1);
    assert!(!scorer.add_lines(cleared as u32));
    assert_eq!(scorer.score(), 40);
    assert_eq!(scorer.lines_cleared(), 1);
    assert_eq!(scorer.level(), 0);
    assert!(occupied_visible(&board).is_empty());
}

#[test]
fn test_scoring_progression() {
    let mut scorer = Scorer::new();
    assert!(!scorer.add_lines(1));
    assert_eq!(scorer.score(), 40);
    assert!(!scorer.add_lines(4));
    assert_eq!(scorer.score(), 1240);
    assert!(!scorer.add_lines(4));
    assert!(scorer.add_lines(1));
    assert_eq!(scorer.level(), 1);
    let before = scorer.score();
    scorer.add_lines(1);
    assert_eq!(scorer.score() - before, 80);
}

#[test]
fn test_generator_drives_a_game_to_the_top() {
    let mut board = Board::new(20, 10);
    let mut generator = PieceGenerator::from_seed(2024);
    let mut pieces = 0;
    while !board.reached_top_row() {
        let mut piece = generator.spawn_next(&mut board);
        piece.drop_to_floor(&mut board);
        board.clear_rows(&piece.rows_occupied());
        pieces += 1;
        assert!(pieces < 1000);
    }
    assert!(pieces > 3);
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::with_seed(BoardConfig::default(), 12345);
    assert_eq!(session.phase(), Phase::Spawning);

    session.start();
    assert_eq!(session.phase(), Phase::Falling);
    assert!(session.active().is_some());

    assert_eq!(session.apply(Command::Pause), Response::Paused);
    assert_eq!(session.apply(Command::Rotate), Response::Ignored);
    assert_eq!(session.apply(Command::Pause), Response::Resumed);

    let next = session.next_shape();
    assert!(matches!(session.apply(Command::HardDrop), Response::Froze(_)));
    assert_eq!(session.active().map(|p| p.kind()), Some(next));
    assert_eq!(session.statistics().total(), 2);
}

#[test]
fn test_session_commands_after_freeze_hit_the_new_piece() {
    let mut session = Session::with_seed(BoardConfig::default(), 99);
    session.start();
    let batch = [Command::HardDrop, Command::MoveLeft];
    let responses: Vec<Response> = batch.iter().map(|&c| session.apply(c)).collect();
    assert!(matches!(responses[0], Response::Froze(_)));
    // A live piece answered, not the frozen one.
    assert!(matches!(responses[1], Response::Moved | Response::Blocked));
    assert_eq!(session.phase(), Phase::Falling);
}

#[test]
fn test_session_game_over_and_restart() {
    let mut session = Session::with_seed(BoardConfig::new(6, 6).unwrap(), 5);
    session.start();
    while session.phase() != Phase::GameOver {
        session.apply(Command::HardDrop);
    }
    let snapshot = session.snapshot();
    assert!(snapshot.active.is_none());
    assert_eq!(snapshot.phase, Phase::GameOver);
    // Something settled in the first visible row.
    assert!((0..6).any(|col| !snapshot.is_empty_at(0, col)));

    assert_eq!(session.apply(Command::Restart), Response::Restarted);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.phase, Phase::Falling);
    assert!(snapshot.board.iter().all(|&c| c == EMPTY));
    assert_eq!((snapshot.score, snapshot.lines, snapshot.level), (0, 0, 0));
    assert_eq!(snapshot.stats.total(), 1);
}

#[test]
fn test_spawn_stays_in_hidden_rows() {
    let mut session = Session::with_seed(BoardConfig::default(), 31);
    session.start();
    for _ in 0..20 {
        let piece = session.active().unwrap();
        assert!(piece.cells().iter().all(|p| (p.y as usize) < ROW_PADDING));
        session.apply(Command::HardDrop);
        if session.phase() == Phase::GameOver {
            break;
        }
    }
}
