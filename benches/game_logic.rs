use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::geometry::Point;
use term_tetris::core::{ActivePiece, Board, BoardConfig, PieceGenerator};
use term_tetris::engine::{GameSnapshot, Phase, Session};
use term_tetris::types::{Command, Direction, ShapeKind};

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(20, 10);
            let h = board.grid_height() as i32;
            let cells: Vec<Point> = (h - 4..h)
                .flat_map(|y| (0..10).map(move |x| Point::new(x, y)))
                .collect();
            board.add(&cells, ShapeKind::I);
            board.clear_rows(black_box(&[h - 4, h - 3, h - 2, h - 1]))
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut generator = PieceGenerator::from_seed(12345);
    let mut board = Board::new(20, 10);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            board.reset();
            black_box(generator.spawn_next(&mut board));
        })
    });
}

fn bench_shift(c: &mut Criterion) {
    let mut board = Board::new(20, 10);
    let mut piece = ActivePiece::spawn(&mut board, ShapeKind::T, Point::new(4, 8));
    let mut direction = Direction::Left;

    c.bench_function("shift", |b| {
        b.iter(|| {
            if !piece.shift(&mut board, direction) {
                direction = match direction {
                    Direction::Left => Direction::Right,
                    _ => Direction::Left,
                };
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(20, 10);
    let mut piece = ActivePiece::spawn(&mut board, ShapeKind::J, Point::new(4, 8));

    c.bench_function("rotate", |b| {
        b.iter(|| black_box(piece.rotate(&mut board)))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut session = Session::with_seed(BoardConfig::default(), 12345);
    session.start();

    c.bench_function("session_hard_drop", |b| {
        b.iter(|| {
            if session.phase() == Phase::GameOver {
                session.apply(Command::Restart);
            }
            black_box(session.apply(Command::HardDrop));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::with_seed(BoardConfig::default(), 12345);
    session.start();
    for _ in 0..8 {
        session.apply(Command::HardDrop);
    }
    let mut snapshot = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snapshot);
            black_box(&snapshot);
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_piece_spawn,
    bench_shift,
    bench_rotate,
    bench_hard_drop,
    bench_snapshot
);
criterion_main!(benches);
