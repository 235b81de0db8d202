use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, PieceSpawner};
use blockfall::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if !state.is_playing() {
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, PieceKind::I, &[]);
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(black_box(&board).clear_lines()))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut spawner = PieceSpawner::new(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| black_box(spawner.spawn())));
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut dir = 1;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !state.move_horizontal(dir) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("rotate", |b| b.iter(|| black_box(state.rotate())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
