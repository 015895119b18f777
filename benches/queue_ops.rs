use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::{PieceGenerator, PieceQueue, StackGame};
use tetris_stack::types::{Piece, PieceKind};

fn bench_play_insert_cycle(c: &mut Criterion) {
    let mut game = StackGame::new(12345);
    game.fill();

    c.bench_function("play_then_insert", |b| {
        b.iter(|| {
            let played = game.play();
            let inserted = game.insert();
            black_box((played, inserted));
        })
    });
}

fn bench_enqueue_rejected(c: &mut Criterion) {
    let mut queue = PieceQueue::new();
    for id in 1..=5 {
        let _ = queue.enqueue(Piece::new(PieceKind::I, id));
    }

    c.bench_function("enqueue_full", |b| {
        b.iter(|| black_box(queue.enqueue(black_box(Piece::new(PieceKind::T, 6)))))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut gen = PieceGenerator::new(12345);

    c.bench_function("generate_piece", |b| b.iter(|| black_box(gen.generate())));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = StackGame::new(12345);
    game.fill();

    c.bench_function("snapshot", |b| {
        b.iter(|| black_box(game.queue().snapshot()))
    });
}

criterion_group!(
    benches,
    bench_play_insert_cycle,
    bench_enqueue_rejected,
    bench_generate,
    bench_snapshot
);
criterion_main!(benches);
