use criterion::{black_box, criterion_group, criterion_main, Criterion};

use foxhens::board::{Board, Side};
use foxhens::search::choose_move;

fn opening_search(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("choose_move depth 4 opening", |b| {
        b.iter(|| choose_move(black_box(&board), 4, Side::Chicken, &[]))
    });

    c.bench_function("choose_move depth 6 opening", |b| {
        b.iter(|| choose_move(black_box(&board), 6, Side::Chicken, &[]))
    });
}

criterion_group!(benches, opening_search);
criterion_main!(benches);
