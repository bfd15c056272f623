use criterion::{black_box, criterion_group, criterion_main, Criterion};
use noughts::game::tictactoe::TTTBoard;
use noughts::player::minimax::find_best_move;
use noughts::tree::TreeSearch;

fn solve_opening() {
    let mut board = TTTBoard::default();
    let mv = find_best_move(&mut board);
    black_box(mv);
}

fn solve_tree() {
    let values = [3, 5, 6, 9, 1, 2, 0, -1];
    let val = TreeSearch::new().optimal_value(&values);
    black_box(val);
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    group.bench_function("ttt-opening", |b| b.iter(solve_opening));
    group.sample_size(300);
    group.bench_function("ab-tree", |b| b.iter(solve_tree));
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
