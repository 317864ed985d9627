use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use blocky::board::colour::REAL_RED;
use blocky::board::{flatten, Block, Palette};
use blocky::goal::{Goal, GoalKind};
use blocky::player::{greedy_search, random_move};

fn board(depth: u8) -> Block {
    Block::random(1 << 10, depth, &Palette::default(), &mut StdRng::seed_from_u64(42))
}

fn bench_flatten(c: &mut Criterion) {
    let board = board(6);
    c.bench_function("flatten_depth_6", |b| b.iter(|| flatten(black_box(&board))));
}

fn bench_scores(c: &mut Criterion) {
    let board = board(6);
    let perimeter = Goal::new(GoalKind::Perimeter, REAL_RED);
    let blob = Goal::new(GoalKind::Blob, REAL_RED);
    c.bench_function("perimeter_score_depth_6", |b| {
        b.iter(|| perimeter.score(black_box(&board)))
    });
    c.bench_function("blob_score_depth_6", |b| b.iter(|| blob.score(black_box(&board))));
}

fn bench_search(c: &mut Criterion) {
    let board = board(5);
    let palette = Palette::default();
    let goal = Goal::new(GoalKind::Blob, REAL_RED);
    c.bench_function("greedy_search_20_trials", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| greedy_search(black_box(&board), &goal, 20, &palette, &mut rng))
    });
    c.bench_function("random_move", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| random_move(black_box(&board), REAL_RED, &palette, &mut rng))
    });
}

criterion_group!(benches, bench_flatten, bench_scores, bench_search);
criterion_main!(benches);
