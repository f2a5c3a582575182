use ball_sort_solver::difficulty::level_difficulty;
use ball_sort_solver::generation::{
    create_solved_state, enhanced_shuffle, generate_smart_puzzle_with_rng, GeneratorConfig,
};
use ball_sort_solver::puzzle::{NoProfile, Puzzle};
use ball_sort_solver::puzzle_file;
use ball_sort_solver::tubes::PuzzleState;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::prelude::*;

fn small_puzzles() -> Vec<PuzzleState> {
    puzzle_file::parse(include_str!("../src/test_puzzles/small.txt"))
        .unwrap()
        .entries
        .into_iter()
        .map(|entry| entry.state)
        .collect()
}

fn shuffled_level(level: u32) -> PuzzleState {
    let spec = level_difficulty(level);
    let solved = create_solved_state(spec.color_count, spec.total_tubes(0)).unwrap();

    enhanced_shuffle(
        &solved,
        spec.shuffle_move_count,
        &mut StdRng::seed_from_u64(0),
    )
}

fn states(c: &mut Criterion) {
    let mut group = c.benchmark_group("states");

    let fallback = ball_sort_solver::generation::create_fallback_puzzle(
        15,
        16,
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();

    group.bench_function("legal moves (15 colours)", |b| {
        b.iter(|| black_box(&fallback).legal_moves())
    });

    group.bench_function("canonical key (15 colours)", |b| {
        b.iter(|| black_box(&fallback).canonical_key())
    });

    group.bench_function("applying a move", |b| {
        let game_move = fallback.legal_moves()[0];
        b.iter(|| black_box(&fallback).apply_move(black_box(game_move)))
    });
}

fn solving_puzzles(c: &mut Criterion) {
    let mut group = c.benchmark_group("solving puzzles");

    for (index, state) in small_puzzles().into_iter().enumerate() {
        let num_colors = state.distinct_colors();

        group.bench_function(format!("small {}", index + 1), |b| {
            b.iter_batched(
                || Puzzle::<NoProfile>::new(state.clone(), num_colors),
                |mut puzzle| puzzle.solve(),
                BatchSize::SmallInput,
            )
        });
    }

    for &level in &[5, 15, 25] {
        let state = shuffled_level(level);
        let num_colors = level_difficulty(level).color_count;

        group.bench_function(format!("shuffled level {}", level), |b| {
            b.iter_batched(
                || Puzzle::<NoProfile>::new(state.clone(), num_colors),
                |mut puzzle| puzzle.solve(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn generating_puzzles(c: &mut Criterion) {
    let mut group = c.benchmark_group("generating puzzles");
    group.sample_size(10);

    let config = GeneratorConfig {
        max_attempts: 10,
        ..GeneratorConfig::default()
    };

    for &level in &[1, 12] {
        group.bench_function(format!("level {}", level), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| generate_smart_puzzle_with_rng(level, &config, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(benches, states, solving_puzzles, generating_puzzles);
criterion_main!(benches);
