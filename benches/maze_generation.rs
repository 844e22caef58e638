//! Benchmarks for maze generation and full session setup.
//!
//! Run with: cargo bench --bench maze_generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyber_maze::{CharacterId, GameConfig, GameRng, GameState, MazeGenerator, Position};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("maze_generate");

    for size in [15, 31, 63] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let generator = MazeGenerator::new();
            let mut rng = GameRng::new(42);
            b.iter(|| {
                let grid = generator.generate(
                    black_box(size),
                    Position::new(1, 1),
                    Position::new(size - 2, size - 2),
                    &mut rng,
                );
                black_box(grid)
            });
        });
    }

    group.finish();
}

fn bench_session_setup(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = GameRng::new(7);

    c.bench_function("session_generate_default", |b| {
        b.iter(|| {
            let session_rng = rng.fork();
            black_box(GameState::generate(&config, CharacterId::Sentinel, &session_rng))
        });
    });
}

fn bench_state_clone(c: &mut Criterion) {
    let state = GameState::generate(&GameConfig::default(), CharacterId::Sentinel, &GameRng::new(1));

    c.bench_function("state_clone", |b| b.iter(|| black_box(state.clone())));
}

criterion_group!(benches, bench_generate, bench_session_setup, bench_state_clone);
criterion_main!(benches);
