//! Benchmarks for word-search puzzle generation.
//!
//! # Benchmarks
//!
//! - **`generator_12x12`**: places the ten-word bible list into the default 12×12
//!   grid using all eight directions.
//! - **`generator_crowded`**: places twelve longer words into a 10×10 grid with only
//!   orthogonal directions, where many candidates are rejected and the retry budget
//!   dominates.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering several
//! placement orders.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use wordsearch_core::{DirectionSet, Word};
use wordsearch_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

const BIBLE: [&str; 10] = [
    "ABRAAO", "MOISES", "DAVID", "GOLIAS", "ESTER", "RUTE", "NOE", "PAULO", "PEDRO", "JESUS",
];

const CROWDED: [&str; 12] = [
    "ELEPHANT", "GIRAFFE", "KANGAROO", "PENGUIN", "DOLPHIN", "BUFFALO", "CHEETAH", "GORILLA",
    "LEOPARD", "OSTRICH", "PANTHER", "SQUIRREL",
];

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|s| Word::new(s).unwrap()).collect()
}

fn bench_with(c: &mut Criterion, name: &str, generator: &PuzzleGenerator, words: &[Word]) {
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(words, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_12x12(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(12);
    bench_with(c, "generator_12x12", &generator, &words(&BIBLE));
}

fn bench_generator_crowded(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(10).with_directions(DirectionSet::ORTHOGONAL);
    bench_with(c, "generator_crowded", &generator, &words(&CROWDED));
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_12x12,
        bench_generator_crowded
);
criterion_main!(benches);
