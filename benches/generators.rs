use criterion::{criterion_group, criterion_main, Criterion};
use perfect_mazes::generators::{self, Algorithm};
use perfect_mazes::units::{Height, Width};

const BENCH_SEED: u64 = 0x5eed;

fn generate_32x32(c: &mut Criterion, label: &str, algorithm: Algorithm) {
    c.bench_function(label, move |b| {
        b.iter(|| generators::generate(algorithm, Width(32), Height(32), BENCH_SEED).unwrap())
    });
}

fn recursive_backtracker(c: &mut Criterion) {
    generate_32x32(c, "recursive_backtracker_32x32", Algorithm::RecursiveBacktracker);
}

fn recursive_division(c: &mut Criterion) {
    generate_32x32(c, "recursive_division_32x32", Algorithm::RecursiveDivision);
}

fn hunt_and_kill(c: &mut Criterion) {
    generate_32x32(c, "hunt_and_kill_32x32", Algorithm::HuntAndKill);
}

fn randomised_prims(c: &mut Criterion) {
    generate_32x32(c, "randomised_prims_32x32", Algorithm::RandomisedPrims);
}

criterion_group!(
    benches,
    recursive_backtracker,
    recursive_division,
    hunt_and_kill,
    randomised_prims
);
criterion_main!(benches);
