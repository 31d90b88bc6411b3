//! Criterion micro-benchmarks for parsing and simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use rover_engine::{InstructionParser, SimulationEngine};
use rover_space::Grid;
use rover_test_utils::generated_fleet;
use std::hint::black_box;

/// Benchmark: parse a 1K-rover block with 256 commands each.
fn bench_parse_1k_rovers(c: &mut Criterion) {
    let text = generated_fleet(1_000, 256, 100);
    let parser = InstructionParser::new();

    c.bench_function("parse_1k_rovers_256_cmds", |b| {
        b.iter(|| {
            let programs = parser.parse(black_box(&text)).unwrap();
            black_box(programs);
        });
    });
}

/// Benchmark: run pre-parsed programs, excluding parse cost.
fn bench_run_1k_rovers(c: &mut Criterion) {
    let text = generated_fleet(1_000, 256, 100);
    let grid: Grid = "100 100".parse().unwrap();
    let programs = InstructionParser::new().parse(&text).unwrap();
    let engine = SimulationEngine::new();

    c.bench_function("run_1k_rovers_256_cmds", |b| {
        b.iter(|| {
            let outcome = engine.run(&grid, black_box(programs.clone())).unwrap();
            black_box(outcome);
        });
    });
}

/// Benchmark: one long-lived rover with 100K commands, end to end.
fn bench_simulate_long_program(c: &mut Criterion) {
    let text = generated_fleet(1, 100_000, 10);
    let engine = SimulationEngine::new();

    c.bench_function("simulate_single_rover_100k_cmds", |b| {
        b.iter(|| {
            let outcome = engine.simulate("10 10", black_box(&text)).unwrap();
            black_box(outcome);
        });
    });
}

criterion_group!(
    benches,
    bench_parse_1k_rovers,
    bench_run_1k_rovers,
    bench_simulate_long_program
);
criterion_main!(benches);
