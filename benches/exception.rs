//! Benchmarks for the exception domain.
//!
//! Measures the per-operation cost of the exception channel combinator over the interval domain:
//! - Pointwise lattice operations (join, widening, meet)
//! - Exception transfer sequences (throw/catch, scope exit)
//! - Snapshot merging, sequential and parallel

extern crate exdomain;

use criterion::{criterion_group, criterion_main, Criterion};
use exdomain::prelude::*;
use std::hint::black_box;

type State = ExceptionDomain<Interval>;

fn sample(offset: i64) -> State {
    State::new(
        Interval::bounded(offset, offset + 10),
        Interval::at_least(offset),
        Interval::at_most(offset),
    )
}

/// Benchmark the pointwise join of two states.
fn bench_join(c: &mut Criterion) {
    let lhs = sample(0);
    let rhs = sample(5);

    c.bench_function("exception_join", |b| {
        b.iter(|| {
            let mut state = lhs.clone();
            state.join_with(black_box(&rhs));
            black_box(state)
        });
    });
}

/// Benchmark plain widening.
fn bench_widen(c: &mut Criterion) {
    let lhs = sample(0);
    let rhs = sample(-5);

    c.bench_function("exception_widen", |b| {
        b.iter(|| {
            let mut state = lhs.clone();
            state.widen_with(black_box(&rhs));
            black_box(state)
        });
    });
}

/// Benchmark widening with a jump set.
fn bench_widen_threshold(c: &mut Criterion) {
    let lhs = sample(0);
    let rhs = sample(-5);
    let thresholds = Thresholds::new([-1000, -100, -10, 0, 10, 100, 1000]);

    c.bench_function("exception_widen_threshold", |b| {
        b.iter(|| {
            let mut state = lhs.clone();
            state.widen_threshold_with(black_box(&rhs), black_box(&thresholds));
            black_box(state)
        });
    });
}

/// Benchmark the pointwise meet of two states.
fn bench_meet(c: &mut Criterion) {
    let lhs = sample(0);
    let rhs = sample(5);

    c.bench_function("exception_meet", |b| {
        b.iter(|| {
            let mut state = lhs.clone();
            state.meet_with(black_box(&rhs));
            black_box(state)
        });
    });
}

/// Benchmark a throw followed by handler entry.
fn bench_throw_catch(c: &mut Criterion) {
    let initial = sample(0);

    c.bench_function("exception_throw_catch", |b| {
        b.iter(|| {
            let mut state = black_box(&initial).clone();
            state.throw_exception();
            state.enter_catch();
            black_box(state)
        });
    });
}

/// Benchmark an unhandled exception leaving a scope.
fn bench_scope_exit(c: &mut Criterion) {
    let initial = sample(0);

    c.bench_function("exception_scope_exit", |b| {
        b.iter(|| {
            let mut state = black_box(&initial).clone();
            state.throw_exception();
            state.merge_caught_in_propagated_exceptions();
            state.enter_normal();
            black_box(state)
        });
    });
}

/// Benchmark merging worker snapshots sequentially.
fn bench_join_snapshots(c: &mut Criterion) {
    let snapshots: Vec<State> = (0..1024).map(sample).collect();

    c.bench_function("exception_join_snapshots_1024", |b| {
        b.iter(|| black_box(State::join_snapshots(black_box(&snapshots))));
    });
}

/// Benchmark merging worker snapshots in parallel.
fn bench_par_join_snapshots(c: &mut Criterion) {
    let snapshots: Vec<State> = (0..1024).map(sample).collect();

    c.bench_function("exception_par_join_snapshots_1024", |b| {
        b.iter(|| black_box(State::par_join_snapshots(black_box(&snapshots))));
    });
}

criterion_group!(
    benches,
    // Lattice operations
    bench_join,
    bench_widen,
    bench_widen_threshold,
    bench_meet,
    // Transfer sequences
    bench_throw_catch,
    bench_scope_exit,
    // Snapshot merging
    bench_join_snapshots,
    bench_par_join_snapshots,
);
criterion_main!(benches);
