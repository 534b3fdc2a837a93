//! Criterion benchmarks for the intersection solver and area paths.
//! Inputs are seeded random slider states; each batch solves 1000 of them.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphlab::plane::{
    enclosed_area, intersection_count, simplified_area, solve_intersections, AreaVertex, Line,
    Parabola,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_states(k: usize, seed: u64) -> Vec<(Parabola, Line)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| {
            let par = Parabola::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            );
            let line = Line::new(rng.gen_range(-5.0..5.0), rng.gen_range(-10.0..10.0));
            (par, line)
        })
        .collect()
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver");
    group.bench_function("solve_intersections_1k", |b| {
        b.iter_batched(
            || random_states(1000, 43),
            |states| {
                for (par, line) in &states {
                    let _pts = solve_intersections(par, line);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("intersection_count_1k", |b| {
        b.iter_batched(
            || random_states(1000, 44),
            |states| {
                for (par, line) in &states {
                    let _n = intersection_count(par, line);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("areas_1k", |b| {
        b.iter_batched(
            || random_states(1000, 45),
            |states| {
                for (par, line) in &states {
                    let pts = solve_intersections(par, line);
                    let _s = simplified_area(line, &pts);
                    let _apex = enclosed_area(par, line, AreaVertex::Apex);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
