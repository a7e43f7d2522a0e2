use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

use knapsack::{Item, Problem, Rank, Solver};

const SEED: u64 = 123;

// Example instance with 4 items and capacity 7
const EXAMPLE: [(u32, u32); 4] = [(16, 2), (19, 3), (23, 4), (28, 5)];

fn example() -> Problem<u32> {
    let items = EXAMPLE.iter().copied().map(Item::from).collect();
    Problem::new(items, 7).expect("valid problem")
}

fn bench_example(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("knapsack: all solvers on {EXAMPLE:?}"));
    let problem = example();

    for solver in Solver::ALL {
        group.bench_with_input(
            BenchmarkId::new("solver", format!("{solver:?}")),
            &problem,
            |b, p| b.iter(|| solver.solve(black_box(p))),
        );
    }

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack: varying number of random items");
    let mut rng = StdRng::seed_from_u64(SEED);

    for n in [10usize, 20, 40].iter() {
        let problem = Problem::random(*n, 100, 50, &mut rng);

        for solver in [
            Solver::Greedy(Rank::Density),
            Solver::Dp,
            Solver::DepthFirst,
            Solver::BestFirst,
            Solver::Discrepancy,
        ] {
            group.bench_with_input(BenchmarkId::new(format!("{solver:?}"), n), &problem, |b, p| {
                b.iter(|| solver.solve(black_box(p)))
            });
        }

        // exponential baseline only for small instances
        if *n <= 20 {
            group.bench_with_input(BenchmarkId::new("Exhaustive", n), &problem, |b, p| {
                b.iter(|| Solver::Exhaustive.solve(black_box(p)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_example, bench_random);
criterion_main!(benches);
