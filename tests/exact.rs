use knapsack::{Item, Problem, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::*;

const EXACT: [Solver; 5] = [
    Solver::Dp,
    Solver::Exhaustive,
    Solver::DepthFirst,
    Solver::BestFirst,
    Solver::Discrepancy,
];

fn problem(pairs: &[(u32, u32)], capacity: u32) -> Problem<u32> {
    let items = pairs.iter().copied().map(Item::from).collect();
    Problem::new(items, capacity).expect("valid problem")
}

#[rstest]
#[case::example(&[(16, 2), (19, 3), (23, 4), (28, 5)], 7, 44)]
#[case::small(&[(5, 4), (6, 5), (3, 2)], 9, 11)]
#[case::greedy_trap(&[(2, 1), (10, 10)], 10, 10)]
#[case::all_fit(&[(1, 1), (2, 2), (3, 3)], 100, 6)]
#[case::none_fit(&[(1, 11), (2, 12)], 10, 0)]
#[case::no_capacity(&[(16, 2), (19, 3)], 0, 0)]
#[case::no_items(&[], 10, 0)]
fn exact_solvers_agree(#[case] pairs: &[(u32, u32)], #[case] capacity: u32, #[case] opt: u64) {
    let problem = problem(pairs, capacity);

    for solver in EXACT {
        let (solution, stats) = solver.solve(&problem).expect("solution");

        assert_eq!(opt, solution.value, "{solver:?}");
        assert!(solution.is_feasible(&problem), "{solver:?}");
        assert_eq!(stats.value, solution.value);
        assert!(stats.proved_optimal);
        assert_eq!(stats.num_items, pairs.len());
    }
}

#[test]
fn no_capacity_packs_nothing() {
    let problem = problem(&[(16, 2), (19, 3), (23, 4)], 0);

    for solver in Solver::ALL {
        let (solution, _) = solver.solve(&problem).expect("solution");
        assert_eq!(solution.value, 0);
        assert!(solution.x.iter().all(|&x| !x), "{solver:?}");
    }
}

#[test]
fn idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let problem = Problem::random(12, 50, 20, &mut rng);

    for solver in Solver::ALL {
        let (first, _) = solver.solve(&problem).expect("solution");
        let (second, _) = solver.solve(&problem).expect("solution");
        assert_eq!(first, second, "{solver:?}");
    }
}

#[rstest]
fn random_instances(#[values(1, 2, 3, 4, 5, 6, 7, 8)] seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let problem = Problem::random(14, 100, 40, &mut rng);

    let (opt, _) = Solver::Exhaustive.solve(&problem).expect("solution");

    for solver in EXACT {
        let (solution, _) = solver.solve(&problem).expect("solution");
        assert_eq!(opt.value, solution.value, "{solver:?} (seed {seed})");
        assert!(solution.is_feasible(&problem));
    }
}

#[test]
fn discrepancy_matches_depth_first() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let problem = Problem::random(16, 60, 25, &mut rng);
        let (dfs, _) = Solver::DepthFirst.solve(&problem).expect("solution");
        let (lds, _) = Solver::Discrepancy.solve(&problem).expect("solution");
        assert_eq!(dfs.value, lds.value);
    }
}

#[test]
fn wide_integers() {
    // values and weights close to u64::MAX / 4 must not overflow any accumulator
    let big = u64::MAX / 4;
    let items = vec![
        Item::new(big, big),
        Item::new(big - 1, big / 2),
        Item::new(big / 2, big / 2 + 2),
    ];
    let problem = Problem::new(items, big).expect("valid problem");

    for solver in [
        Solver::Exhaustive,
        Solver::DepthFirst,
        Solver::BestFirst,
        Solver::Discrepancy,
    ] {
        let (solution, _) = solver.solve(&problem).expect("solution");
        assert_eq!(solution.value, big, "{solver:?}");
        assert!(solution.is_feasible(&problem));
    }
}

/// Items of weights `1..=50` (repeated) all with value density 2. Half of the total weight is
/// filled exactly by the first half of the items.
fn equal_density(n: u32) -> Problem<u32> {
    let items = (0..n)
        .map(|j| Item::new(2 * (j % 50 + 1), j % 50 + 1))
        .collect::<Vec<_>>();
    let total_weight: u32 = items.iter().map(|item| item.weight).sum();
    Problem::new(items, total_weight / 2).expect("valid problem")
}

#[rstest]
#[case::depth_first(Solver::DepthFirst, 200_000)]
#[case::discrepancy(Solver::Discrepancy, 50_000)]
fn many_items(#[case] solver: Solver, #[case] n: u32) {
    let problem = equal_density(n);

    let (solution, stats) = solver.solve(&problem).expect("solution");

    assert_eq!(solution.value, 2 * u64::from(problem.capacity()));
    assert_eq!(solution.weight(&problem), u64::from(problem.capacity()));
    assert!(solution.is_feasible(&problem));
    assert!(stats.proved_optimal);
}
