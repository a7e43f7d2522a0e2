use knapsack::{greedy, Item, Problem, Rank, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn problem(pairs: &[(u32, u32)], capacity: u32) -> Problem<u32> {
    let items = pairs.iter().copied().map(Item::from).collect();
    Problem::new(items, capacity).expect("valid problem")
}

#[test]
fn no_items() {
    let problem = problem(&[], 10);
    for rank in Rank::ALL {
        let (solution, stats) = greedy::greedy(&problem, rank);
        assert!(solution.x.is_empty());
        assert_eq!(solution.value, 0);
        assert_eq!(stats.num_items, 0);
    }
}

#[test]
fn non_trivial_instance() {
    let problem = problem(&[(16, 2), (19, 3), (23, 4), (28, 5)], 7);

    let (solution, stats) = Solver::Greedy(Rank::Density)
        .solve(&problem)
        .expect("solution");

    // packed items are correct
    assert_eq!(solution.packed().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(solution.weight(&problem), 5);

    // objective value is correct
    assert_eq!(solution.value, 35); // opt: 44
    assert_eq!(stats.value, solution.value);

    assert!(!stats.proved_optimal);
    assert_eq!(stats.expanded, 0);
}

#[test]
fn greedy_trap() {
    // the dense small item blocks the valuable one
    let problem = problem(&[(2, 1), (10, 10)], 10);

    let (solution, _) = greedy::greedy(&problem, Rank::Density);
    assert_eq!(solution.value, 2);

    let (solution, _) = greedy::greedy(&problem, Rank::Value);
    assert_eq!(solution.value, 10);
}

#[test]
fn bounded_by_optimum() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..25 {
        let problem = Problem::random(30, 100, 30, &mut rng);
        let (opt, _) = Solver::Dp.solve(&problem).expect("solution");

        for rank in Rank::ALL {
            let (solution, _) = greedy::greedy(&problem, rank);
            assert!(solution.is_feasible(&problem));
            assert!(solution.value <= opt.value);
        }
    }
}
