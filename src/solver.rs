use crate::alg::{best_first, bnb, dp, exhaustive, greedy, lds, Rank};
use crate::error::KnapsackResult;
use crate::model::{Problem, Solution, Stats};
use crate::Int;

/// Solver for the 0/1 knapsack problem: given items with values and weights, select a subset of
/// maximum total value whose total weight does not exceed the knapsack capacity.
///
/// This problem is in general NP-hard.
///
/// # Solver instances
/// There are two types of solver variants:
///  1. Approximate solver - [Solver::Greedy] parametrized by the item [Rank]
///  2. Optimal solvers - [Solver::Dp], [Solver::Exhaustive], [Solver::DepthFirst],
///     [Solver::BestFirst] and [Solver::Discrepancy]
///
/// ## Example
/// ```
/// # extern crate knapsack;
/// use knapsack::{Item, Problem, Solver};
///
/// let items = vec![Item::new(5u32, 4), Item::new(6, 5), Item::new(3, 2)];
/// let problem = Problem::new(items, 9).expect("valid problem");
///
/// for solver in Solver::ALL {
///     let (solution, stats) = solver.solve(&problem).expect("solution");
///     assert!(solution.is_feasible(&problem));
///     assert_eq!(stats.proved_optimal, solver.is_exact());
///     if solver.is_exact() {
///         assert_eq!(solution.value, 11);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solver {
    /// rank-and-fill heuristic, see [greedy::greedy]
    Greedy(Rank),
    /// dynamic programming, see [dp::dp]
    Dp,
    /// enumeration of all subsets, see [exhaustive::exhaustive]
    Exhaustive,
    /// depth-first Branch&Bound, see [bnb::bnb]
    DepthFirst,
    /// best-first Branch&Bound, see [best_first::best_first]
    BestFirst,
    /// limited discrepancy search, see [lds::lds]
    Discrepancy,
}

impl Solver {
    /// All solver configurations
    pub const ALL: [Solver; 8] = [
        Solver::Greedy(Rank::Value),
        Solver::Greedy(Rank::Weight),
        Solver::Greedy(Rank::Density),
        Solver::Dp,
        Solver::Exhaustive,
        Solver::DepthFirst,
        Solver::BestFirst,
        Solver::Discrepancy,
    ];

    /// Returns `true` iff this solver always finds an optimal solution.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Greedy(_))
    }

    /// Run the algorithm determined by this instance on given `problem`.
    ///
    /// Only [Solver::Dp] can actually fail (see [dp::dp]), all the other solvers always return
    /// a solution.
    pub fn solve<T: Int>(&self, problem: &Problem<T>) -> KnapsackResult<(Solution, Stats)> {
        match self {
            Self::Greedy(rank) => Ok(greedy::greedy(problem, *rank)),
            Self::Dp => dp::dp(problem),
            Self::Exhaustive => Ok(exhaustive::exhaustive(problem)),
            Self::DepthFirst => Ok(bnb::bnb(problem)),
            Self::BestFirst => Ok(best_first::best_first(problem)),
            Self::Discrepancy => Ok(lds::lds(problem)),
        }
    }
}
