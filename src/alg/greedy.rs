//! # Greedy heuristics
//! Constructive *rank-and-fill* heuristics: items are ranked by a key, then scanned in rank order
//! and packed whenever they still fit. There is no backtracking, so the result is a feasible but
//! generally sub-optimal solution.
use std::cmp::Reverse;
use std::time::Instant;

use log::debug;

use crate::model::{preprocess, sort_by_density, Item, Problem, Solution, Stats};
use crate::Int;

/// Ranking key of the greedy heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// most valuable items first
    Value,
    /// lightest items first
    Weight,
    /// items with the highest value density first
    Density,
}

impl Rank {
    pub const ALL: [Rank; 3] = [Rank::Value, Rank::Weight, Rank::Density];
}

/// Search for approx. solution of the 0/1 knapsack using the greedy heuristic with given `rank`.
///
/// Asymptotic runtime is `O(n*log(n))` where `n` is the number of items. The sort is stable, so
/// items of equal rank are considered in their original order.
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{greedy, Item, Problem, Rank};
///
/// let items = vec![Item::new(16u32, 2), Item::new(19, 3), Item::new(23, 4), Item::new(28, 5)];
/// let problem = Problem::new(items, 7).expect("valid problem");
///
/// let (solution, _) = greedy::greedy(&problem, Rank::Density);
/// assert_eq!(solution.x, vec![true, true, false, false]);
/// assert_eq!(solution.value, 35); // opt = 44
/// ```
pub fn greedy<T: Int>(problem: &Problem<T>, rank: Rank) -> (Solution, Stats) {
    match rank {
        Rank::Value => greedy_by_key(problem, |item| Reverse(item.value)),
        Rank::Weight => greedy_by_key(problem, |item| item.weight),
        Rank::Density => {
            let start = Instant::now();
            let mut items = preprocess(problem.items());
            sort_by_density(&mut items);
            fill(problem, &items, start)
        }
    }
}

/// Greedy heuristic ranking items by an arbitrary `key`.
///
/// Items are considered in non-decreasing order of their keys, so a descending order is obtained
/// by wrapping the key into [Reverse].
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use std::cmp::Reverse;
/// use knapsack::{greedy, Item, Problem};
///
/// let items = vec![Item::new(5u32, 4), Item::new(6, 5), Item::new(3, 2)];
/// let problem = Problem::new(items, 9).expect("valid problem");
///
/// // prefer heavy items
/// let (solution, _) = greedy::greedy_by_key(&problem, |item| Reverse(item.weight));
/// assert_eq!(solution.value, 11);
/// ```
pub fn greedy_by_key<T, K, F>(problem: &Problem<T>, mut key: F) -> (Solution, Stats)
where
    T: Int,
    K: Ord,
    F: FnMut(&Item<u64>) -> K,
{
    let start = Instant::now();

    // collect pairs (j, item) to preserve original item indices - O(n)
    let mut items = preprocess(problem.items());

    // rank items - O(n * log(n))
    items.sort_by_key(|(_, item)| key(item));

    fill(problem, &items, start)
}

/// Assume that `items` are given as pairs `(j, item)` already sorted by rank. Then this function
/// sequentially packs every item that still fits into the knapsack - O(n).
fn fill<T: Int>(
    problem: &Problem<T>,
    items: &[(usize, Item<u64>)],
    start: Instant,
) -> (Solution, Stats) {
    let capacity: u64 = problem.capacity().into();

    let mut solution = Solution::empty(items.len());
    let mut weight = 0u64;

    for &(j, item) in items.iter() {
        if weight + item.weight <= capacity {
            weight += item.weight;
            solution.value += item.value;
            solution.x[j] = true;
        }
    }

    let stats = Stats::approx(solution.value, items.len(), start.elapsed());
    debug!("greedy: value={} weight={} stats={:?}", solution.value, weight, stats);

    (solution, stats)
}
