//! # Limited discrepancy search
//! Branch&Bound that trusts the greedy density heuristic: following it (packing the next densest
//! item) is an *accordance*, deviating from it (leaving the item out) is a *discrepancy*.
//!
//! The search runs in iterations `d = 0, 1, ..., n`. Iteration `d` explores only paths with at
//! most `d` discrepancies and at most `n - d` accordances. The incumbent is carried over between
//! iterations, so solutions found with few discrepancies prune the later, wider iterations.
//! Together, the iterations cover every subset of items, hence the search is exact.
use std::time::Instant;

use log::{debug, trace};

use crate::model::{density_order, Problem, Solution, Stats};
use crate::Int;
use super::bound::bound;
use super::search::{Frame, Search};

/// Search for optimal solution of the 0/1 knapsack using limited discrepancy search.
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{lds, Item, Problem};
///
/// let items = vec![Item::new(16u32, 2), Item::new(19, 3), Item::new(23, 4), Item::new(28, 5)];
/// let problem = Problem::new(items, 7).expect("valid problem");
///
/// let (solution, stats) = lds::lds(&problem);
/// assert_eq!(solution.value, 44);
/// assert!(stats.proved_optimal);
/// ```
pub fn lds<T: Int>(problem: &Problem<T>) -> (Solution, Stats) {
    let start = Instant::now();

    let (order, items) = density_order(problem);
    let n = items.len();
    let capacity = problem.capacity().into();

    let mut search = Search::new(&items);
    let ub = bound(&items, 0, 0, capacity);

    for d in 0..=n {
        search.reset();
        let root = Node {
            j: 0,
            value: 0,
            capacity,
            ub,
            budget: Budget {
                accordances: n - d,
                discrepancies: d,
            },
        };
        probe(&mut search, root);
        trace!("discrepancies={} incumbent={}", d, search.best_value());
    }

    let stats = Stats::exact(
        search.best_value(),
        n,
        start.elapsed(),
        search.expanded,
        search.pruned,
    );
    debug!("lds: value={} stats={:?}", stats.value, stats);

    (search.into_solution(&order), stats)
}

/// Remaining number of decisions that may agree with / deviate from the density heuristic
#[derive(Debug, Clone, Copy)]
struct Budget {
    accordances: usize,
    discrepancies: usize,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    j: usize,
    value: u64,
    capacity: u64,
    ub: u64,
    budget: Budget,
}

/// Single iteration: depth-first search of the subtree of `root` within its [Budget].
fn probe(search: &mut Search, root: Node) {
    let mut stack = vec![Frame::Visit(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(node) => {
                if node.ub <= search.best_value() {
                    search.pruned += 1;
                    continue;
                }

                if node.j >= search.items.len() {
                    continue;
                }

                search.expanded += 1;
                let item = search.items[node.j];
                let budget = node.budget;

                if budget.discrepancies > 0 {
                    stack.push(Frame::Exclude(node));
                }

                // accordance: pack the item
                if item.weight <= node.capacity && budget.accordances > 0 {
                    let value = node.value + item.value;
                    stack.push(Frame::Unpack(node.j));
                    stack.push(Frame::Visit(Node {
                        j: node.j + 1,
                        value,
                        capacity: node.capacity - item.weight,
                        ub: node.ub,
                        budget: Budget {
                            accordances: budget.accordances - 1,
                            ..budget
                        },
                    }));
                    search.pack(node.j, value);
                }
            }
            Frame::Unpack(j) => search.unpack(j),
            // discrepancy: leave the item out
            Frame::Exclude(node) => {
                if node.ub <= search.best_value() {
                    search.pruned += 1;
                    continue;
                }
                let ub = bound(search.items, node.j + 1, node.value, node.capacity);
                stack.push(Frame::Visit(Node {
                    j: node.j + 1,
                    ub,
                    budget: Budget {
                        discrepancies: node.budget.discrepancies - 1,
                        ..node.budget
                    },
                    ..node
                }));
            }
        }
    }
}
