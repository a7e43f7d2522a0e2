//! # Depth-first Branch&Bound
//! Depth-first search over items sorted by non-increasing value density. Each node first tries to
//! pack the next item, then to leave it out. A node is cut off as soon as its optimistic
//! [bound](crate::alg::bound::bound) does not exceed the incumbent.
//!
//! Thanks to the density order and the include-first branching, the very first dive follows the
//! greedy density heuristic which yields a strong incumbent early on.
use std::time::Instant;

use log::debug;

use crate::model::{density_order, Problem, Solution, Stats};
use crate::Int;
use super::bound::bound;
use super::search::{Frame, Search};

/// Search for optimal solution of the 0/1 knapsack using depth-first Branch&Bound.
///
/// Note that the worst-case running time is still exponential in the number of items.
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{bnb, Item, Problem};
///
/// let items = vec![Item::new(16u32, 2), Item::new(19, 3), Item::new(23, 4), Item::new(28, 5)];
/// let problem = Problem::new(items, 7).expect("valid problem");
///
/// let (solution, stats) = bnb::bnb(&problem);
/// assert_eq!(solution.x, vec![true, false, false, true]);
/// assert_eq!(solution.value, 44);
/// assert!(stats.proved_optimal);
/// ```
pub fn bnb<T: Int>(problem: &Problem<T>) -> (Solution, Stats) {
    let start = Instant::now();

    let (order, items) = density_order(problem);
    let capacity = problem.capacity().into();

    let mut search = Search::new(&items);
    branch(
        &mut search,
        Node {
            j: 0,
            value: 0,
            capacity,
            ub: bound(&items, 0, 0, capacity),
        },
    );

    let stats = Stats::exact(
        search.best_value(),
        items.len(),
        start.elapsed(),
        search.expanded,
        search.pruned,
    );
    debug!("bnb: value={} stats={:?}", stats.value, stats);

    (search.into_solution(&order), stats)
}

/// Search node at item `j` with partial objective `value`, remaining `capacity` and bound `ub`
#[derive(Debug, Clone, Copy)]
struct Node {
    j: usize,
    value: u64,
    capacity: u64,
    ub: u64,
}

/// Explore the subtree of `root` depth-first. The stack holds at most two frames per item, so
/// the depth of the tree is not limited by the call stack.
fn branch(search: &mut Search, root: Node) {
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

                stack.push(Frame::Exclude(node));

                // packing a fitting item keeps the bound of the parent: it was the first item
                // of the bound's greedy completion anyway
                if item.weight <= node.capacity {
                    let value = node.value + item.value;
                    stack.push(Frame::Unpack(node.j));
                    stack.push(Frame::Visit(Node {
                        j: node.j + 1,
                        value,
                        capacity: node.capacity - item.weight,
                        ub: node.ub,
                    }));
                    search.pack(node.j, value);
                }
            }
            Frame::Unpack(j) => search.unpack(j),
            Frame::Exclude(node) => {
                // leaving the item out can only tighten the bound of the parent
                if node.ub <= search.best_value() {
                    search.pruned += 1;
                    continue;
                }
                let ub = bound(search.items, node.j + 1, node.value, node.capacity);
                stack.push(Frame::Visit(Node {
                    j: node.j + 1,
                    ub,
                    ..node
                }));
            }
        }
    }
}
