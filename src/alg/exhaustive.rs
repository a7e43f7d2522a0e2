//! # Exhaustive search
//! Enumerates the full binary decision tree in the original item order, pruning only branches
//! that would exceed the capacity. Exponential in the worst case, it serves as a baseline oracle
//! for the other exact solvers on small instances.
use std::time::Instant;

use log::debug;

use crate::model::{preprocess, Item, Problem, Solution, Stats};
use crate::Int;
use super::search::{Frame, Search};

/// Search for optimal solution of the 0/1 knapsack by enumerating all feasible subsets.
///
/// Runs in `O(2^n)` worst-case time where `n` is the number of items.
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{exhaustive, Item, Problem};
///
/// let items = vec![Item::new(5u32, 4), Item::new(6, 5), Item::new(3, 2)];
/// let problem = Problem::new(items, 9).expect("valid problem");
///
/// let (solution, _) = exhaustive::exhaustive(&problem);
/// assert_eq!(solution.value, 11);
/// ```
pub fn exhaustive<T: Int>(problem: &Problem<T>) -> (Solution, Stats) {
    let start = Instant::now();

    // items are kept in their original order, i.e. `order[j] = j`
    let (order, items): (Vec<usize>, Vec<Item<u64>>) =
        preprocess(problem.items()).into_iter().unzip();

    let mut search = Search::new(&items);
    enumerate(
        &mut search,
        Node {
            j: 0,
            value: 0,
            capacity: problem.capacity().into(),
        },
    );

    let stats = Stats::exact(
        search.best_value(),
        items.len(),
        start.elapsed(),
        search.expanded,
        0,
    );
    debug!("exhaustive: value={} stats={:?}", stats.value, stats);

    (search.into_solution(&order), stats)
}

#[derive(Debug, Clone, Copy)]
struct Node {
    j: usize,
    value: u64,
    capacity: u64,
}

/// Branch on each item of the subtree of `root`: first pack it (if it fits), then leave it out.
fn enumerate(search: &mut Search, root: Node) {
    let mut stack = vec![Frame::Visit(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Visit(node) => {
                if node.j >= search.items.len() {
                    continue;
                }

                search.expanded += 1;
                let item = search.items[node.j];

                stack.push(Frame::Exclude(node));

                if item.weight <= node.capacity {
                    let value = node.value + item.value;
                    stack.push(Frame::Unpack(node.j));
                    stack.push(Frame::Visit(Node {
                        j: node.j + 1,
                        value,
                        capacity: node.capacity - item.weight,
                    }));
                    search.pack(node.j, value);
                }
            }
            Frame::Unpack(j) => search.unpack(j),
            Frame::Exclude(node) => stack.push(Frame::Visit(Node {
                j: node.j + 1,
                ..node
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn problem(pairs: &[(u32, u32)], capacity: u32) -> Problem<u32> {
        let items = pairs.iter().copied().map(Item::from).collect();
        Problem::new(items, capacity).expect("valid problem")
    }

    #[rstest]
    #[case::example(&[(16, 2), (19, 3), (23, 4), (28, 5)], 7, vec![true, false, false, true], 44)]
    #[case::small(&[(5, 4), (6, 5), (3, 2)], 9, vec![true, true, false], 11)]
    #[case::zero_weight(&[(4, 0), (3, 5)], 0, vec![true, false], 4)]
    #[case::no_capacity(&[(16, 2), (19, 3)], 0, vec![false, false], 0)]
    #[case::no_items(&[], 10, vec![], 0)]
    fn exhaustive_feasible(
        #[case] pairs: &[(u32, u32)],
        #[case] capacity: u32,
        #[case] x: Vec<bool>,
        #[case] value: u64,
    ) {
        let problem = problem(pairs, capacity);

        let (solution, stats) = exhaustive(&problem);

        assert_eq!(Solution { x, value }, solution);
        assert!(stats.proved_optimal);
        assert_eq!(stats.pruned, 0);
    }

    #[test]
    fn exhaustive_visits_whole_tree() {
        // everything fits => the complete tree of inner nodes is visited: 2^n - 1
        let problem = problem(&[(1, 1), (2, 1), (3, 1), (4, 1)], 4);

        let (solution, stats) = exhaustive(&problem);

        assert_eq!(solution.value, 10);
        assert_eq!(stats.expanded, (1 << 4) - 1);
    }

    #[test]
    fn exhaustive_long_chain() {
        // nothing fits => the tree degenerates into a single path through all items
        let n = 100_000;
        let items = vec![Item::new(1u32, 1); n];
        let problem = Problem::new(items, 0).expect("valid problem");

        let (solution, stats) = exhaustive(&problem);

        assert_eq!(solution, Solution::empty(n));
        assert_eq!(stats.expanded, n as u64);
    }
}
