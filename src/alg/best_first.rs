//! # Best-first Branch&Bound
//! Search driven by a max-heap of open nodes ordered by their optimistic bound. The most
//! promising node is always expanded next, so once the top of the heap cannot beat the
//! incumbent, neither can any other open node and the whole search stops.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use fixedbitset::FixedBitSet;
use log::{debug, trace};

use crate::model::{density_order, Item, Problem, Solution, Stats};
use crate::Int;
use super::bound::bound;

/// Search for optimal solution of the 0/1 knapsack using best-first Branch&Bound.
///
/// Items are sorted by non-increasing value density and the search tree branches on them in
/// this order. Each open node owns its partial decision vector which is moved out of the queue
/// when the node is expanded and dropped with the queue once the search terminates.
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{best_first, Item, Problem};
///
/// let items = vec![Item::new(5u32, 4), Item::new(6, 5), Item::new(3, 2)];
/// let problem = Problem::new(items, 9).expect("valid problem");
///
/// let (solution, stats) = best_first::best_first(&problem);
/// assert_eq!(solution.x, vec![true, true, false]);
/// assert_eq!(solution.value, 11);
/// assert!(stats.proved_optimal);
/// ```
pub fn best_first<T: Int>(problem: &Problem<T>) -> (Solution, Stats) {
    let start = Instant::now();

    let (order, items) = density_order(problem);
    let n = items.len();
    let capacity = problem.capacity().into();

    let mut best = FixedBitSet::with_capacity(n);
    let mut best_value = 0;

    let mut expanded = 0u64;
    let mut pruned = 0u64;

    let mut queue = BinaryHeap::new();
    queue.push(Node::root(n, capacity, bound(&items, 0, 0, capacity)));

    while let Some(node) = queue.pop() {
        expanded += 1;

        if node.value > best_value {
            trace!("new incumbent: {} -> {}", best_value, node.value);
            best.clone_from(&node.x);
            best_value = node.value;
        }

        // this node has the highest bound of all open nodes => none of them can improve
        if node.j >= n || node.ub <= best_value {
            pruned += queue.len() as u64;
            break;
        }

        let (include, exclude) = node.branch(&items);

        if let Some(include) = include {
            queue.push(include);
        }
        queue.push(exclude);
    }

    let stats = Stats::exact(best_value, n, start.elapsed(), expanded, pruned);
    debug!("best-first: value={} stats={:?}", best_value, stats);

    (Solution::from_bits(&best, best_value, &order), stats)
}

/// Open node of the search tree
#[derive(Debug)]
struct Node {
    /// decisions on (density-sorted) items `0..j`
    x: FixedBitSet,
    /// objective value of the partial solution
    value: u64,
    /// next item to branch on
    j: usize,
    /// remaining capacity
    capacity: u64,
    /// optimistic bound on any completion of this node
    ub: u64,
}

impl Node {
    fn root(n: usize, capacity: u64, ub: u64) -> Self {
        Self {
            x: FixedBitSet::with_capacity(n),
            value: 0,
            j: 0,
            capacity,
            ub,
        }
    }

    /// Consume this node and create its children: packing item `j` (only if it fits) and
    /// leaving it out. The latter reuses the decision buffer of this node.
    fn branch(self, items: &[Item<u64>]) -> (Option<Node>, Node) {
        let item = items[self.j];

        let include = if item.weight <= self.capacity {
            let mut x = self.x.clone();
            x.insert(self.j);
            Some(Node {
                x,
                value: self.value + item.value,
                j: self.j + 1,
                capacity: self.capacity - item.weight,
                // item j was the first one in the parent's bound completion
                ub: self.ub,
            })
        } else {
            None
        };

        let exclude = Node {
            ub: bound(items, self.j + 1, self.value, self.capacity),
            j: self.j + 1,
            ..self
        };

        (include, exclude)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // max-heap on the bound, ties go to deeper nodes which are closer to a complete solution
        self.ub.cmp(&other.ub).then_with(|| self.j.cmp(&other.j))
    }
}
