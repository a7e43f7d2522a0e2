use fixedbitset::FixedBitSet;
use log::trace;

use crate::model::{Item, Solution};

/// Pending step of a depth-first search over nodes `N` kept on an explicit stack.
///
/// Frames of a node are pushed in reverse order of execution: `Exclude`, `Unpack` and then the
/// `Visit` of the child that packs the item. So the include subtree is finished and its item
/// unpacked before the exclude branch starts.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Frame<N> {
    /// expand node
    Visit(N),
    /// undo [Search::pack] of item `j`
    Unpack(usize),
    /// leave out the item of given (parent) node
    Exclude(N),
}

/// Working state of a backtracking search over `items`.
///
/// The search mutates a single decision buffer `x` (set bit, descend, clear bit) and copies it
/// into the incumbent `best` whenever a strictly better objective value is reached.
pub(crate) struct Search<'a> {
    pub items: &'a [Item<u64>],
    /// current (partial) decision vector
    x: FixedBitSet,
    /// incumbent decision vector
    best: FixedBitSet,
    /// objective value of the incumbent
    best_value: u64,
    /// no. visited search nodes
    pub expanded: u64,
    /// no. nodes cut off by the bound
    pub pruned: u64,
}

impl<'a> Search<'a> {
    pub fn new(items: &'a [Item<u64>]) -> Self {
        Self {
            items,
            x: FixedBitSet::with_capacity(items.len()),
            best: FixedBitSet::with_capacity(items.len()),
            best_value: 0,
            expanded: 0,
            pruned: 0,
        }
    }

    #[inline]
    pub fn best_value(&self) -> u64 {
        self.best_value
    }

    /// Pack item `j` into the current solution which then has objective `value` and record it
    /// as the new incumbent if it beats the current one.
    #[inline]
    pub fn pack(&mut self, j: usize, value: u64) {
        self.x.insert(j);
        if value > self.best_value {
            trace!("new incumbent: {} -> {}", self.best_value, value);
            self.best.clone_from(&self.x);
            self.best_value = value;
        }
    }

    /// Revert [Search::pack] of item `j` (the incumbent is kept).
    #[inline]
    pub fn unpack(&mut self, j: usize) {
        self.x.set(j, false);
    }

    /// Drop the current partial solution and start over from an empty one.
    #[inline]
    pub fn reset(&mut self) {
        self.x.clear();
    }

    /// Consume the search and return its incumbent with item indices translated via `order`.
    pub fn into_solution(self, order: &[usize]) -> Solution {
        Solution::from_bits(&self.best, self.best_value, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incumbent_tracking() {
        let items = vec![Item::new(3u64, 1), Item::new(5, 2), Item::new(1, 1)];
        let mut search = Search::new(&items);

        search.pack(0, 3);
        search.pack(1, 8);
        assert_eq!(search.best_value(), 8);

        // backtrack and explore a worse branch => incumbent stays
        search.unpack(1);
        search.pack(2, 4);
        assert_eq!(search.best_value(), 8);

        search.reset();
        let solution = search.into_solution(&[0, 1, 2]);
        assert_eq!(solution.x, vec![true, true, false]);
        assert_eq!(solution.value, 8);
    }
}
