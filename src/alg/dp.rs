//! # Dynamic programming
//! Exact pseudo-polynomial solver based on the classic table
//! `T[i][c] = best value using the first i items with capacity c`.
//!
//! The table holds `(n + 1) * (C + 1)` cells, where `C` is the capacity clamped to the total
//! item weight. This is the dominant cost of this solver both in time and memory. In exchange,
//! the result is always optimal and no search is needed.
use std::time::Instant;

use log::debug;

use crate::error::{KnapsackError, KnapsackResult};
use crate::model::{preprocess, Item, Problem, Solution, Stats};
use crate::Int;

/// Search for optimal solution of the 0/1 knapsack using dynamic programming.
///
/// Runs in `O(n * C)` time and space where `n` is the number of items and `C` the capacity
/// (or the total weight of all items if that is smaller).
///
/// ## Errors
///  - [KnapsackError::InvalidCapacity] if the table dimensions are not representable
///  - [KnapsackError::AllocationFailure] if the table cannot be allocated
///
/// ## Example
/// ```rust
/// # extern crate knapsack;
/// use knapsack::{dp, Item, Problem};
///
/// let items = vec![Item::new(5u32, 4), Item::new(6, 5), Item::new(3, 2)];
/// let problem = Problem::new(items, 9).expect("valid problem");
///
/// let (solution, stats) = dp::dp(&problem).expect("table fits into memory");
/// assert_eq!(solution.x, vec![true, true, false]);
/// assert_eq!(solution.value, 11);
/// assert!(stats.proved_optimal);
/// ```
pub fn dp<T: Int>(problem: &Problem<T>) -> KnapsackResult<(Solution, Stats)> {
    let start = Instant::now();

    let items = preprocess(problem.items())
        .into_iter()
        .map(|(_, item)| item)
        .collect::<Vec<Item<u64>>>();

    let n = items.len();

    // columns beyond the total weight would all repeat the last one
    let total_weight = items.iter().map(|item| item.weight).sum::<u64>();
    let capacity = total_weight.min(problem.capacity().into());

    let mut table = Table::new(n + 1, capacity)?;
    table.fill(&items);

    let value = table.get(n, table.width - 1);
    let x = table.backtrack(&items);

    let solution = Solution { x, value };

    let expanded = (n * table.width) as u64;
    let stats = Stats::exact(value, n, start.elapsed(), expanded, 0);
    debug!("dp: value={} stats={:?}", value, stats);

    Ok((solution, stats))
}

/// Row-major DP table with `width = capacity + 1` columns
struct Table {
    width: usize,
    cells: Vec<u64>,
}

impl Table {
    fn new(rows: usize, capacity: u64) -> KnapsackResult<Self> {
        let width = usize::try_from(capacity)
            .ok()
            .and_then(|c| c.checked_add(1))
            .ok_or(KnapsackError::InvalidCapacity(capacity))?;

        let size = rows
            .checked_mul(width)
            .ok_or(KnapsackError::InvalidCapacity(capacity))?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(size)?;
        // row 0 (no items) stays all zeros
        cells.resize(size, 0);

        Ok(Self { width, cells })
    }

    #[inline]
    fn get(&self, row: usize, c: usize) -> u64 {
        self.cells[row * self.width + c]
    }

    /// Fill rows `1..=n` so that `T[i][c] = max(T[i-1][c], v + T[i-1][c - w])` where `(v, w)`
    /// is the `i`-th item (the second option only if `w <= c`).
    fn fill(&mut self, items: &[Item<u64>]) {
        let width = self.width;

        for (i, item) in items.iter().enumerate() {
            let row = i + 1;
            let (prev, curr) = self.cells.split_at_mut(row * width);
            let prev = &prev[i * width..];
            let curr = &mut curr[..width];

            for c in 0..width {
                curr[c] = if item.weight > c as u64 {
                    prev[c]
                } else {
                    let packed = item.value + prev[c - item.weight as usize];
                    prev[c].max(packed)
                };
            }
        }
    }

    /// Reconstruct decision variables by walking the rows bottom-up from the last column.
    fn backtrack(&self, items: &[Item<u64>]) -> Vec<bool> {
        let n = items.len();
        let mut x = vec![false; n];
        let mut c = self.width - 1;

        for row in (1..=n).rev() {
            if self.get(row, c) > self.get(row - 1, c) {
                let weight = items[row - 1].weight;
                assert!(
                    weight <= c as u64,
                    "item {} of weight {} packed with remaining capacity {}",
                    row - 1,
                    weight,
                    c
                );
                x[row - 1] = true;
                c -= weight as usize;
            }
        }

        x
    }
}
