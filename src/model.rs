//! # Problem and solution model
//!
//! A 0/1 knapsack instance is a [Problem]: an ordered sequence of [Item]s together with the
//! knapsack capacity. Every solver reads the problem by reference and returns a [Solution]
//! paired with [Stats] collected during the search.
//!
//! Item values and weights are generic over an unsigned integer type (see [Int]), while all
//! accumulated quantities (objective values, packed weights, bounds) are kept in `u64`.
use std::cmp::{Ordering, Reverse};
use std::time::Duration;

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use rand::Rng;

use crate::error::{KnapsackError, KnapsackResult};
use crate::Int;

/// Single item that can be packed into the knapsack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<T> {
    /// value gained by packing this item
    pub value: T,
    /// capacity consumed by packing this item
    pub weight: T,
}

impl<T: Int> Item<T> {
    pub fn new(value: T, weight: T) -> Self {
        Self { value, weight }
    }

    /// Value density `value / weight` of this item.
    ///
    /// Items with zero weight have infinite density since they always fit.
    ///
    /// # Example
    /// ```
    /// # extern crate knapsack;
    /// use knapsack::Item;
    ///
    /// let a = Item::new(16u32, 2);
    /// let b = Item::new(19u32, 3);
    /// assert!(a.density() > b.density());
    /// assert!(Item::new(0u32, 0).density() > a.density());
    /// ```
    pub fn density(&self) -> Density {
        Density {
            value: self.value.into(),
            weight: self.weight.into(),
        }
    }

    #[inline]
    fn widen(&self) -> Item<u64> {
        Item {
            value: self.value.into(),
            weight: self.weight.into(),
        }
    }
}

impl<T> From<(T, T)> for Item<T> {
    /// Create an item from a `(value, weight)` pair.
    fn from((value, weight): (T, T)) -> Self {
        Self { value, weight }
    }
}

/// Exact value density of an [Item] (i.e. the rational number `value / weight`).
///
/// Densities are compared by cross-multiplication in `u128`, so there is no rounding involved.
#[derive(Debug, Clone, Copy)]
pub struct Density {
    value: u64,
    weight: u64,
}

impl Ord for Density {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.weight == 0, other.weight == 0) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let lhs = self.value as u128 * other.weight as u128;
                let rhs = other.value as u128 * self.weight as u128;
                lhs.cmp(&rhs)
            }
        }
    }
}

impl PartialOrd for Density {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Density {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Density {}

/// Immutable instance of the 0/1 knapsack problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T> {
    items: Vec<Item<T>>,
    capacity: T,
}

impl<T: Int> Problem<T> {
    /// Create new problem instance from given `items` and knapsack `capacity`.
    ///
    /// Fails with [KnapsackError::ArithmeticOverflow] if the total value or the total weight of
    /// all items does not fit into `u64`. Once constructed, no solver can overflow.
    ///
    /// # Example
    /// ```
    /// # extern crate knapsack;
    /// use knapsack::{Item, Problem};
    ///
    /// let items = vec![Item::new(5u8, 4), Item::new(6, 5), Item::new(3, 2)];
    /// let problem = Problem::new(items, 9).expect("valid problem");
    /// assert_eq!(problem.len(), 3);
    ///
    /// let items = vec![Item::new(u64::MAX, 1), Item::new(1, 1)];
    /// assert!(Problem::new(items, 2).is_err());
    /// ```
    pub fn new(items: Vec<Item<T>>, capacity: T) -> KnapsackResult<Self> {
        let mut total_value = 0u64;
        let mut total_weight = 0u64;

        for item in items.iter() {
            total_value = total_value
                .checked_add(item.value.into())
                .ok_or(KnapsackError::ArithmeticOverflow("total item value"))?;
            total_weight = total_weight
                .checked_add(item.weight.into())
                .ok_or(KnapsackError::ArithmeticOverflow("total item weight"))?;
        }

        Ok(Self { items, capacity })
    }

    /// Items of this instance in their original order
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Knapsack capacity
    pub fn capacity(&self) -> T {
        self.capacity
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Problem<u32> {
    /// Generate a random instance with `n` items.
    ///
    /// Values are drawn uniformly from `1..=max_value`, weights from `1..=max_weight` and the
    /// capacity is set to a half of the total weight (saturated at `u32::MAX`).
    ///
    /// # Panics
    /// Panics if `max_value` or `max_weight` is zero.
    pub fn random<R: Rng + ?Sized>(n: usize, max_value: u32, max_weight: u32, rng: &mut R) -> Self {
        let items = (0..n)
            .map(|_| Item::new(rng.gen_range(1..=max_value), rng.gen_range(1..=max_weight)))
            .collect_vec();

        // n values of u32 always fit into u64 for any realistic n, so no validation is needed
        let total_weight: u64 = items.iter().map(|item| u64::from(item.weight)).sum();
        let capacity = u32::try_from(total_weight / 2).unwrap_or(u32::MAX);

        Self { items, capacity }
    }
}

/// Data structure holding the decision vector `x` and objective `value` of a solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// decision variables: `x[j]` is `true` iff item `j` is packed
    pub x: Vec<bool>,
    /// objective value (total value of packed items)
    pub value: u64,
}

impl Solution {
    /// Solution of an instance with `n` items which packs nothing
    pub fn empty(n: usize) -> Self {
        Self {
            x: vec![false; n],
            value: 0,
        }
    }

    /// Indices of packed items in increasing order.
    ///
    /// # Example
    /// ```
    /// # extern crate knapsack;
    /// let solution = knapsack::Solution { x: vec![true, false, true], value: 8 };
    /// assert_eq!(solution.packed().collect::<Vec<_>>(), vec![0, 2]);
    /// ```
    pub fn packed(&self) -> impl Iterator<Item = usize> + '_ {
        self.x.iter().positions(|&x| x)
    }

    /// Total weight of packed items. Decisions beyond the items of `problem` are ignored.
    pub fn weight<T: Int>(&self, problem: &Problem<T>) -> u64 {
        self.x
            .iter()
            .zip(problem.items())
            .filter(|(x, _)| **x)
            .map(|(_, item)| -> u64 { item.weight.into() })
            .sum()
    }

    /// Check that this solution matches the `problem` dimension, respects its capacity and that
    /// the objective value equals the total value of packed items.
    pub fn is_feasible<T: Int>(&self, problem: &Problem<T>) -> bool {
        if self.x.len() != problem.len() {
            return false;
        }
        let value: u64 = self
            .packed()
            .map(|j| -> u64 { problem.items()[j].value.into() })
            .sum();
        let capacity: u64 = problem.capacity().into();
        value == self.value && self.weight(problem) <= capacity
    }

    /// Translate `bits` over re-ordered items back to the original indexing given by `order`,
    /// i.e. bit `k` stands for item `order[k]`.
    pub(crate) fn from_bits(bits: &FixedBitSet, value: u64, order: &[usize]) -> Self {
        let mut x = vec![false; order.len()];
        for k in bits.ones() {
            x[order[k]] = true;
        }
        Self { x, value }
    }
}

/// Data structure that contains various statistics collected while solving.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// objective value of the returned solution
    pub value: u64,
    /// true iff the returned solution is guaranteed to be optimal
    pub proved_optimal: bool,
    /// number of items
    pub num_items: usize,
    /// elapsed time since solving started
    pub elapsed: Duration,
    /// no. expanded search nodes (DP table cells for the DP solver)
    pub expanded: u64,
    /// no. search nodes pruned by the bound
    pub pruned: u64,
}

impl Stats {
    /// Create new stats for an approximate algorithm. All search-related statistics are set to 0
    /// and the solution is not optimal by definition.
    pub fn approx(value: u64, num_items: usize, elapsed: Duration) -> Self {
        Self {
            value,
            proved_optimal: false,
            num_items,
            elapsed,
            expanded: 0,
            pruned: 0,
        }
    }

    /// Create new stats for an exact algorithm that ran to completion.
    pub fn exact(
        value: u64,
        num_items: usize,
        elapsed: Duration,
        expanded: u64,
        pruned: u64,
    ) -> Self {
        Self {
            value,
            proved_optimal: true,
            num_items,
            elapsed,
            expanded,
            pruned,
        }
    }
}

/// Copy `items` to a vector of pairs `(j, item)` where `j` is the original index and `item` is
/// widened to `u64`.
#[inline]
pub(crate) fn preprocess<T: Int>(items: &[Item<T>]) -> Vec<(usize, Item<u64>)> {
    items
        .iter()
        .map(Item::widen)
        .enumerate()
        .collect::<Vec<(usize, Item<u64>)>>()
}

/// Sort given slice of `(j, item)` pairs in place in non-increasing order of value density.
/// The sort is stable, so ties keep their original order.
#[inline]
pub(crate) fn sort_by_density(items: &mut [(usize, Item<u64>)]) {
    items.sort_by_key(|(_, item)| Reverse(item.density()));
}

/// Sort items of the `problem` by non-increasing value density and split the result into
///  - `order[k]`: the original index of the `k`-th densest item
///  - `items[k]`: the `k`-th densest item itself
pub(crate) fn density_order<T: Int>(problem: &Problem<T>) -> (Vec<usize>, Vec<Item<u64>>) {
    let mut items = preprocess(problem.items());
    sort_by_density(&mut items);
    items.into_iter().unzip()
}
