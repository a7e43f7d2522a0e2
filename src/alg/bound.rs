//! Fractional relaxation bound shared by all Branch&Bound solvers.
use crate::model::Item;

/// Optimistic bound on the best objective value reachable by completing a partial solution
/// with items `items[start..]`.
///
/// The partial solution has already collected `value` and has `capacity` left. Remaining items
/// are packed whole in the given order while they fit. The first item that does not fit
/// contributes the fraction `capacity / weight * value` (truncated toward zero) and stops the
/// walk.
///
/// The bound is admissible (never below the best integral completion) and tight only if
/// `items` are sorted by non-increasing value density.
///
/// Runs in `O(n - start)` time.
pub fn bound(items: &[Item<u64>], start: usize, value: u64, capacity: u64) -> u64 {
    let mut ub = value;
    let mut capacity = capacity;

    for item in items.iter().skip(start) {
        if item.weight <= capacity {
            capacity -= item.weight;
            ub += item.value;
        } else {
            // item.weight > capacity >= 0, so the division is safe
            let fraction = capacity as u128 * item.value as u128 / item.weight as u128;
            ub += fraction as u64;
            break;
        }
    }

    ub
}
