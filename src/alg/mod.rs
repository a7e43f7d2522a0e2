//! Solvers of the 0/1 knapsack problem and the search machinery they share.
pub mod bound;

pub mod best_first;
pub mod bnb;
pub mod dp;
pub mod exhaustive;
pub mod greedy;
pub mod lds;

pub(crate) mod search;

pub use greedy::Rank;
