//! # 0/1 knapsack solvers
//! Given `n` items, each with a value and a weight, and a knapsack capacity, the *0/1 knapsack
//! problem* asks for a subset of items of maximum total value whose total weight does not
//! exceed the capacity. The problem is *NP-hard*.
//!
//! ## Solvers
//! This crate provides a suite of independent solvers for the same [Problem]:
//!
//! | solver                         | module         | exact |
//! |--------------------------------|----------------|-------|
//! | greedy (value/weight/density)  | [greedy]       | no    |
//! | dynamic programming            | [dp]           | yes   |
//! | exhaustive enumeration         | [exhaustive]   | yes   |
//! | depth-first Branch&Bound       | [bnb]          | yes   |
//! | best-first Branch&Bound        | [best_first]   | yes   |
//! | limited discrepancy search     | [lds]          | yes   |
//!
//! All Branch&Bound variants prune the search by the fractional relaxation [bound::bound] over
//! items sorted by non-increasing value density.
//!
//! Each solver returns the [Solution] (decision vector and objective value) together with
//! [Stats] which, among other things, tell whether the solution is proved to be optimal.
//! The [Solver] enum selects a solver by value and is the entry point for drivers that want
//! to configure or run several of them.
//!
//! ## Example
//! ```
//! # extern crate knapsack;
//! use knapsack::{Item, Problem, Rank, Solver};
//!
//! let items = vec![Item::new(16u32, 2), Item::new(19, 3), Item::new(23, 4), Item::new(28, 5)];
//! let problem = Problem::new(items, 7).expect("valid problem");
//!
//! let (solution, stats) = Solver::BestFirst.solve(&problem).expect("solution");
//! assert_eq!(solution.value, 44);
//! assert!(stats.proved_optimal);
//!
//! let (greedy, stats) = Solver::Greedy(Rank::Density).solve(&problem).expect("solution");
//! assert!(greedy.value <= solution.value);
//! assert!(!stats.proved_optimal);
//! ```
use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

pub mod alg;
pub mod error;
pub mod model;
pub mod solver;

pub use alg::{best_first, bnb, bound, dp, exhaustive, greedy, lds, Rank};
pub use error::{KnapsackError, KnapsackResult};
pub use model::{Density, Item, Problem, Solution, Stats};
pub use solver::Solver;

/// Unsigned integer type of item values, weights and knapsack capacity.
///
/// Any such value can be widened to `u64` which is used for all accumulated quantities.
pub trait Int: PrimInt + Unsigned + Into<u64> + Debug {}

impl<T> Int for T where T: PrimInt + Unsigned + Into<u64> + Debug {}
