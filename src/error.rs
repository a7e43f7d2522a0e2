//! Error types for knapsack solvers.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while building a problem or running a solver.
///
/// Solvers never return partial results: on error the caller's state is left untouched.
#[derive(Error, Debug)]
pub enum KnapsackError {
    /// Capacity cannot be used to size the DP table
    #[error("capacity {0} cannot be represented as a table width")]
    InvalidCapacity(u64),

    /// Working buffer could not be allocated
    #[error("failed to allocate working buffer: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// Accumulated values or weights do not fit into `u64`
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),
}

/// Result type for knapsack operations.
pub type KnapsackResult<T> = Result<T, KnapsackError>;
