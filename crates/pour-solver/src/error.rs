//! Error types for puzzle construction and search.
//!
//! An unreachable goal is not an error; see [`crate::solver::SearchOutcome`].

use thiserror::Error;

/// Errors raised while building states or running a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("container {index} holds {amount} but its capacity is {capacity}")]
    Overfilled {
        index: usize,
        capacity: u32,
        amount: u32,
    },

    #[error("start has {start} containers but goal has {goal}")]
    ContainerCountMismatch { start: usize, goal: usize },

    #[error("container {index} has capacity {start} in start but {goal} in goal")]
    CapacityMismatch { index: usize, start: u32, goal: u32 },

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl SolveError {
    /// True for errors caused by a malformed puzzle rather than a solver defect
    pub fn is_invalid_instance(&self) -> bool {
        matches!(
            self,
            SolveError::Overfilled { .. }
                | SolveError::ContainerCountMismatch { .. }
                | SolveError::CapacityMismatch { .. }
        )
    }
}
