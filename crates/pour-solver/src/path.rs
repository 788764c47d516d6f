//! Rebuild a start-to-goal path from the predecessor map.

use std::collections::HashMap;

use crate::error::SolveError;
use crate::puzzle::State;

/// Map from each visited state to the state that first discovered it.
/// The start state maps to `None`.
pub type PredecessorMap = HashMap<State, Option<State>>;

/// Walk predecessors back from `goal` and return the path in start-to-goal order
pub fn reconstruct(goal: &State, predecessors: &PredecessorMap) -> Result<Vec<State>, SolveError> {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    loop {
        let prev = predecessors.get(current).ok_or_else(|| {
            SolveError::InvariantViolation(format!(
                "state {} is on the path but was never recorded",
                current
            ))
        })?;

        match prev {
            None => break,
            Some(prev) => {
                // A chain longer than the map can only be a cycle
                if path.len() > predecessors.len() {
                    return Err(SolveError::InvariantViolation(format!(
                        "predecessor chain from {} loops",
                        goal
                    )));
                }
                path.push(prev.clone());
                current = prev;
            }
        }
    }

    path.reverse();
    Ok(path)
}
