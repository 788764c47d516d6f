//! Shortest-path solver for water pouring puzzles.
//!
//! A puzzle is a row of containers with fixed capacities. A move pours one
//! container into another until the source is empty or the destination is
//! full. [`search`] runs a breadth-first search from a start state and
//! returns the shortest sequence of states that reaches the goal.

pub mod error;
pub mod moves;
pub mod path;
pub mod puzzle;
pub mod solver;
pub mod verify;

// Re-export main types
pub use error::SolveError;
pub use moves::{apply_pour, candidate_pours, next_states, pour_between, CandidatePours, Pour};
pub use path::{reconstruct, PredecessorMap};
pub use puzzle::{Container, State};
pub use solver::{search, solve, SearchOutcome, Solution, SolverConfig, SolverResult};
pub use verify::{verify_path, verify_solution, PathDefect};
