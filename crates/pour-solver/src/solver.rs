//! Breadth-first search for the shortest pour sequence.
//!
//! The frontier is a FIFO queue of `(state, predecessor)` pairs and a single
//! predecessor map doubles as the visited set. A state is recorded the first
//! time it is expanded, so its recorded predecessor lies on a shortest path
//! from the start.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::error::SolveError;
use crate::moves::{next_states, pour_between, Pour};
use crate::path::{reconstruct, PredecessorMap};
use crate::puzzle::State;

/// Optional bounds imposed by the caller. Both default to unbounded.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Stop after this many states have been visited
    pub max_states: Option<usize>,
    /// Stop after this much wall-clock time
    pub timeout: Option<Duration>,
}

/// A shortest sequence of states from start to goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Start first, goal last
    pub states: Vec<State>,
    /// `pours[i]` turns `states[i]` into `states[i + 1]`
    pub pours: Vec<Pour>,
}

impl Solution {
    pub fn pour_count(&self) -> usize {
        self.pours.len()
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// Every reachable state was explored without meeting the goal
    NoSolution,
    /// A bound from [`SolverConfig`] stopped the search early
    LimitReached,
}

impl SearchOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Result of a search with run statistics
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SearchOutcome,
    /// Whether the reachable state space was fully explored
    pub search_exhausted: bool,
    /// Entries in the predecessor map when the search stopped
    pub states_visited: usize,
    /// Pairs pushed onto the frontier, including the start
    pub states_enqueued: usize,
    pub time_elapsed_ms: u64,
}

/// Find a shortest pour sequence from `start` to `goal` with no bounds
pub fn search(start: &State, goal: &State) -> Result<SearchOutcome, SolveError> {
    solve(start, goal, &SolverConfig::default()).map(|result| result.outcome)
}

/// Find a shortest pour sequence from `start` to `goal`.
///
/// Fails fast when the start is overfilled or the two states belong to
/// different puzzle instances. An unreachable goal, including one no legal
/// state can match, is reported as [`SearchOutcome::NoSolution`].
pub fn solve(
    start: &State,
    goal: &State,
    config: &SolverConfig,
) -> Result<SolverResult, SolveError> {
    start.validate()?;
    start.same_shape(goal)?;

    let start_time = Instant::now();
    let deadline = config.timeout.map(|t| start_time + t);

    debug!(
        containers = start.len(),
        volume = start.total_volume(),
        start = %start,
        goal = %goal,
        "starting search"
    );

    let mut frontier: VecDeque<(State, Option<State>)> = VecDeque::new();
    let mut predecessors = PredecessorMap::new();
    frontier.push_back((start.clone(), None));
    let mut states_enqueued: usize = 1;

    while let Some((state, prev)) = frontier.pop_front() {
        if &state == goal {
            predecessors.entry(state).or_insert(prev);
            let states = reconstruct(goal, &predecessors)?;
            let pours = label_pours(&states)?;

            debug!(
                pours = pours.len(),
                visited = predecessors.len(),
                "goal reached"
            );

            return Ok(SolverResult {
                outcome: SearchOutcome::Solved(Solution { states, pours }),
                search_exhausted: false,
                states_visited: predecessors.len(),
                states_enqueued,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        if predecessors.contains_key(&state) {
            continue;
        }

        // Bounds only stop the search when there is a new state to expand
        if bound_reached(config, deadline, predecessors.len()) {
            debug!(
                visited = predecessors.len(),
                frontier = frontier.len(),
                "search bound reached"
            );
            return Ok(SolverResult {
                outcome: SearchOutcome::LimitReached,
                search_exhausted: false,
                states_visited: predecessors.len(),
                states_enqueued,
                time_elapsed_ms: start_time.elapsed().as_millis() as u64,
            });
        }

        for next in next_states(&state) {
            let (pour, next) = next?;
            if !predecessors.contains_key(&next) {
                trace!(from = %state, to = %next, %pour, "enqueue");
                frontier.push_back((next, Some(state.clone())));
                states_enqueued += 1;
            }
        }
        predecessors.insert(state, prev);
    }

    debug!(visited = predecessors.len(), "state space exhausted");

    Ok(SolverResult {
        outcome: SearchOutcome::NoSolution,
        search_exhausted: true,
        states_visited: predecessors.len(),
        states_enqueued,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    })
}

fn bound_reached(config: &SolverConfig, deadline: Option<Instant>, visited: usize) -> bool {
    config.max_states.is_some_and(|max| visited >= max)
        || deadline.is_some_and(|d| Instant::now() >= d)
}

/// Recover the pour behind each consecutive pair of a path
fn label_pours(states: &[State]) -> Result<Vec<Pour>, SolveError> {
    states
        .windows(2)
        .map(|pair| {
            pour_between(&pair[0], &pair[1]).ok_or_else(|| {
                SolveError::InvariantViolation(format!(
                    "no single pour leads from {} to {}",
                    pair[0], pair[1]
                ))
            })
        })
        .collect()
}
