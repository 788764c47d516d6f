//! Legal pour generation.
//!
//! A pour moves liquid from a non-empty source into a non-full destination
//! until the source is empty or the destination is full, whichever comes
//! first. Candidates are produced lazily in a fixed order: source index
//! ascending, then destination index ascending.

use std::fmt;

use serde::Serialize;

use crate::error::SolveError;
use crate::puzzle::State;

/// A single pour action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pour {
    pub from: usize,
    pub to: usize,
    pub amount: u32,
}

impl fmt::Display for Pour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pour {} -> {} ({})", self.from, self.to, self.amount)
    }
}

/// Lazy iterator over the legal pours of one state.
///
/// A clone continues from the same position; call [`candidate_pours`]
/// again to walk the sequence from the beginning.
#[derive(Debug, Clone)]
pub struct CandidatePours<'a> {
    state: &'a State,
    from: usize,
    to: usize,
}

impl Iterator for CandidatePours<'_> {
    type Item = Pour;

    fn next(&mut self) -> Option<Pour> {
        let containers = self.state.containers();
        while self.from < containers.len() {
            let source = containers[self.from];
            if source.is_empty() {
                self.from += 1;
                self.to = 0;
                continue;
            }

            while self.to < containers.len() {
                let to = self.to;
                self.to += 1;
                if to == self.from {
                    continue;
                }
                let dest = containers[to];
                if dest.is_full() {
                    continue;
                }
                return Some(Pour {
                    from: self.from,
                    to,
                    amount: source.amount().min(dest.free_space()),
                });
            }

            self.from += 1;
            self.to = 0;
        }
        None
    }
}

/// Enumerate every legal pour from `state`
pub fn candidate_pours(state: &State) -> CandidatePours<'_> {
    CandidatePours {
        state,
        from: 0,
        to: 0,
    }
}

/// Apply a pour, producing the resulting state.
///
/// Fails only when the pour breaks a solver invariant (zero amount, bad
/// index, or a capacity overflow), which indicates a generator defect.
pub fn apply_pour(state: &State, pour: &Pour) -> Result<State, SolveError> {
    if pour.amount == 0 {
        return Err(SolveError::InvariantViolation(format!(
            "{} moves nothing in state {}",
            pour, state
        )));
    }
    if pour.from == pour.to {
        return Err(SolveError::InvariantViolation(format!(
            "{} has the same source and destination",
            pour
        )));
    }

    let (source, dest) = match (state.get(pour.from), state.get(pour.to)) {
        (Some(s), Some(d)) => (*s, *d),
        _ => {
            return Err(SolveError::InvariantViolation(format!(
                "{} is out of range for {} containers",
                pour,
                state.len()
            )))
        }
    };

    if pour.amount > source.amount() || pour.amount > dest.free_space() {
        return Err(SolveError::InvariantViolation(format!(
            "{} exceeds available liquid or space in state {}",
            pour, state
        )));
    }

    Ok(state.with_transfer(
        pour.from,
        pour.to,
        source.amount() - pour.amount,
        dest.amount() + pour.amount,
    ))
}

/// All states reachable from `state` with exactly one pour
pub fn next_states(state: &State) -> impl Iterator<Item = Result<(Pour, State), SolveError>> + '_ {
    candidate_pours(state).map(move |pour| apply_pour(state, &pour).map(|next| (pour, next)))
}

/// Find the pour that turns `from` into `to`, if there is one
pub fn pour_between(from: &State, to: &State) -> Option<Pour> {
    candidate_pours(from).find(|pour| apply_pour(from, pour).is_ok_and(|next| &next == to))
}
