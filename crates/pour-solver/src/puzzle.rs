//! Container and state types for pouring puzzles.
//!
//! A [`State`] is an immutable value: two states are equal when every
//! position has the same capacity and amount. Moves never mutate a state,
//! they build a new one.
//!
//! Construction does not reject overfilled containers, so a goal can name
//! any fill level. Call [`State::validate`] before searching from a state.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::SolveError;

/// Inline capacity for container lists; most puzzles use three or four.
pub const INLINE_CONTAINERS: usize = 4;

/// A single container with a fixed capacity and its current amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Container {
    capacity: u32,
    amount: u32,
}

impl Container {
    pub fn new(capacity: u32, amount: u32) -> Self {
        Self { capacity, amount }
    }

    pub fn empty(capacity: u32) -> Self {
        Self {
            capacity,
            amount: 0,
        }
    }

    pub fn full(capacity: u32) -> Self {
        Self {
            capacity,
            amount: capacity,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Room left before the container is full
    pub fn free_space(&self) -> u32 {
        self.capacity.saturating_sub(self.amount)
    }

    /// Whether the amount fits within the capacity
    pub fn is_valid(&self) -> bool {
        self.amount <= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    pub fn is_full(&self) -> bool {
        self.amount >= self.capacity
    }
}

/// An ordered set of containers.
///
/// Capacities are fixed per position for a puzzle instance; only amounts
/// change between states.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct State {
    containers: SmallVec<[Container; INLINE_CONTAINERS]>,
}

impl State {
    pub fn new(containers: Vec<Container>) -> Self {
        Self {
            containers: SmallVec::from_vec(containers),
        }
    }

    /// Build a state from `(capacity, amount)` pairs
    pub fn from_pairs(pairs: &[(u32, u32)]) -> Self {
        Self {
            containers: pairs
                .iter()
                .map(|&(capacity, amount)| Container::new(capacity, amount))
                .collect(),
        }
    }

    /// Build a state by pairing each capacity with the amount at the same position
    pub fn with_amounts(capacities: &[u32], amounts: &[u32]) -> Result<Self, SolveError> {
        if capacities.len() != amounts.len() {
            return Err(SolveError::ContainerCountMismatch {
                start: capacities.len(),
                goal: amounts.len(),
            });
        }
        let pairs: Vec<(u32, u32)> = capacities
            .iter()
            .copied()
            .zip(amounts.iter().copied())
            .collect();
        Ok(Self::from_pairs(&pairs))
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    pub fn capacities(&self) -> Vec<u32> {
        self.containers.iter().map(Container::capacity).collect()
    }

    pub fn amounts(&self) -> Vec<u32> {
        self.containers.iter().map(Container::amount).collect()
    }

    /// Total liquid across all containers; pours never change it
    pub fn total_volume(&self) -> u64 {
        self.containers.iter().map(|c| u64::from(c.amount)).sum()
    }

    /// Check that every container's amount fits its capacity
    pub fn validate(&self) -> Result<(), SolveError> {
        match self.containers.iter().position(|c| !c.is_valid()) {
            Some(index) => {
                let c = self.containers[index];
                Err(SolveError::Overfilled {
                    index,
                    capacity: c.capacity,
                    amount: c.amount,
                })
            }
            None => Ok(()),
        }
    }

    /// Check that `other` describes the same puzzle instance
    pub fn same_shape(&self, other: &State) -> Result<(), SolveError> {
        if self.len() != other.len() {
            return Err(SolveError::ContainerCountMismatch {
                start: self.len(),
                goal: other.len(),
            });
        }
        for (index, (a, b)) in self.containers.iter().zip(other.containers.iter()).enumerate() {
            if a.capacity != b.capacity {
                return Err(SolveError::CapacityMismatch {
                    index,
                    start: a.capacity,
                    goal: b.capacity,
                });
            }
        }
        Ok(())
    }

    /// Copy of this state with two positions replaced
    pub(crate) fn with_transfer(
        &self,
        from: usize,
        to: usize,
        from_amount: u32,
        to_amount: u32,
    ) -> Self {
        let mut containers = self.containers.clone();
        containers[from].amount = from_amount;
        containers[to].amount = to_amount;
        Self { containers }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, container) in self.containers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", container.amount)?;
        }
        write!(f, ")")
    }
}
