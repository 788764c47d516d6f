//! Property-based tests for the pour solver.
//!
//! Puzzles are small random container sets; every claim is checked against
//! a plain breadth-first distance computed over amount vectors.

use std::collections::{HashMap, VecDeque};

use pour_solver::{next_states, search, verify_path, SearchOutcome, State};
use proptest::prelude::*;

fn amounts_for(capacities: Vec<u32>) -> impl Strategy<Value = Vec<u32>> {
    capacities.into_iter().map(|c| 0..=c).collect::<Vec<_>>()
}

prop_compose! {
    fn arbitrary_puzzle()(capacities in prop::collection::vec(1u32..=7, 2..=4))
        (start in amounts_for(capacities.clone()),
         goal in amounts_for(capacities.clone()),
         capacities in Just(capacities)) -> (Vec<u32>, Vec<u32>, Vec<u32>) {
        (capacities, start, goal)
    }
}

/// Minimum pour count from `start` to `goal`, computed without the crate
fn reference_distance(capacities: &[u32], start: &[u32], goal: &[u32]) -> Option<usize> {
    let mut dist: HashMap<Vec<u32>, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.to_vec(), 0);
    queue.push_back(start.to_vec());

    while let Some(amounts) = queue.pop_front() {
        let d = dist[&amounts];
        if amounts == goal {
            return Some(d);
        }
        for i in 0..amounts.len() {
            for j in 0..amounts.len() {
                if i == j {
                    continue;
                }
                let delta = amounts[i].min(capacities[j] - amounts[j]);
                if delta == 0 {
                    continue;
                }
                let mut next = amounts.clone();
                next[i] -= delta;
                next[j] += delta;
                if !dist.contains_key(&next) {
                    dist.insert(next.clone(), d + 1);
                    queue.push_back(next);
                }
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn search_matches_reference_distance((capacities, start, goal) in arbitrary_puzzle()) {
        let start_state = State::with_amounts(&capacities, &start).unwrap();
        let goal_state = State::with_amounts(&capacities, &goal).unwrap();

        let outcome = search(&start_state, &goal_state).unwrap();
        let expected = reference_distance(&capacities, &start, &goal);

        match (&outcome, expected) {
            (SearchOutcome::Solved(solution), Some(d)) => {
                prop_assert_eq!(solution.pour_count(), d);
                prop_assert_eq!(solution.states.len(), d + 1);
            }
            (SearchOutcome::NoSolution, None) => {}
            (other, expected) => {
                prop_assert!(false, "outcome {:?} but reference distance {:?}", other, expected);
            }
        }
    }

    #[test]
    fn solved_paths_are_legal((capacities, start, goal) in arbitrary_puzzle()) {
        let start_state = State::with_amounts(&capacities, &start).unwrap();
        let goal_state = State::with_amounts(&capacities, &goal).unwrap();

        if let SearchOutcome::Solved(solution) = search(&start_state, &goal_state).unwrap() {
            prop_assert_eq!(solution.states.first(), Some(&start_state));
            prop_assert_eq!(solution.states.last(), Some(&goal_state));
            prop_assert!(verify_path(&solution.states).is_ok());

            for state in &solution.states {
                prop_assert_eq!(state.total_volume(), start_state.total_volume());
                for container in state.containers() {
                    prop_assert!(container.amount() <= container.capacity());
                }
            }
        }
    }

    #[test]
    fn different_volumes_never_solve((capacities, start, goal) in arbitrary_puzzle()) {
        let start_state = State::with_amounts(&capacities, &start).unwrap();
        let goal_state = State::with_amounts(&capacities, &goal).unwrap();
        prop_assume!(start_state.total_volume() != goal_state.total_volume());

        prop_assert_eq!(search(&start_state, &goal_state).unwrap(), SearchOutcome::NoSolution);
    }

    #[test]
    fn search_is_deterministic((capacities, start, goal) in arbitrary_puzzle()) {
        let start_state = State::with_amounts(&capacities, &start).unwrap();
        let goal_state = State::with_amounts(&capacities, &goal).unwrap();

        let first = search(&start_state, &goal_state).unwrap();
        let second = search(&start_state, &goal_state).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn neighbors_conserve_volume((capacities, start, _goal) in arbitrary_puzzle()) {
        let state = State::with_amounts(&capacities, &start).unwrap();
        let n = capacities.len();
        let mut count = 0;

        for next in next_states(&state) {
            let (pour, next) = next.unwrap();
            count += 1;
            prop_assert!(pour.amount > 0);
            prop_assert_ne!(pour.from, pour.to);
            prop_assert_eq!(next.total_volume(), state.total_volume());
            prop_assert_eq!(next.capacities(), state.capacities());
            prop_assert!(next.validate().is_ok());
        }
        prop_assert!(count <= n * (n - 1));
    }
}
