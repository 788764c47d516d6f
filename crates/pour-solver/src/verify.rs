//! Replay a state sequence and check that it is a legal pour path.

use thiserror::Error;

use crate::moves::pour_between;
use crate::puzzle::State;

/// Why a state sequence is not a legal pour path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathDefect {
    #[error("path has no states")]
    Empty,

    #[error("state {step} overfills container {container}")]
    OutOfBounds { step: usize, container: usize },

    #[error("state {step} holds {found} but the path started with {expected}")]
    VolumeChanged { step: usize, expected: u64, found: u64 },

    #[error("no single pour leads from state {step} to the next state")]
    IllegalStep { step: usize },
}

/// Check bounds, volume and single-pour steps along `path`
pub fn verify_path(path: &[State]) -> Result<(), PathDefect> {
    let first = path.first().ok_or(PathDefect::Empty)?;
    let expected = first.total_volume();

    for (step, state) in path.iter().enumerate() {
        if let Some(container) = state.containers().iter().position(|c| !c.is_valid()) {
            return Err(PathDefect::OutOfBounds { step, container });
        }
        let found = state.total_volume();
        if found != expected {
            return Err(PathDefect::VolumeChanged {
                step,
                expected,
                found,
            });
        }
    }

    for (step, pair) in path.windows(2).enumerate() {
        if pour_between(&pair[0], &pair[1]).is_none() {
            return Err(PathDefect::IllegalStep { step });
        }
    }

    Ok(())
}

/// Does `path` lead from `start` to `goal` using only legal pours?
pub fn verify_solution(start: &State, goal: &State, path: &[State]) -> bool {
    path.first() == Some(start) && path.last() == Some(goal) && verify_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(amounts: &[u32]) -> State {
        State::with_amounts(&[3, 5], amounts).unwrap()
    }

    #[test]
    fn test_valid_path() {
        let path = vec![state(&[3, 0]), state(&[0, 3])];
        assert!(verify_path(&path).is_ok());
        assert!(verify_solution(&path[0], &path[1], &path));
        assert!(!verify_solution(&path[1], &path[0], &path));
    }

    #[test]
    fn test_refill_is_not_a_pour() {
        let path = vec![state(&[3, 0]), state(&[0, 3]), state(&[3, 3])];
        assert_eq!(
            verify_path(&path),
            Err(PathDefect::VolumeChanged {
                step: 2,
                expected: 3,
                found: 6
            })
        );
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(verify_path(&[]), Err(PathDefect::Empty));
    }

    #[test]
    fn test_skipped_step() {
        // From (0, 5) the only pour fills container 0, giving (3, 2)
        let path = vec![state(&[3, 2]), state(&[0, 5]), state(&[2, 3])];
        assert_eq!(verify_path(&path), Err(PathDefect::IllegalStep { step: 1 }));
    }

    #[test]
    fn test_out_of_bounds() {
        let path = vec![State::from_pairs(&[(3, 4), (5, 0)])];
        assert_eq!(
            verify_path(&path),
            Err(PathDefect::OutOfBounds {
                step: 0,
                container: 0
            })
        );
    }
}
