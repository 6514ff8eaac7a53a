//! Circle-method rotation.
//!
//! # Algorithm
//!
//! Team `N` is pinned to the last position; positions `0..N-1` form the
//! circle. On round `d` position `p < N-1` holds team
//! `((p - d) mod (N-1)) + 1`, so round 0 is the identity list
//! `[1, 2, …, N]` and each later round turns the circle one step.
//! Position `i` plays position `N-1-i`.
//!
//! Positions are computed, never stored, so any round can be produced
//! independently of the others.
//!
//! # Complexity
//! O(1) per position, O(N) per round.
//!
//! # Reference
//! de Werra (1981), "Scheduling in sports", Studies on Graphs and
//! Discrete Programming, pp. 381-395

use crate::error::FixtureResult;
use crate::models::check_team_count;

/// One pairing slot of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Slot index `i` in `0..N/2`; slot 0 holds the pinned team.
    pub index: usize,
    /// Team at position `i`.
    pub front: usize,
    /// Team at position `N-1-i`.
    pub back: usize,
}

/// Circle-method pairing for `N` teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleRotation {
    team_count: usize,
}

impl CircleRotation {
    /// Creates a rotation.
    ///
    /// # Errors
    /// `InvalidTeamCount` if `team_count` is odd or less than 2.
    pub fn new(team_count: usize) -> FixtureResult<Self> {
        check_team_count(team_count)?;
        Ok(Self { team_count })
    }

    /// Number of teams.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Rounds in one leg (`N-1`).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.team_count - 1
    }

    /// Team at `position` in round `round`.
    pub fn team_at(&self, round: usize, position: usize) -> usize {
        let circle = self.rounds();
        if position >= circle {
            return self.team_count;
        }
        (position + circle - round % circle) % circle + 1
    }

    /// Pairing slots of `round`, slot 0 first.
    pub fn slots(&self, round: usize) -> impl Iterator<Item = Slot> + '_ {
        let last = self.team_count - 1;
        (0..self.team_count / 2).map(move |index| Slot {
            index,
            front: self.team_at(round, index),
            back: self.team_at(round, last - index),
        })
    }
}
