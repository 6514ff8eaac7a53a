//! Matchday model.
//!
//! A matchday is one round of a leg: every team plays exactly one match.

use serde::{Deserialize, Serialize};

use super::{Match, Side};

/// Half of a double round robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    /// First pass over all pairings.
    First,
    /// Mirrored pass: every first-leg match with sides swapped.
    Second,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first leg"),
            Self::Second => f.write_str("second leg"),
        }
    }
}

/// One round of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchday {
    /// Leg this matchday belongs to.
    pub leg: Leg,
    /// 1-based sequence number across the whole schedule.
    pub number: usize,
    /// Matches, in pairing-slot order.
    pub matches: Vec<Match>,
}

impl Matchday {
    /// Creates a matchday.
    pub fn new(leg: Leg, number: usize, matches: Vec<Match>) -> Self {
        Self {
            leg,
            number,
            matches,
        }
    }

    /// Second-leg counterpart: same pairings, sides swapped, renumbered.
    pub fn mirrored(&self, number: usize) -> Self {
        Self {
            leg: Leg::Second,
            number,
            matches: self.matches.iter().map(|m| m.reversed()).collect(),
        }
    }

    /// Teams hosting on this matchday.
    pub fn home_teams(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches.iter().map(|m| m.home)
    }

    /// Every team appearance, home and away, in slot order.
    pub fn teams(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches.iter().flat_map(|m| [m.home, m.away])
    }

    /// Side `team` plays on, if scheduled.
    pub fn side_of(&self, team: usize) -> Option<Side> {
        self.matches.iter().find_map(|m| m.side_of(team))
    }

    /// Match involving `team`, if scheduled.
    pub fn match_for(&self, team: usize) -> Option<&Match> {
        self.matches.iter().find(|m| m.involves(team))
    }
}
