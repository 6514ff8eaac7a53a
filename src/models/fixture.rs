//! Match model.

use serde::{Deserialize, Serialize};

/// Which side of a match a team plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Team hosts the match at its venue.
    Home,
    /// Team travels.
    Away,
}

/// A single match: `home` hosts `away`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Host team index.
    pub home: usize,
    /// Visiting team index.
    pub away: usize,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Single-letter code used in home/away patterns ("H" / "A").
    pub fn code(self) -> char {
        match self {
            Self::Home => 'H',
            Self::Away => 'A',
        }
    }
}

impl Match {
    /// Creates a match.
    pub fn new(home: usize, away: usize) -> Self {
        Self { home, away }
    }

    /// The same pairing with sides swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            home: self.away,
            away: self.home,
        }
    }

    /// Whether `team` plays in this match.
    #[inline]
    pub fn involves(&self, team: usize) -> bool {
        self.home == team || self.away == team
    }

    /// Side `team` plays on, if it plays at all.
    pub fn side_of(&self, team: usize) -> Option<Side> {
        if self.home == team {
            Some(Side::Home)
        } else if self.away == team {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Unordered pairing key `(min, max)`.
    #[inline]
    pub fn pairing(&self) -> (usize, usize) {
        (self.home.min(self.away), self.home.max(self.away))
    }
}
