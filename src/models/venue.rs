//! Venue-pair map.
//!
//! Teams are grouped into consecutive pairs `(1,2), (3,4), …, (N-1,N)`
//! that share a home ground. Two partners may never both host on the
//! same matchday.
//!
//! The map is a read-only lookup table built once per league. It is
//! symmetric and involutive: `partner(partner(t)) == t`, and no team is
//! its own partner.

use serde::Serialize;

use super::Team;
use crate::error::{FixtureError, FixtureResult};

/// Checks that `team_count` supports a round robin without byes.
pub fn check_team_count(team_count: usize) -> FixtureResult<()> {
    if team_count < 2 || team_count % 2 != 0 {
        return Err(FixtureError::InvalidTeamCount { count: team_count });
    }
    Ok(())
}

/// Immutable team → venue partner table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenuePairMap {
    /// `partners[t - 1]` is the partner of team `t`.
    partners: Vec<usize>,
}

impl VenuePairMap {
    /// Builds the map for teams `1..=team_count`.
    ///
    /// # Errors
    /// `InvalidTeamCount` if `team_count` is odd or less than 2.
    pub fn new(team_count: usize) -> FixtureResult<Self> {
        check_team_count(team_count)?;
        let partners = (1..=team_count)
            .map(|t| if t % 2 == 1 { t + 1 } else { t - 1 })
            .collect();
        Ok(Self { partners })
    }

    /// Number of teams covered.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.partners.len()
    }

    /// Venue partner of `team`, or `None` if the index is out of range.
    #[inline]
    pub fn partner(&self, team: usize) -> Option<usize> {
        team.checked_sub(1)
            .and_then(|i| self.partners.get(i))
            .copied()
    }

    /// Whether `a` and `b` share a venue.
    pub fn are_partners(&self, a: usize, b: usize) -> bool {
        self.partner(a) == Some(b)
    }

    /// Venue pairs in ascending order: `(1,2), (3,4), …`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (1..=self.team_count()).step_by(2).map(|t| (t, t + 1))
    }

    /// Looks up a partner by display name within `roster`.
    pub fn partner_by_name<'a>(&self, name: &str, roster: &'a [Team]) -> Option<&'a Team> {
        let team = roster.iter().find(|t| t.name == name)?;
        let partner = self.partner(team.index)?;
        roster.iter().find(|t| t.index == partner)
    }
}
