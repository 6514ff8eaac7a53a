//! Schedule (solution) model.
//!
//! A schedule is a complete double round robin: `N-1` first-leg
//! matchdays followed by their `N-1` mirrored second-leg counterparts.
//! It carries its roster and venue-pair map so that downstream
//! consumers (renderers, paginators, reports) can resolve names and
//! partners without re-deriving them.
//!
//! Schedules are only built by the generator and expose read-only
//! accessors; nothing mutates a schedule after assembly.
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round robin scheduling – a survey",
//! European Journal of Operational Research 188(3)

use serde::Serialize;

use super::{Leg, Match, Matchday, Side, Team, VenuePairMap};

/// A complete, immutable double round-robin schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    teams: Vec<Team>,
    venues: VenuePairMap,
    matchdays: Vec<Matchday>,
}

impl Schedule {
    /// Assembles a schedule from its two legs, first leg first.
    pub(crate) fn from_legs(
        teams: Vec<Team>,
        venues: VenuePairMap,
        first_leg: Vec<Matchday>,
        second_leg: Vec<Matchday>,
    ) -> Self {
        let mut matchdays = first_leg;
        matchdays.extend(second_leg);
        Self {
            teams,
            venues,
            matchdays,
        }
    }

    /// Number of teams.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Roster in index order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Venue-pair map the schedule was built against.
    pub fn venues(&self) -> &VenuePairMap {
        &self.venues
    }

    /// All matchdays in play order.
    pub fn matchdays(&self) -> &[Matchday] {
        &self.matchdays
    }

    /// Number of matchdays.
    #[inline]
    pub fn len(&self) -> usize {
        self.matchdays.len()
    }

    /// Whether the schedule has no matchdays.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matchdays.is_empty()
    }

    /// Matchday by 1-based number.
    pub fn matchday(&self, number: usize) -> Option<&Matchday> {
        number
            .checked_sub(1)
            .and_then(|i| self.matchdays.get(i))
    }

    /// First-leg matchdays.
    pub fn first_leg(&self) -> &[Matchday] {
        let half = self.matchdays.len() / 2;
        &self.matchdays[..half]
    }

    /// Second-leg matchdays.
    pub fn second_leg(&self) -> &[Matchday] {
        let half = self.matchdays.len() / 2;
        &self.matchdays[half..]
    }

    /// Matchdays of the given leg.
    pub fn leg(&self, leg: Leg) -> &[Matchday] {
        match leg {
            Leg::First => self.first_leg(),
            Leg::Second => self.second_leg(),
        }
    }

    /// Team by 1-based index.
    pub fn team(&self, index: usize) -> Option<&Team> {
        index.checked_sub(1).and_then(|i| self.teams.get(i))
    }

    /// Display name of a team, or `"?"` for an unknown index.
    pub fn team_name(&self, index: usize) -> &str {
        self.team(index).map(|t| t.name.as_str()).unwrap_or("?")
    }

    /// "Home vs Away" using display names.
    pub fn describe_match(&self, m: &Match) -> String {
        format!("{} vs {}", self.team_name(m.home), self.team_name(m.away))
    }

    /// Sides `team` plays on across all matchdays, in order.
    ///
    /// Matchdays where the team does not appear are skipped; in a valid
    /// schedule the sequence has one entry per matchday.
    pub fn side_sequence(&self, team: usize) -> Vec<Side> {
        self.matchdays
            .iter()
            .filter_map(|md| md.side_of(team))
            .collect()
    }

    /// Home/away pattern as a string of `H`/`A` codes.
    pub fn side_pattern(&self, team: usize) -> String {
        self.side_sequence(team).into_iter().map(Side::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::generate_schedule;

    #[test]
    fn test_legs_split_evenly() {
        let schedule = generate_schedule(6, "Team").unwrap();
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.first_leg().len(), 5);
        assert_eq!(schedule.second_leg().len(), 5);
        assert!(schedule.first_leg().iter().all(|md| md.leg == Leg::First));
        assert!(schedule.leg(Leg::Second).iter().all(|md| md.leg == Leg::Second));
    }

    #[test]
    fn test_matchday_lookup_is_one_based() {
        let schedule = generate_schedule(4, "T").unwrap();
        assert_eq!(schedule.matchday(1).unwrap().number, 1);
        assert_eq!(schedule.matchday(6).unwrap().number, 6);
        assert!(schedule.matchday(0).is_none());
        assert!(schedule.matchday(7).is_none());
    }

    #[test]
    fn test_team_names() {
        let schedule = generate_schedule(4, "T").unwrap();
        assert_eq!(schedule.team_name(1), "T 1");
        assert_eq!(schedule.team_name(99), "?");
        assert_eq!(schedule.describe_match(&Match::new(2, 3)), "T 2 vs T 3");
    }

    #[test]
    fn test_side_sequence_covers_every_matchday() {
        let schedule = generate_schedule(8, "E").unwrap();
        for team in 1..=8 {
            assert_eq!(schedule.side_sequence(team).len(), schedule.len());
            assert_eq!(schedule.side_pattern(team).len(), schedule.len());
        }
    }
}
