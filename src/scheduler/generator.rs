//! Double round-robin generator.
//!
//! # Algorithm
//!
//! 1. Validate the team count and naming.
//! 2. Build the venue-pair map.
//! 3. For each round of the circle rotation, orient every slot and run
//!    the one-swap venue repair (first leg).
//! 4. Mirror every first-leg matchday into the second leg.
//! 5. Assemble the schedule and, if enabled, run the validator as a
//!    self-check.
//!
//! # Complexity
//! O(N²): `N-1` rounds of `N/2` slots, mirrored once.

use super::assign::{resolve_venue_conflicts, tentative_matches};
use super::rotation::CircleRotation;
use crate::config::LeagueConfig;
use crate::error::FixtureResult;
use crate::models::{check_team_count, Leg, Matchday, Schedule, TeamNaming, VenuePairMap};
use crate::validation::validate_schedule;

/// Double round-robin schedule generator.
///
/// Deterministic: the same team count and naming always produce the
/// same schedule, or the same error.
///
/// # Example
///
/// ```
/// use u_fixture::models::TeamNaming;
/// use u_fixture::scheduler::RoundRobinGenerator;
///
/// let generator = RoundRobinGenerator::new(TeamNaming::new("Equipe"));
/// let schedule = generator.generate(10).unwrap();
/// assert_eq!(schedule.len(), 18);
/// assert_eq!(schedule.describe_match(&schedule.matchdays()[0].matches[1]), "Equipe 2 vs Equipe 9");
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinGenerator {
    naming: TeamNaming,
    self_check: bool,
}

impl RoundRobinGenerator {
    /// Creates a generator with self-check enabled.
    pub fn new(naming: TeamNaming) -> Self {
        Self {
            naming,
            self_check: true,
        }
    }

    /// Creates a generator from a league configuration.
    pub fn from_config(config: &LeagueConfig) -> Self {
        Self::new(config.naming()).with_self_check(config.self_check)
    }

    /// Enables or disables the post-assembly validation pass.
    ///
    /// Findings are logged at `warn` level; they never fail generation.
    pub fn with_self_check(mut self, enabled: bool) -> Self {
        self.self_check = enabled;
        self
    }

    /// Naming scheme in use.
    pub fn naming(&self) -> &TeamNaming {
        &self.naming
    }

    /// Generates the full schedule for `team_count` teams.
    ///
    /// # Errors
    /// - `InvalidTeamCount` if `team_count` is odd or less than 2.
    /// - `EmptyPrefix` if the naming prefix is empty.
    /// - `UnresolvableConstraint` if a venue conflict survives repair.
    pub fn generate(&self, team_count: usize) -> FixtureResult<Schedule> {
        check_team_count(team_count)?;
        self.naming.validate()?;

        let venues = VenuePairMap::new(team_count)?;
        let first_leg = self.first_leg(team_count, &venues)?;
        let second_leg = mirror_leg(&first_leg);
        let schedule = Schedule::from_legs(
            self.naming.roster(team_count),
            venues,
            first_leg,
            second_leg,
        );

        if self.self_check {
            if let Err(errors) = validate_schedule(&schedule) {
                for error in &errors {
                    log::warn!("{} teams: {}", team_count, error.message);
                }
            }
        }

        log::info!(
            "generated {} matchdays for {} teams ({})",
            schedule.len(),
            team_count,
            self.naming.prefix
        );
        Ok(schedule)
    }

    /// Builds the first leg: one matchday per rotation round.
    pub fn first_leg(
        &self,
        team_count: usize,
        venues: &VenuePairMap,
    ) -> FixtureResult<Vec<Matchday>> {
        let rotation = CircleRotation::new(team_count)?;
        (0..rotation.rounds())
            .map(|round| {
                let number = round + 1;
                let tentative = tentative_matches(&rotation, round);
                let matches = resolve_venue_conflicts(number, &tentative, venues, &self.naming)?;
                log::debug!("matchday {}: {} matches", number, matches.len());
                Ok(Matchday::new(Leg::First, number, matches))
            })
            .collect()
    }
}

/// Second leg: each first-leg matchday with sides swapped, numbered
/// after the first leg.
pub fn mirror_leg(first_leg: &[Matchday]) -> Vec<Matchday> {
    let offset = first_leg.len();
    first_leg
        .iter()
        .map(|md| md.mirrored(md.number + offset))
        .collect()
}

/// Generates a schedule with the default naming separator.
///
/// # Example
///
/// ```
/// use u_fixture::scheduler::generate_schedule;
///
/// let schedule = generate_schedule(4, "T").unwrap();
/// assert_eq!(schedule.len(), 6);
/// assert!(generate_schedule(7, "T").is_err());
/// ```
pub fn generate_schedule(team_count: usize, prefix: &str) -> FixtureResult<Schedule> {
    RoundRobinGenerator::new(TeamNaming::new(prefix)).generate(team_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use crate::models::{Match, Side};
    use crate::validation::{validate_schedule, ValidationErrorKind};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    fn pairs(md: &Matchday) -> Vec<(usize, usize)> {
        md.matches.iter().map(|m| m.pairing()).collect()
    }

    #[test]
    fn test_ten_teams() {
        let schedule = generate_schedule(10, "Equipe").unwrap();
        assert_eq!(schedule.len(), 18);
        assert!(schedule.matchdays().iter().all(|md| md.matches.len() == 5));
        assert_eq!(
            pairs(&schedule.matchdays()[0]),
            vec![(1, 10), (2, 9), (3, 8), (4, 7), (5, 6)]
        );
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_four_teams() {
        let schedule = generate_schedule(4, "T").unwrap();
        assert_eq!(schedule.len(), 6);
        assert!(schedule.matchdays().iter().all(|md| md.matches.len() == 2));
        let venue_pairs: Vec<(String, String)> = schedule
            .venues()
            .pairs()
            .map(|(a, b)| (schedule.team_name(a).to_string(), schedule.team_name(b).to_string()))
            .collect();
        assert_eq!(
            venue_pairs,
            vec![
                ("T 1".to_string(), "T 2".to_string()),
                ("T 3".to_string(), "T 4".to_string())
            ]
        );
        assert_eq!(schedule.matchdays()[0].matches, vec![Match::new(4, 1), Match::new(2, 3)]);
    }

    #[test]
    fn test_four_teams_only_fails_streaks() {
        // No mirrored four-team schedule avoids both venue clashes and streaks.
        let schedule = generate_schedule(4, "T").unwrap();
        let errors = validate_schedule(&schedule).unwrap_err();
        assert!(errors.iter().all(|e| e.kind == ValidationErrorKind::Streak));
    }

    #[test]
    fn test_two_teams() {
        let schedule = generate_schedule(2, "X").unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.matchdays()[0].matches, vec![Match::new(1, 2)]);
        assert_eq!(schedule.matchdays()[1].matches, vec![Match::new(2, 1)]);
        assert_eq!(schedule.matchdays()[1].leg, Leg::Second);
        assert!(validate_schedule(&schedule).is_ok());
    }

    #[test]
    fn test_invalid_team_counts() {
        assert_eq!(
            generate_schedule(7, "T").unwrap_err(),
            FixtureError::InvalidTeamCount { count: 7 }
        );
        assert_eq!(
            generate_schedule(0, "T").unwrap_err(),
            FixtureError::InvalidTeamCount { count: 0 }
        );
        assert_eq!(
            generate_schedule(1, "T").unwrap_err(),
            FixtureError::InvalidTeamCount { count: 1 }
        );
    }

    #[test]
    fn test_team_count_checked_before_prefix() {
        assert_eq!(
            generate_schedule(3, "").unwrap_err(),
            FixtureError::InvalidTeamCount { count: 3 }
        );
        assert_eq!(generate_schedule(6, "").unwrap_err(), FixtureError::EmptyPrefix);
    }

    #[test]
    fn test_second_leg_mirrors_first() {
        let schedule = generate_schedule(12, "Equipe").unwrap();
        let offset = schedule.first_leg().len();
        for (first, second) in schedule.first_leg().iter().zip(schedule.second_leg()) {
            assert_eq!(second.number, first.number + offset);
            assert_eq!(second.leg, Leg::Second);
            let reversed: Vec<Match> = first.matches.iter().map(|m| m.reversed()).collect();
            assert_eq!(second.matches, reversed);
        }
    }

    #[test]
    fn test_matchday_numbers_are_sequential() {
        let schedule = generate_schedule(8, "E").unwrap();
        let numbers: Vec<usize> = schedule.matchdays().iter().map(|md| md.number).collect();
        assert_eq!(numbers, (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn test_every_pair_meets_twice_once_at_each_home() {
        let schedule = generate_schedule(14, "Team").unwrap();
        let ordered: HashSet<(usize, usize)> = schedule
            .matchdays()
            .iter()
            .flat_map(|md| md.matches.iter().map(|m| (m.home, m.away)))
            .collect();
        assert_eq!(ordered.len(), 14 * 13);
    }

    #[test]
    fn test_league_sizes_are_valid() {
        for (n, prefix) in [(6, "A"), (10, "Equipe"), (12, "Equipe"), (14, "Team"), (16, "E")] {
            let schedule = generate_schedule(n, prefix).unwrap();
            assert!(validate_schedule(&schedule).is_ok(), "n={n}");
        }
    }

    #[test]
    fn test_all_even_sizes_up_to_sixty() {
        for n in (6..=60).step_by(2) {
            let schedule = generate_schedule(n, "E").unwrap();
            assert!(validate_schedule(&schedule).is_ok(), "n={n}");
        }
    }

    #[test]
    fn test_deterministic() {
        let a = generate_schedule(16, "E").unwrap();
        let b = generate_schedule(16, "E").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_prefix_does_not_change_pairings() {
        let a = generate_schedule(10, "Equipe").unwrap();
        let b = RoundRobinGenerator::new(TeamNaming::new("Club").with_separator("-"))
            .generate(10)
            .unwrap();
        assert_eq!(a.matchdays(), b.matchdays());
        assert_eq!(b.team_name(3), "Club-3");
    }

    #[test]
    fn test_no_three_in_a_row() {
        let schedule = generate_schedule(16, "E").unwrap();
        for team in 1..=16 {
            let sides = schedule.side_sequence(team);
            assert!(
                sides.windows(3).all(|w| !(w[0] == w[1] && w[1] == w[2])),
                "team {team}: {}",
                schedule.side_pattern(team)
            );
        }
    }

    #[test]
    fn test_breaks_at_leg_boundary_are_isolated() {
        let schedule = generate_schedule(10, "Equipe").unwrap();
        let first = schedule.first_leg();
        let second = schedule.second_leg();
        for team in 1..=10 {
            let end = first[8].side_of(team);
            let start = second[0].side_of(team);
            if end == start {
                assert_ne!(first[7].side_of(team), end, "team {team}");
                assert_ne!(second[1].side_of(team), start, "team {team}");
            }
        }
        assert_eq!(second[0].side_of(10), Some(Side::Away));
    }

    #[test]
    fn test_randomized_sizes_and_prefixes() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..25 {
            let n = rng.random_range(3..=40) * 2;
            let len = rng.random_range(1..=8);
            let prefix: String = (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26u8)))
                .collect();
            let schedule = generate_schedule(n, &prefix).unwrap();
            assert!(validate_schedule(&schedule).is_ok(), "n={n} prefix={prefix}");
            assert_eq!(schedule.team_name(1), format!("{prefix} 1"));
        }
    }

    #[test]
    fn test_self_check_does_not_alter_result() {
        let checked = RoundRobinGenerator::new(TeamNaming::new("T")).generate(4).unwrap();
        let unchecked = RoundRobinGenerator::new(TeamNaming::new("T"))
            .with_self_check(false)
            .generate(4)
            .unwrap();
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn test_from_config() {
        let config = LeagueConfig::new("carousel-14", 14, "Team").with_self_check(false);
        let generator = RoundRobinGenerator::from_config(&config);
        assert_eq!(generator.naming().prefix, "Team");
        assert_eq!(generator.generate(14).unwrap().len(), 26);
    }
}
