//! Home/away balance metrics.
//!
//! Summarizes, per team, how a finished schedule distributes home and
//! away matchdays.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Home | Matchdays hosted |
//! | Away | Matchdays travelled |
//! | Breaks | Consecutive matchdays on the same side |
//! | Longest run | Longest same-side run |
//!
//! # Reference
//! Rasmussen & Trick (2008), "Round robin scheduling – a survey", §2.2: Breaks

use serde::Serialize;

use crate::models::{Schedule, Side};
use crate::validation::{longest_run, MAX_SAME_SIDE_RUN};

/// Home/away tally for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamBalance {
    /// Team index.
    pub team: usize,
    /// Matchdays at home.
    pub home: usize,
    /// Matchdays away.
    pub away: usize,
    /// Transitions where the side did not change.
    pub breaks: usize,
    /// Longest run of consecutive matchdays on one side.
    pub longest_run: usize,
}

impl TeamBalance {
    /// Computes the tally for `team`.
    pub fn calculate(schedule: &Schedule, team: usize) -> Self {
        let sides = schedule.side_sequence(team);
        let home = sides.iter().filter(|&&s| s == Side::Home).count();
        let breaks = sides.windows(2).filter(|w| w[0] == w[1]).count();
        Self {
            team,
            home,
            away: sides.len() - home,
            breaks,
            longest_run: longest_run(&sides),
        }
    }

    /// Tallies for every team, in index order.
    pub fn for_schedule(schedule: &Schedule) -> Vec<Self> {
        (1..=schedule.team_count())
            .map(|team| Self::calculate(schedule, team))
            .collect()
    }

    /// Whether the team never exceeds the allowed same-side run.
    pub fn is_streak_free(&self) -> bool {
        self.longest_run <= MAX_SAME_SIDE_RUN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::generate_schedule;

    #[test]
    fn test_double_round_robin_is_even() {
        let schedule = generate_schedule(10, "Equipe").unwrap();
        for balance in TeamBalance::for_schedule(&schedule) {
            assert_eq!(balance.home, 9);
            assert_eq!(balance.away, 9);
            assert!(balance.is_streak_free(), "{balance:?}");
        }
    }

    #[test]
    fn test_venue_partners_mirror_each_other() {
        let schedule = generate_schedule(8, "E").unwrap();
        for (a, b) in schedule.venues().pairs() {
            let sa = schedule.side_sequence(a);
            let sb = schedule.side_sequence(b);
            assert!(sa.iter().zip(&sb).all(|(x, y)| *x == y.opposite()));
        }
    }

    #[test]
    fn test_four_teams_has_a_streak() {
        let schedule = generate_schedule(4, "T").unwrap();
        let balances = TeamBalance::for_schedule(&schedule);
        assert!(balances.iter().any(|b| !b.is_streak_free()));
    }

    #[test]
    fn test_two_teams() {
        let schedule = generate_schedule(2, "X").unwrap();
        let b = TeamBalance::calculate(&schedule, 1);
        assert_eq!((b.home, b.away, b.breaks, b.longest_run), (1, 1, 0, 1));
    }
}
