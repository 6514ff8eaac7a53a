//! Schedule validation.
//!
//! Re-checks a finished schedule (or any list of matchdays) against the
//! league invariants. Detects:
//! - Wrong number of matchdays or matches per matchday
//! - Teams playing twice, or not at all, on a matchday
//! - Unknown team indices
//! - First-leg pairings that are missing or repeated
//! - Second-leg matchdays that are not the reversed first leg
//! - Venue partners hosting on the same matchday
//! - Runs of three or more matchdays on the same side
//!
//! This is the single implementation of these checks: the generator's
//! self-check and the test suite both call it.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Matchday, Schedule, Side, VenuePairMap};

/// Longest allowed run of consecutive matchdays on the same side.
pub const MAX_SAME_SIDE_RUN: usize = 2;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// 1-based matchday the error was found on, if tied to one.
    pub matchday: Option<usize>,
    /// Team the error concerns, if tied to one.
    pub team: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationErrorKind {
    /// Schedule does not have `2*(N-1)` matchdays.
    MatchdayCount,
    /// A matchday does not have `N/2` matches.
    MatchCount,
    /// A team plays more than once on a matchday.
    DoubleBooking,
    /// A team does not play on a matchday.
    MissingTeam,
    /// A match references a team outside `[1, N]`.
    UnknownTeam,
    /// A pairing is missing from, or repeated in, the first leg.
    PairingCoverage,
    /// A second-leg matchday is not the reversed first-leg matchday.
    MirrorMismatch,
    /// Two venue partners host on the same matchday.
    VenueConflict,
    /// A team spends too many consecutive matchdays on one side.
    Streak,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            matchday: None,
            team: None,
            message: message.into(),
        }
    }

    fn on_matchday(mut self, matchday: usize) -> Self {
        self.matchday = Some(matchday);
        self
    }

    fn for_team(mut self, team: usize) -> Self {
        self.team = Some(team);
        self
    }
}

/// Validates a generated schedule.
pub fn validate_schedule(schedule: &Schedule) -> ValidationResult {
    validate_matchdays(schedule.team_count(), schedule.matchdays(), schedule.venues())
}

/// Validates a sequence of matchdays for `team_count` teams.
///
/// Checks:
/// 1. Exactly `2*(N-1)` matchdays
/// 2. Each matchday has `N/2` matches covering every team once
/// 3. Every pairing appears exactly once in the first half
/// 4. The second half mirrors the first half
/// 5. No venue partners host together
/// 6. No team runs more than [`MAX_SAME_SIDE_RUN`] matchdays on one side
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_matchdays(
    team_count: usize,
    matchdays: &[Matchday],
    venues: &VenuePairMap,
) -> ValidationResult {
    let mut errors = Vec::new();

    let expected = 2 * team_count.saturating_sub(1);
    if matchdays.len() != expected {
        errors.push(ValidationError::new(
            ValidationErrorKind::MatchdayCount,
            format!(
                "Expected {} matchdays for {} teams, found {}",
                expected,
                team_count,
                matchdays.len()
            ),
        ));
    }

    for md in matchdays {
        check_matchday(team_count, md, venues, &mut errors);
    }

    if matchdays.len() % 2 == 0 {
        let (first, second) = matchdays.split_at(matchdays.len() / 2);
        check_pairings(team_count, first, &mut errors);
        check_mirror(first, second, &mut errors);
    }

    check_streaks(team_count, matchdays, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_matchday(
    team_count: usize,
    md: &Matchday,
    venues: &VenuePairMap,
    errors: &mut Vec<ValidationError>,
) {
    if md.matches.len() != team_count / 2 {
        errors.push(
            ValidationError::new(
                ValidationErrorKind::MatchCount,
                format!(
                    "Matchday {} has {} matches, expected {}",
                    md.number,
                    md.matches.len(),
                    team_count / 2
                ),
            )
            .on_matchday(md.number),
        );
    }

    let mut seen = vec![false; team_count + 1];
    for team in md.teams() {
        if team == 0 || team > team_count {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::UnknownTeam,
                    format!("Matchday {} references unknown team {}", md.number, team),
                )
                .on_matchday(md.number),
            );
        } else if seen[team] {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::DoubleBooking,
                    format!("Team {} plays more than once on matchday {}", team, md.number),
                )
                .on_matchday(md.number)
                .for_team(team),
            );
        } else {
            seen[team] = true;
        }
    }

    for team in (1..=team_count).filter(|&t| !seen[t]) {
        errors.push(
            ValidationError::new(
                ValidationErrorKind::MissingTeam,
                format!("Team {} does not play on matchday {}", team, md.number),
            )
            .on_matchday(md.number)
            .for_team(team),
        );
    }

    let hosts = |t: usize| md.home_teams().any(|h| h == t);
    for (a, b) in venues.pairs() {
        if hosts(a) && hosts(b) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::VenueConflict,
                    format!(
                        "Venue partners {} and {} both host on matchday {}",
                        a, b, md.number
                    ),
                )
                .on_matchday(md.number)
                .for_team(a),
            );
        }
    }
}

fn check_pairings(team_count: usize, first_leg: &[Matchday], errors: &mut Vec<ValidationError>) {
    let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
    for md in first_leg {
        for m in &md.matches {
            *counts.entry(m.pairing()).or_default() += 1;
        }
    }

    for a in 1..=team_count {
        for b in (a + 1)..=team_count {
            let count = counts.get(&(a, b)).copied().unwrap_or(0);
            if count != 1 {
                errors.push(
                    ValidationError::new(
                        ValidationErrorKind::PairingCoverage,
                        format!(
                            "Teams {} and {} meet {} times in the first leg, expected once",
                            a, b, count
                        ),
                    )
                    .for_team(a),
                );
            }
        }
    }
}

fn check_mirror(first_leg: &[Matchday], second_leg: &[Matchday], errors: &mut Vec<ValidationError>) {
    for (first, second) in first_leg.iter().zip(second_leg) {
        let mirrored = first.matches.iter().map(|m| m.reversed());
        if !mirrored.eq(second.matches.iter().copied()) {
            errors.push(
                ValidationError::new(
                    ValidationErrorKind::MirrorMismatch,
                    format!(
                        "Matchday {} does not mirror matchday {}",
                        second.number, first.number
                    ),
                )
                .on_matchday(second.number),
            );
        }
    }
}

fn check_streaks(team_count: usize, matchdays: &[Matchday], errors: &mut Vec<ValidationError>) {
    for team in 1..=team_count {
        let mut run_side: Option<Side> = None;
        let mut run = 0;
        for md in matchdays {
            let Some(side) = md.side_of(team) else {
                run_side = None;
                run = 0;
                continue;
            };
            if run_side == Some(side) {
                run += 1;
            } else {
                run_side = Some(side);
                run = 1;
            }
            if run == MAX_SAME_SIDE_RUN + 1 {
                let label = match side {
                    Side::Home => "home",
                    Side::Away => "away",
                };
                errors.push(
                    ValidationError::new(
                        ValidationErrorKind::Streak,
                        format!(
                            "Team {} plays {} {} matchdays in a row up to matchday {}",
                            team, label, run, md.number
                        ),
                    )
                    .on_matchday(md.number)
                    .for_team(team),
                );
            }
        }
    }
}

/// Length of the longest run of identical sides.
pub fn longest_run(sides: &[Side]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<Side> = None;
    for &side in sides {
        run = if prev == Some(side) { run + 1 } else { 1 };
        prev = Some(side);
        longest = longest.max(run);
    }
    longest
}

/// Constraint groups reported by [`ValidationReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Constraint {
    /// Every team plays exactly once per matchday.
    OneMatchPerDay,
    /// No three consecutive matchdays on the same side.
    NoStreaks,
    /// Venue partners never host together.
    VenuePairs,
    /// Correct number and size of matchdays.
    MatchdayCount,
    /// Every pairing once per leg, second leg mirrored.
    PairingCoverage,
}

impl Constraint {
    /// All constraints, in report order.
    pub const ALL: [Constraint; 5] = [
        Constraint::OneMatchPerDay,
        Constraint::NoStreaks,
        Constraint::VenuePairs,
        Constraint::MatchdayCount,
        Constraint::PairingCoverage,
    ];

    /// Group an error kind belongs to.
    pub fn of(kind: ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::DoubleBooking
            | ValidationErrorKind::MissingTeam
            | ValidationErrorKind::UnknownTeam => Constraint::OneMatchPerDay,
            ValidationErrorKind::Streak => Constraint::NoStreaks,
            ValidationErrorKind::VenueConflict => Constraint::VenuePairs,
            ValidationErrorKind::MatchdayCount | ValidationErrorKind::MatchCount => {
                Constraint::MatchdayCount
            }
            ValidationErrorKind::PairingCoverage | ValidationErrorKind::MirrorMismatch => {
                Constraint::PairingCoverage
            }
        }
    }

    /// Statement of the constraint, as printed in reports.
    pub fn description(self) -> &'static str {
        match self {
            Constraint::OneMatchPerDay => "No team plays twice on a matchday",
            Constraint::NoStreaks => "No three consecutive home or away matchdays",
            Constraint::VenuePairs => "Venue partners never host on the same matchday",
            Constraint::MatchdayCount => "Matchday count and size are correct",
            Constraint::PairingCoverage => "Every pairing meets once per leg, second leg mirrored",
        }
    }
}

/// Outcome of one constraint group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintCheck {
    /// Constraint group.
    pub constraint: Constraint,
    /// Errors found for this group.
    pub violations: Vec<ValidationError>,
}

impl ConstraintCheck {
    /// Whether the constraint holds.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Pass/fail report per constraint for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Number of teams.
    pub team_count: usize,
    /// One entry per [`Constraint`], in [`Constraint::ALL`] order.
    pub checks: Vec<ConstraintCheck>,
}

impl ValidationReport {
    /// Validates `schedule` and groups the findings.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let errors = validate_schedule(schedule).err().unwrap_or_default();
        Self::from_errors(schedule.team_count(), errors)
    }

    /// Groups pre-computed errors by constraint.
    pub fn from_errors(team_count: usize, errors: Vec<ValidationError>) -> Self {
        let mut checks: Vec<ConstraintCheck> = Constraint::ALL
            .iter()
            .map(|&constraint| ConstraintCheck {
                constraint,
                violations: Vec::new(),
            })
            .collect();
        for error in errors {
            let group = Constraint::of(error.kind);
            if let Some(check) = checks.iter_mut().find(|c| c.constraint == group) {
                check.violations.push(error);
            }
        }
        Self { team_count, checks }
    }

    /// Whether every constraint holds.
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(ConstraintCheck::passed)
    }

    /// Check for one constraint.
    pub fn check(&self, constraint: Constraint) -> Option<&ConstraintCheck> {
        self.checks.iter().find(|c| c.constraint == constraint)
    }

    /// All violations across constraints.
    pub fn violations(&self) -> impl Iterator<Item = &ValidationError> {
        self.checks.iter().flat_map(|c| c.violations.iter())
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Results for {} teams", self.team_count)?;
        for check in &self.checks {
            let status = if check.passed() { "PASS" } else { "FAIL" };
            write!(f, "[{}] {}", status, check.constraint.description())?;
            if !check.passed() {
                write!(f, " ({} violations)", check.violations.len())?;
            }
            writeln!(f)?;
        }
        if self.is_valid() {
            write!(f, "Schedule valid")
        } else {
            write!(f, "Problems detected")
        }
    }
}
