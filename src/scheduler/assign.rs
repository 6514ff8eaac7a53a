//! Home/away assignment and venue-conflict repair.
//!
//! # Algorithm
//!
//! 1. **Tentative sides**: slots `i >= 1` give the front team home when
//!    `i` is odd. Slot 0 (pinned team `N` against the circle head) gives
//!    the front team home when `(1 - d) mod (N-1)` is even. With this
//!    orientation venue partners receive complementary home/away
//!    patterns, and each team breaks its alternation at most once per
//!    leg, never on the first or last transition.
//! 2. **Repair**: walking the slots in order, if the tentative host's
//!    venue partner already hosts that day, swap the match once. If the
//!    new host's partner also hosts, the matchday is unresolvable.
//!
//! The repair only looks at venue sharing. Streak-freedom is checked
//! afterwards by [`crate::validation`].
//!
//! # Reference
//! de Werra (1981), "Scheduling in sports"; Miyashiro & Matsui (2005),
//! "A polynomial-time algorithm to find an equitable home–away
//! assignment", Operations Research Letters 33(3)

use std::collections::HashSet;

use super::rotation::{CircleRotation, Slot};
use crate::error::{FixtureError, FixtureResult};
use crate::models::{Match, TeamNaming, VenuePairMap};

/// Whether the front team of `slot` hosts in round `round`.
pub fn front_hosts(rotation: &CircleRotation, round: usize, slot: usize) -> bool {
    if slot == 0 {
        let circle = rotation.rounds();
        (1 + circle - round % circle) % circle % 2 == 0
    } else {
        slot % 2 == 1
    }
}

/// Orients a slot into a match using [`front_hosts`].
pub(crate) fn orient(rotation: &CircleRotation, round: usize, slot: Slot) -> Match {
    if front_hosts(rotation, round, slot.index) {
        Match::new(slot.front, slot.back)
    } else {
        Match::new(slot.back, slot.front)
    }
}

/// Tentative matches for `round`, before repair.
pub fn tentative_matches(rotation: &CircleRotation, round: usize) -> Vec<Match> {
    rotation
        .slots(round)
        .map(|slot| orient(rotation, round, slot))
        .collect()
}

/// Applies the one-swap venue repair to a matchday.
///
/// # Arguments
/// * `matchday` - 1-based matchday number, for diagnostics.
/// * `tentative` - Matches in slot order.
/// * `venues` - Venue-pair map.
/// * `naming` - Naming used to report team names on failure.
///
/// # Errors
/// `UnresolvableConstraint` if both sides of a match have a venue
/// partner already hosting.
pub fn resolve_venue_conflicts(
    matchday: usize,
    tentative: &[Match],
    venues: &VenuePairMap,
    naming: &TeamNaming,
) -> FixtureResult<Vec<Match>> {
    let mut hosting: HashSet<usize> = HashSet::with_capacity(tentative.len());
    let mut resolved = Vec::with_capacity(tentative.len());

    for &candidate in tentative {
        let clashes = |m: &Match| {
            venues
                .partner(m.home)
                .is_some_and(|partner| hosting.contains(&partner))
        };

        let final_match = if clashes(&candidate) {
            let swapped = candidate.reversed();
            if clashes(&swapped) {
                return Err(FixtureError::UnresolvableConstraint {
                    matchday,
                    home: naming.name(candidate.home),
                    away: naming.name(candidate.away),
                });
            }
            log::warn!(
                "matchday {}: {} shares a venue with a host, swapping to {} at home",
                matchday,
                naming.name(candidate.home),
                naming.name(swapped.home)
            );
            swapped
        } else {
            candidate
        };

        hosting.insert(final_match.home);
        resolved.push(final_match);
    }

    Ok(resolved)
}
