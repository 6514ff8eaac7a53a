//! Double round-robin generation and balance metrics.
//!
//! # Algorithm
//!
//! `RoundRobinGenerator` pairs teams with the circle method, orients
//! each match by slot and round parity, repairs venue clashes with a
//! single swap, then mirrors the first leg into the second. It is
//! deterministic and runs in O(N²).
//!
//! # Balance
//!
//! `TeamBalance` reports per-team home/away counts, breaks and the
//! longest same-side run.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"

mod assign;
mod balance;
mod generator;
mod rotation;

pub use assign::{front_hosts, resolve_venue_conflicts, tentative_matches};
pub use balance::TeamBalance;
pub use generator::{generate_schedule, mirror_leg, RoundRobinGenerator};
pub use rotation::{CircleRotation, Slot};
