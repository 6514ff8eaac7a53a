//! Double round-robin fixture generation for the U-Engine ecosystem.
//!
//! Builds a complete home-and-away league schedule for an even number of
//! teams under three constraints:
//! - every team plays exactly once per matchday,
//! - teams sharing a venue never host on the same matchday,
//! - no team plays three consecutive matchdays on the same side.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Team`, `TeamNaming`, `VenuePairMap`,
//!   `Match`, `Side`, `Leg`, `Matchday`, `Schedule`
//! - **`scheduler`**: Circle-method rotation, home/away assignment with
//!   venue repair, the `RoundRobinGenerator`, balance metrics
//! - **`validation`**: The schedule validator shared by the generator's
//!   self-check and by tests, plus per-constraint reports
//! - **`config`**: Serde-loadable `LeagueConfig` and built-in leagues
//! - **`error`**: `FixtureError`
//!
//! # Example
//!
//! ```
//! use u_fixture::scheduler::generate_schedule;
//! use u_fixture::validation::ValidationReport;
//!
//! let schedule = generate_schedule(10, "Equipe").unwrap();
//! assert_eq!(schedule.len(), 18);
//! assert!(ValidationReport::from_schedule(&schedule).is_valid());
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling – a survey"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{FixtureError, FixtureResult};
