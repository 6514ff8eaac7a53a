//! Fixture domain models.
//!
//! Provides the data types for a double round-robin league: the teams,
//! the venues they share, the matches and matchdays they play, and the
//! finished schedule.
//!
//! # Domain Mappings
//!
//! | u-fixture | Football | Basketball | Esports |
//! |-----------|----------|------------|---------|
//! | Team | Club | Franchise | Roster |
//! | VenuePairMap | Shared stadium | Shared arena | Shared studio |
//! | Matchday | Journée / Round | Game night | Week |
//! | Leg | Aller / Retour | Half-season | Split |

mod fixture;
mod matchday;
mod schedule;
mod team;
mod venue;

pub use fixture::{Match, Side};
pub use matchday::{Leg, Matchday};
pub use schedule::Schedule;
pub use team::{Team, TeamNaming};
pub use venue::{check_team_count, VenuePairMap};
