//! Error types for fixture generation.
//!
//! Both categories are structural: re-running with the same inputs
//! reproduces the same error.
//!
//! - Invalid configuration (`InvalidTeamCount`, `EmptyPrefix`) is
//!   rejected before any pairing is computed.
//! - `UnresolvableConstraint` is raised mid-generation when the
//!   one-swap venue repair cannot clear a conflict.

/// Result alias for fallible fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Error type for all fallible operations in the u-fixture crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FixtureError {
    /// Returned when the team count is odd or smaller than 2.
    #[error("team count must be even and at least 2, got {count}")]
    InvalidTeamCount {
        /// The rejected team count.
        count: usize,
    },

    /// Returned when the team name prefix is empty.
    #[error("team name prefix must not be empty")]
    EmptyPrefix,

    /// Returned when neither side of a match can host without clashing
    /// with its venue partner.
    #[error(
        "unresolvable venue conflict on matchday {matchday}: \
         neither {home} nor {away} can host without sharing a venue with a home side"
    )]
    UnresolvableConstraint {
        /// 1-based matchday number.
        matchday: usize,
        /// Tentative home team name.
        home: String,
        /// Tentative away team name.
        away: String,
    },
}

impl FixtureError {
    /// Whether the error stems from the input configuration rather than
    /// from the pairing search.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidTeamCount { .. } | Self::EmptyPrefix)
    }
}
