//! Team model and naming scheme.
//!
//! Teams are identified by a 1-based index. Display names are derived
//! from a [`TeamNaming`] and never stored independently of it, so two
//! rosters built from the same naming are identical.

use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, FixtureResult};

/// A team in a league.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    /// 1-based team index.
    pub index: usize,
    /// Display name (e.g., "Equipe 3").
    pub name: String,
}

/// Deterministic naming scheme: `prefix + separator + index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNaming {
    /// Name prefix (e.g., "Equipe", "Team").
    pub prefix: String,
    /// Text placed between prefix and index (default: a single space).
    pub separator: String,
}

impl Team {
    /// Creates a team.
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl TeamNaming {
    /// Creates a naming scheme with the default single-space separator.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: " ".to_string(),
        }
    }

    /// Sets the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Rejects an empty prefix.
    pub fn validate(&self) -> FixtureResult<()> {
        if self.prefix.is_empty() {
            return Err(FixtureError::EmptyPrefix);
        }
        Ok(())
    }

    /// Display name for a team index.
    pub fn name(&self, index: usize) -> String {
        format!("{}{}{}", self.prefix, self.separator, index)
    }

    /// Builds the roster `1..=team_count`.
    pub fn roster(&self, team_count: usize) -> Vec<Team> {
        (1..=team_count)
            .map(|index| Team::new(index, self.name(index)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separator() {
        let naming = TeamNaming::new("Equipe");
        assert_eq!(naming.name(3), "Equipe 3");
    }

    #[test]
    fn test_custom_separator() {
        let naming = TeamNaming::new("T").with_separator("");
        assert_eq!(naming.name(12), "T12");
    }

    #[test]
    fn test_roster() {
        let roster = TeamNaming::new("E").roster(4);
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0], Team::new(1, "E 1"));
        assert_eq!(roster[3].to_string(), "E 4");
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert_eq!(TeamNaming::new("").validate(), Err(FixtureError::EmptyPrefix));
        assert!(TeamNaming::new("X").validate().is_ok());
    }
}
