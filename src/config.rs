//! League configuration.
//!
//! A `LeagueConfig` names a league and fixes its team count and naming
//! scheme. Configurations deserialize with serde, so they can be loaded
//! from JSON or any other serde format.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `id` | `""` |
//! | `separator` | `" "` |
//! | `self_check` | `true` |

use serde::{Deserialize, Serialize};

use crate::error::FixtureResult;
use crate::models::{check_team_count, Schedule, TeamNaming};
use crate::scheduler::RoundRobinGenerator;

/// Configuration for one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeagueConfig {
    /// League identifier.
    #[serde(default)]
    pub id: String,
    /// Number of teams (even, at least 2).
    pub team_count: usize,
    /// Team name prefix.
    pub prefix: String,
    /// Text between prefix and team index.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Run the validator after generation and log findings.
    #[serde(default = "default_self_check")]
    pub self_check: bool,
}

fn default_separator() -> String {
    " ".to_string()
}

fn default_self_check() -> bool {
    true
}

impl LeagueConfig {
    /// Creates a configuration with default separator and self-check on.
    pub fn new(id: impl Into<String>, team_count: usize, prefix: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            team_count,
            prefix: prefix.into(),
            separator: default_separator(),
            self_check: default_self_check(),
        }
    }

    /// Sets the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enables or disables the self-check.
    pub fn with_self_check(mut self, enabled: bool) -> Self {
        self.self_check = enabled;
        self
    }

    /// Naming scheme described by this configuration.
    pub fn naming(&self) -> TeamNaming {
        TeamNaming::new(self.prefix.clone()).with_separator(self.separator.clone())
    }

    /// Checks team count, then prefix.
    pub fn validate(&self) -> FixtureResult<()> {
        check_team_count(self.team_count)?;
        self.naming().validate()
    }

    /// Generates this league's schedule.
    pub fn generate(&self) -> FixtureResult<Schedule> {
        RoundRobinGenerator::from_config(self).generate(self.team_count)
    }

    /// Built-in leagues: 10, 12, 14 and 16 teams.
    pub fn presets() -> Vec<LeagueConfig> {
        vec![
            LeagueConfig::new("carousel-10", 10, "Equipe"),
            LeagueConfig::new("carousel-12", 12, "Equipe"),
            LeagueConfig::new("carousel-14", 14, "Team"),
            LeagueConfig::new("carousel-16", 16, "E"),
        ]
    }
}
