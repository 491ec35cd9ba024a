//! Scoreboard configuration.
//!
//! Every limit is opt-in. A default board accepts any number of matches and
//! team names of any length.

use serde::{Deserialize, Serialize};

use crate::{Result, ScoreboardError};

/// Optional limits applied by a scoreboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Maximum number of matches in progress at once. `None`: unbounded.
    pub max_matches: Option<usize>,
    /// Maximum team name length, in characters. `None`: unbounded.
    pub max_team_name_len: Option<usize>,
}

impl ScoreboardConfig {
    /// Parse a JSON document. Missing fields stay unbounded.
    ///
    /// # Errors
    /// `Serialization` on malformed JSON, `Configuration` on invalid limits.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject limits that would make the board unusable.
    ///
    /// # Errors
    /// Returns `Configuration` if a limit is set to zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_matches == Some(0) {
            return Err(ScoreboardError::Configuration(
                "max_matches must be > 0".to_string(),
            ));
        }
        if self.max_team_name_len == Some(0) {
            return Err(ScoreboardError::Configuration(
                "max_team_name_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
