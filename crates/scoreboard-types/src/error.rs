//! Error types for the live scoreboard.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by [`ErrorKind`]:
//! - 1xx: Invalid arguments (rejected before any state is consulted)
//! - 2xx: Conflicts with matches already in progress
//! - 3xx: Lookups of matches that are not in progress
//! - 9xx: Configuration / serialization errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TeamSide;

/// Coarse classification of a [`ScoreboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed input. Detected before the board is consulted.
    InvalidArgument,
    /// The request clashes with a match already in progress.
    Conflict,
    /// The addressed match is not in progress.
    NotFound,
    /// Bad configuration.
    Configuration,
}

/// Central error enum for all scoreboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    // =================================================================
    // Invalid Arguments (1xx)
    // =================================================================
    /// A team name is empty or whitespace only.
    #[error("SB_ERR_100: {side} team name cannot be null or empty")]
    EmptyTeamName { side: TeamSide },

    /// A team name exceeds the configured length limit.
    #[error("SB_ERR_101: {side} team name is too long: {len} chars, max {max}")]
    TeamNameTooLong {
        side: TeamSide,
        len: usize,
        max: usize,
    },

    /// Home and away name the same team.
    #[error("SB_ERR_102: Home and away teams must be different")]
    SameTeams,

    /// A score below zero.
    #[error("SB_ERR_103: {side} score can't be negative: {score}")]
    NegativeScore { side: TeamSide, score: i32 },

    // =================================================================
    // Conflicts (2xx)
    // =================================================================
    /// The same fixture (same sides) is already running.
    #[error("SB_ERR_200: The match is already in progress")]
    MatchAlreadyInProgress,

    /// The same two teams are already playing with sides swapped.
    #[error("SB_ERR_201: Teams are already playing in a match")]
    TeamsAlreadyPlaying,

    /// One of the requested teams is playing someone else.
    #[error("SB_ERR_202: {team} is already in another match")]
    TeamBusy { team: String },

    /// The board holds its configured maximum of matches.
    #[error("SB_ERR_203: Scoreboard is full: {max} matches in progress")]
    ScoreboardFull { max: usize },

    // =================================================================
    // Not Found (3xx)
    // =================================================================
    /// No match in progress with this home/away pairing.
    #[error("SB_ERR_300: The match doesn't exist: {home} - {away}")]
    MatchNotFound { home: String, away: String },

    // =================================================================
    // Configuration (9xx)
    // =================================================================
    /// Invalid configuration values.
    #[error("SB_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("SB_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl ScoreboardError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTeamName { .. }
            | Self::TeamNameTooLong { .. }
            | Self::SameTeams
            | Self::NegativeScore { .. } => ErrorKind::InvalidArgument,
            Self::MatchAlreadyInProgress
            | Self::TeamsAlreadyPlaying
            | Self::TeamBusy { .. }
            | Self::ScoreboardFull { .. } => ErrorKind::Conflict,
            Self::MatchNotFound { .. } => ErrorKind::NotFound,
            Self::Configuration(_) | Self::Serialization(_) => ErrorKind::Configuration,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ScoreboardError>;

impl From<serde_json::Error> for ScoreboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
