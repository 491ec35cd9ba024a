//! # scoreboard-types
//!
//! Shared types, errors, and configuration for the **live scoreboard**.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MatchId`]
//! - **Match model**: [`Match`], [`MatchSummary`]
//! - **Team identity**: [`TeamSide`], [`names_equal`] (ordinal case-insensitive)
//! - **Configuration**: [`ScoreboardConfig`]
//! - **Errors**: [`ScoreboardError`] with `SB_ERR_` prefix codes, grouped by [`ErrorKind`]
//! - **Constants**: version and engine name

pub mod config;
pub mod constants;
pub mod error;
pub mod football_match;
pub mod ids;
pub mod team;

// Re-export all primary types at crate root for ergonomic imports:
//   use scoreboard_types::{Match, MatchSummary, ScoreboardError, ...};

pub use config::*;
pub use error::*;
pub use football_match::*;
pub use ids::*;
pub use team::*;

// Constants are accessed via `scoreboard_types::constants::FOO`
// (not re-exported to avoid name collisions).
