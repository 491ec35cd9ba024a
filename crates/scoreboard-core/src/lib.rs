//! # scoreboard-core
//!
//! The live scoreboard: a registry of matches in progress.
//!
//! ## Operations
//!
//! ```text
//! start_match ──► update_score* ──► finish_match
//!                      │
//!                get_summary (ranked snapshot)
//! ```
//!
//! Every mutating call validates its input first ([`validation`]), then
//! checks the board, then mutates. A failed call leaves the board untouched.
//!
//! Summaries are ranked by total goals, highest first; equal totals put the
//! most recently started match first ([`ordering`]).
//!
//! A [`Scoreboard`] is a plain owned value with no internal locking. Share it
//! across threads by wrapping it in a mutex.

pub mod ordering;
pub mod scoreboard;
pub mod validation;

pub use ordering::rank;
pub use scoreboard::Scoreboard;
