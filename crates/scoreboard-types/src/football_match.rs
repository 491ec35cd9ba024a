//! The match model.
//!
//! A [`Match`] has a fixed identity (teams, id, start time, start sequence)
//! and a mutable score. It performs no validation of its own; the
//! scoreboard validates every input before a `Match` is built or touched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{MatchId, names_equal};

/// One contest currently in progress.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    started_at: DateTime<Utc>,
    /// Start ordinal assigned by the owning scoreboard. Strictly increasing
    /// in start order, so it breaks ties even when timestamps coincide.
    sequence: u64,
}

impl Match {
    /// Start a match at 0 - 0, stamped with the current time.
    #[must_use]
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, sequence: u64) -> Self {
        Self {
            id: MatchId::new(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_score: 0,
            away_score: 0,
            started_at: Utc::now(),
            sequence,
        }
    }

    /// Replace the current score.
    pub fn update_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    #[must_use]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Combined goals of both sides.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Whether this is `home` vs `away` with the same sides.
    #[must_use]
    pub fn is_between(&self, home: &str, away: &str) -> bool {
        names_equal(&self.home_team, home) && names_equal(&self.away_team, away)
    }

    /// Whether `team` plays on either side.
    #[must_use]
    pub fn involves(&self, team: &str) -> bool {
        names_equal(&self.home_team, team) || names_equal(&self.away_team, team)
    }

    /// Value snapshot of the current state.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            id: self.id,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            started_at: self.started_at,
        }
    }
}

/// Point-in-time copy of a match, as returned by summaries and lookups.
///
/// Owns its data: later changes to the board never show through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub started_at: DateTime<Utc>,
}

impl MatchSummary {
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_match_starts_nil_nil() {
        let m = Match::new("Mexico", "Canada", 0);
        assert_eq!(m.home_team(), "Mexico");
        assert_eq!(m.away_team(), "Canada");
        assert_eq!(m.home_score(), 0);
        assert_eq!(m.away_score(), 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn update_replaces_score() {
        let mut m = Match::new("Spain", "Brazil", 0);
        m.update_score(3, 1);
        m.update_score(10, 2);
        assert_eq!((m.home_score(), m.away_score()), (10, 2));
        assert_eq!(m.total_score(), 12);
    }

    #[test]
    fn update_keeps_identity() {
        let mut m = Match::new("Spain", "Brazil", 7);
        let (id, started) = (m.id(), m.started_at());
        m.update_score(1, 1);
        assert_eq!(m.id(), id);
        assert_eq!(m.started_at(), started);
        assert_eq!(m.sequence(), 7);
    }

    #[test]
    fn total_score_does_not_overflow() {
        let mut m = Match::new("A", "B", 0);
        m.update_score(u32::MAX, u32::MAX);
        assert_eq!(m.total_score(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn is_between_respects_sides() {
        let m = Match::new("Mexico", "Canada", 0);
        assert!(m.is_between("MEXICO", "canada"));
        assert!(!m.is_between("Canada", "Mexico"));
    }

    #[test]
    fn involves_either_side() {
        let m = Match::new("Mexico", "Canada", 0);
        assert!(m.involves("mexico"));
        assert!(m.involves("CANADA"));
        assert!(!m.involves("Brazil"));
    }

    #[test]
    fn summary_is_a_snapshot() {
        let mut m = Match::new("Germany", "France", 0);
        m.update_score(2, 2);
        let snap = m.summary();
        m.update_score(5, 2);
        assert_eq!(snap.home_score, 2);
        assert_eq!(snap.id, m.id());
        assert_eq!(snap.total_score(), 4);
    }

    #[test]
    fn summary_display() {
        let mut m = Match::new("Mexico", "Canada", 0);
        m.update_score(0, 5);
        assert_eq!(m.summary().to_string(), "Mexico 0 - Canada 5");
    }
}
