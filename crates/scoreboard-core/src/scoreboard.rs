//! The scoreboard registry.
//!
//! Owns every match in progress, in start order. Lookups are linear scans;
//! boards hold tens of matches, not millions.

use scoreboard_types::{Match, MatchSummary, Result, ScoreboardConfig, ScoreboardError};

use crate::ordering;
use crate::validation::{validate_scores, validate_team_names};

/// Registry of matches in progress.
///
/// Invariants:
/// - a team (case-insensitively) plays in at most one match;
/// - `matches` is in start order and sequences strictly increase along it.
#[derive(Debug)]
pub struct Scoreboard {
    /// Matches in start order.
    matches: Vec<Match>,
    /// Sequence handed to the next match started.
    next_sequence: u64,
    config: ScoreboardConfig,
}

impl Scoreboard {
    /// Create an empty, unbounded board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            next_sequence: 0,
            config: ScoreboardConfig::default(),
        }
    }

    /// Create an empty board with custom limits.
    ///
    /// # Errors
    /// Returns `Configuration` if the config is invalid.
    pub fn with_config(config: ScoreboardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            matches: Vec::new(),
            next_sequence: 0,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    /// Start a new match at 0 - 0.
    ///
    /// # Errors
    /// - `EmptyTeamName`, `TeamNameTooLong`, `SameTeams` on bad names
    /// - `MatchAlreadyInProgress` if this fixture is running
    /// - `TeamsAlreadyPlaying` if the reversed fixture is running
    /// - `TeamBusy` if either team is playing someone else (home checked first)
    /// - `ScoreboardFull` when a configured capacity is reached
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        if let Err(err) = self.check_can_start(home_team, away_team) {
            tracing::warn!(home = home_team, away = away_team, error = %err, "Match start rejected");
            return Err(err);
        }

        let game = Match::new(home_team, away_team, self.next_sequence);
        self.next_sequence += 1;

        tracing::info!(
            id = %game.id().short(),
            home = game.home_team(),
            away = game.away_team(),
            sequence = game.sequence(),
            in_progress = self.matches.len() + 1,
            "Match started"
        );

        self.matches.push(game);
        Ok(())
    }

    fn check_can_start(&self, home_team: &str, away_team: &str) -> Result<()> {
        validate_team_names(home_team, away_team, self.config.max_team_name_len)?;

        for game in &self.matches {
            if game.is_between(home_team, away_team) {
                return Err(ScoreboardError::MatchAlreadyInProgress);
            }
            if game.is_between(away_team, home_team) {
                return Err(ScoreboardError::TeamsAlreadyPlaying);
            }
        }

        for game in &self.matches {
            if game.involves(home_team) {
                return Err(ScoreboardError::TeamBusy {
                    team: home_team.to_string(),
                });
            }
            if game.involves(away_team) {
                return Err(ScoreboardError::TeamBusy {
                    team: away_team.to_string(),
                });
            }
        }

        if let Some(max) = self.config.max_matches {
            if self.matches.len() >= max {
                return Err(ScoreboardError::ScoreboardFull { max });
            }
        }
        Ok(())
    }

    /// Replace the score of a running match. Sides must match as started.
    ///
    /// # Errors
    /// - `EmptyTeamName`, `TeamNameTooLong`, `SameTeams` on bad names
    /// - `NegativeScore` for a negative score (home checked first)
    /// - `MatchNotFound` if no such match is in progress
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        let located = validate_team_names(home_team, away_team, self.config.max_team_name_len)
            .and_then(|()| validate_scores(home_score, away_score))
            .and_then(|scores| {
                self.position(home_team, away_team)
                    .map(|idx| (idx, scores))
            });

        let (idx, (home_goals, away_goals)) = match located {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(home = home_team, away = away_team, error = %err, "Score update rejected");
                return Err(err);
            }
        };

        let game = &mut self.matches[idx];
        game.update_score(home_goals, away_goals);

        tracing::debug!(
            id = %game.id().short(),
            home = game.home_team(),
            away = game.away_team(),
            home_score = home_goals,
            away_score = away_goals,
            "Score updated"
        );
        Ok(())
    }

    /// Finish a running match and remove it from the board.
    ///
    /// Returns the final state of the finished match.
    ///
    /// # Errors
    /// - `EmptyTeamName`, `TeamNameTooLong`, `SameTeams` on bad names
    /// - `MatchNotFound` if no such match is in progress
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<MatchSummary> {
        let located = validate_team_names(home_team, away_team, self.config.max_team_name_len)
            .and_then(|()| self.position(home_team, away_team));

        let idx = match located {
            Ok(idx) => idx,
            Err(err) => {
                tracing::warn!(home = home_team, away = away_team, error = %err, "Match finish rejected");
                return Err(err);
            }
        };

        // `remove`, not `swap_remove`: the rest must stay in start order.
        let finished = self.matches.remove(idx).summary();

        tracing::info!(
            id = %finished.id.short(),
            result = %finished,
            in_progress = self.matches.len(),
            "Match finished"
        );
        Ok(finished)
    }

    /// Ranked snapshot of every match in progress.
    ///
    /// Highest total first; equal totals list the most recently started first.
    #[must_use]
    pub fn get_summary(&self) -> Vec<MatchSummary> {
        let summary = ordering::rank(&self.matches);
        tracing::debug!(matches = summary.len(), "Summary built");
        summary
    }

    /// Snapshot of one running match, sides as started.
    #[must_use]
    pub fn get_match(&self, home_team: &str, away_team: &str) -> Option<MatchSummary> {
        self.matches
            .iter()
            .find(|game| game.is_between(home_team, away_team))
            .map(Match::summary)
    }

    /// Whether `team` is playing on either side of any running match.
    #[must_use]
    pub fn is_playing(&self, team: &str) -> bool {
        self.matches.iter().any(|game| game.involves(team))
    }

    /// Number of matches in progress.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn position(&self, home_team: &str, away_team: &str) -> Result<usize> {
        self.matches
            .iter()
            .position(|game| game.is_between(home_team, away_team))
            .ok_or_else(|| ScoreboardError::MatchNotFound {
                home: home_team.to_string(),
                away: away_team.to_string(),
            })
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
