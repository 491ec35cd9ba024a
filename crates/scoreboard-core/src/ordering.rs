//! Summary ranking.
//!
//! Total goals descending, then start sequence descending. Sequences are
//! unique per board, so the order is total and deterministic.

use std::cmp::Reverse;

use scoreboard_types::{Match, MatchSummary};

/// Sort key: smaller keys rank higher.
#[must_use]
pub fn rank_key(game: &Match) -> Reverse<(u64, u64)> {
    Reverse((game.total_score(), game.sequence()))
}

/// Rank matches into an owned summary.
#[must_use]
pub fn rank(matches: &[Match]) -> Vec<MatchSummary> {
    let mut ranked: Vec<&Match> = matches.iter().collect();
    ranked.sort_by_key(|game| rank_key(game));
    ranked.into_iter().map(Match::summary).collect()
}
