//! Input validation shared by every scoreboard operation.
//!
//! Order matters: callers observe the first failing check, so the home name
//! is always checked before the away name, and names before scores.

use scoreboard_types::{Result, ScoreboardError, TeamSide, is_blank, names_equal};

/// Validate a home/away name pair.
///
/// # Errors
/// - `EmptyTeamName` if either name is empty or whitespace (home first)
/// - `TeamNameTooLong` if `max_len` is set and a name exceeds it (in chars)
/// - `SameTeams` if both names are the same team
pub fn validate_team_names(
    home_team: &str,
    away_team: &str,
    max_len: Option<usize>,
) -> Result<()> {
    validate_team_name(TeamSide::Home, home_team, max_len)?;
    validate_team_name(TeamSide::Away, away_team, max_len)?;
    if names_equal(home_team, away_team) {
        return Err(ScoreboardError::SameTeams);
    }
    Ok(())
}

fn validate_team_name(side: TeamSide, name: &str, max_len: Option<usize>) -> Result<()> {
    if is_blank(name) {
        return Err(ScoreboardError::EmptyTeamName { side });
    }
    if let Some(max) = max_len {
        let len = name.chars().count();
        if len > max {
            return Err(ScoreboardError::TeamNameTooLong { side, len, max });
        }
    }
    Ok(())
}

/// Validate a score pair, home first, converting to unsigned goals.
///
/// # Errors
/// Returns `NegativeScore` for the first negative value.
pub fn validate_scores(home_score: i32, away_score: i32) -> Result<(u32, u32)> {
    let home = u32::try_from(home_score).map_err(|_| ScoreboardError::NegativeScore {
        side: TeamSide::Home,
        score: home_score,
    })?;
    let away = u32::try_from(away_score).map_err(|_| ScoreboardError::NegativeScore {
        side: TeamSide::Away,
        score: away_score,
    })?;
    Ok((home, away))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: Option<usize> = None;

    #[test]
    fn valid_pair() {
        assert!(validate_team_names("Mexico", "Canada", MAX).is_ok());
    }

    #[test]
    fn empty_home_reported_before_empty_away() {
        let err = validate_team_names("", " ", MAX).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::EmptyTeamName {
                side: TeamSide::Home
            }
        );
    }

    #[test]
    fn whitespace_away() {
        let err = validate_team_names("Mexico", "\t ", MAX).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::EmptyTeamName {
                side: TeamSide::Away
            }
        );
    }

    #[test]
    fn same_team_any_case() {
        let err = validate_team_names("Mexico", "MEXICO", MAX).unwrap_err();
        assert_eq!(err, ScoreboardError::SameTeams);
        assert!(err.to_string().contains("Home and away teams must be different"));
    }

    #[test]
    fn blank_checked_before_sameness() {
        let err = validate_team_names(" ", " ", MAX).unwrap_err();
        assert!(matches!(err, ScoreboardError::EmptyTeamName { .. }));
    }

    #[test]
    fn long_names_accepted_without_limit() {
        let long = "A".repeat(500);
        assert!(validate_team_names(&long, "Canada", None).is_ok());
        assert!(validate_team_names("Canada", &long, None).is_ok());
    }

    #[test]
    fn too_long_counts_chars_not_bytes() {
        assert!(validate_team_names("Ñandú", "Peru", Some(5)).is_ok());
        let err = validate_team_names("Mexico", "Peru", Some(5)).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::TeamNameTooLong {
                side: TeamSide::Home,
                len: 6,
                max: 5
            }
        );
    }

    #[test]
    fn too_long_away() {
        let err = validate_team_names("Peru", "Canada", Some(5)).unwrap_err();
        assert!(matches!(
            err,
            ScoreboardError::TeamNameTooLong {
                side: TeamSide::Away,
                ..
            }
        ));
    }

    #[test]
    fn scores_convert() {
        assert_eq!(validate_scores(0, 0).unwrap(), (0, 0));
        assert_eq!(validate_scores(3, 2).unwrap(), (3, 2));
    }

    #[test]
    fn negative_home_reported_first() {
        let err = validate_scores(-1, -1).unwrap_err();
        assert_eq!(
            err,
            ScoreboardError::NegativeScore {
                side: TeamSide::Home,
                score: -1
            }
        );
    }

    #[test]
    fn negative_away() {
        let err = validate_scores(0, -5).unwrap_err();
        assert!(err.to_string().contains("Away score can't be negative"));
    }
}
