//! Command-line grammar.
//!
//! One command per line. The two sides are separated by `" - "`, so team
//! names may contain spaces; in `update` each side ends with its score.
//!
//! ```text
//! start Mexico - Canada
//! update Mexico 0 - Canada 5
//! finish Mexico - Canada
//! summary
//! ```
//!
//! Team names are passed through untouched; the board validates them.

use scoreboard_types::TeamSide;
use thiserror::Error;

const SIDE_SEPARATOR: &str = " - ";

/// A parsed scoreboard command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start {
        home: String,
        away: String,
    },
    Update {
        home: String,
        away: String,
        home_score: i32,
        away_score: i32,
    },
    Finish {
        home: String,
        away: String,
    },
    Summary,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("expected `<home> - <away>`")]
    MissingSeparator,

    #[error("missing {side} score")]
    MissingScore { side: TeamSide },

    #[error("invalid {side} score: {value}")]
    InvalidScore { side: TeamSide, value: String },

    #[error("`summary` takes no arguments")]
    UnexpectedArguments,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Option<Result<Command, ParseError>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let parsed = match verb.to_ascii_lowercase().as_str() {
        "start" => split_sides(rest).map(|(home, away)| Command::Start {
            home: home.to_string(),
            away: away.to_string(),
        }),
        "finish" => split_sides(rest).map(|(home, away)| Command::Finish {
            home: home.to_string(),
            away: away.to_string(),
        }),
        "update" => parse_update(rest),
        "summary" if rest.is_empty() => Ok(Command::Summary),
        "summary" => Err(ParseError::UnexpectedArguments),
        _ => Err(ParseError::UnknownCommand(verb.to_string())),
    };
    Some(parsed)
}

fn split_sides(rest: &str) -> Result<(&str, &str), ParseError> {
    rest.split_once(SIDE_SEPARATOR)
        .map(|(home, away)| (home.trim(), away.trim()))
        .ok_or(ParseError::MissingSeparator)
}

fn parse_update(rest: &str) -> Result<Command, ParseError> {
    let (home_side, away_side) = split_sides(rest)?;
    let (home, home_score) = split_score(TeamSide::Home, home_side)?;
    let (away, away_score) = split_score(TeamSide::Away, away_side)?;
    Ok(Command::Update {
        home: home.to_string(),
        away: away.to_string(),
        home_score,
        away_score,
    })
}

fn split_score(side: TeamSide, text: &str) -> Result<(&str, i32), ParseError> {
    let (name, score) = text
        .rsplit_once(char::is_whitespace)
        .ok_or(ParseError::MissingScore { side })?;
    let score = score.parse().map_err(|_| ParseError::InvalidScore {
        side,
        value: score.to_string(),
    })?;
    Ok((name.trim(), score))
}
