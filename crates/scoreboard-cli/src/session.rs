//! Drives a [`Scoreboard`] from a stream of command lines.
//!
//! Bad lines and rejected operations are reported on the output stream and
//! the session carries on; only I/O failures end it.

use std::io::{self, BufRead, Write};

use scoreboard_core::Scoreboard;
use scoreboard_types::MatchSummary;

use crate::command::{Command, parse_line};

/// How summaries are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Tally of a finished session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub commands: usize,
    pub failures: usize,
}

/// Read commands from `input` until EOF, applying them to `board`.
///
/// # Errors
/// Returns an I/O error if reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(
    board: &mut Scoreboard,
    input: R,
    mut out: W,
    format: OutputFormat,
) -> io::Result<SessionStats> {
    let mut stats = SessionStats::default();

    for (line_no, line) in input.lines().enumerate() {
        let line = line?;
        let Some(parsed) = parse_line(&line) else {
            continue;
        };
        stats.commands += 1;

        let command = match parsed {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(line = line_no + 1, error = %err, "Unparseable command");
                writeln!(out, "error: line {}: {err}", line_no + 1)?;
                stats.failures += 1;
                continue;
            }
        };

        let outcome = match command {
            Command::Start { home, away } => board
                .start_match(&home, &away)
                .map(|()| format!("started: {home} - {away}")),
            Command::Update {
                home,
                away,
                home_score,
                away_score,
            } => board
                .update_score(&home, &away, home_score, away_score)
                .map(|()| format!("updated: {home} {home_score} - {away} {away_score}")),
            Command::Finish { home, away } => board
                .finish_match(&home, &away)
                .map(|finished| format!("finished: {finished}")),
            Command::Summary => {
                write_summary(&mut out, &board.get_summary(), format)?;
                continue;
            }
        };

        match outcome {
            Ok(message) => writeln!(out, "{message}")?,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                stats.failures += 1;
            }
        }
    }

    Ok(stats)
}

fn write_summary<W: Write>(
    out: &mut W,
    summary: &[MatchSummary],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, summary)?;
            writeln!(out)
        }
        OutputFormat::Text if summary.is_empty() => writeln!(out, "no matches in progress"),
        OutputFormat::Text => {
            for (rank, game) in summary.iter().enumerate() {
                writeln!(out, "{}. {game}", rank + 1)?;
            }
            Ok(())
        }
    }
}
