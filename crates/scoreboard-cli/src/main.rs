//! Scoreboard CLI
//!
//! Feeds scoreboard commands from stdin (or a file) to a live board.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive
//! scoreboard
//!
//! # Replay a script, JSON summaries, debug logs
//! SCOREBOARD_LOG=debug scoreboard --json fixtures.txt
//!
//! # Custom limits
//! scoreboard --config board.json
//! ```

mod command;
mod session;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use scoreboard_core::Scoreboard;
use scoreboard_types::{ScoreboardConfig, constants};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::session::OutputFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "scoreboard", version, about = "Live scoreboard of matches in progress")]
struct Args {
    /// JSON file with board limits (`max_matches`, `max_team_name_len`)
    #[arg(long, env = "SCOREBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Print summaries as JSON arrays
    #[arg(long)]
    json: bool,

    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Read commands from this file instead of stdin
    input: Option<PathBuf>,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_env("SCOREBOARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "scoreboard=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ScoreboardConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let config = ScoreboardConfig::from_json_str(&raw)?;
            tracing::info!(path = %path.display(), ?config, "Loaded config");
            Ok(config)
        }
        None => Ok(ScoreboardConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log_format);

    tracing::info!("Starting {} v{}", constants::ENGINE_NAME, constants::VERSION);

    let config = load_config(args.config.as_ref())?;
    let mut board = Scoreboard::with_config(config)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdout = io::stdout().lock();
    let stats = match &args.input {
        Some(path) => session::run(&mut board, BufReader::new(File::open(path)?), stdout, format)?,
        None => session::run(&mut board, io::stdin().lock(), stdout, format)?,
    };

    tracing::info!(
        commands = stats.commands,
        failures = stats.failures,
        in_progress = board.len(),
        "Session finished"
    );
    Ok(())
}
