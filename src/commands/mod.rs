//! Command handlers for the blockterm CLI.
//!
//! Each submodule handles one subcommand. Dispatch lives in main.rs.

pub mod config;
pub mod copy;
pub mod document;
pub mod replay;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use blockterm::{Config, Session};
use tracing::{debug, warn};

/// Load the config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Replay a newline-delimited JSON event file into a fresh session.
///
/// A path of `-` reads stdin. Blank lines are skipped; lines that fail to
/// decode are logged and skipped so one bad event does not lose the rest.
pub fn load_session(events: &Path, config: &Config) -> Result<Session> {
    let reader: Box<dyn BufRead> = if events == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(events)
            .with_context(|| format!("Failed to open events file {}", events.display()))?;
        Box::new(BufReader::new(file))
    };
    replay_lines(reader, config)
}

fn replay_lines(reader: impl BufRead, config: &Config) -> Result<Session> {
    let mut session = Session::with_config(config);
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read events")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if session.apply_json(line).is_err() {
            warn!(line = index + 1, "Skipped invalid event");
            skipped += 1;
        }
    }

    debug!(
        blocks = session.blocks().len(),
        skipped = skipped,
        "Replayed events"
    );
    Ok(session)
}
