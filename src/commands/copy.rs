//! Copy command handler

use anyhow::Result;
use std::path::Path;

use blockterm::clipboard::copy_text_with_config;
use blockterm::document::TextRange;

use super::{load_config, load_session};

/// Extract the text of a global range, printing it or copying it.
pub fn handle(
    events: &Path,
    start: usize,
    end: usize,
    clipboard: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let session = load_session(events, &config)?;
    let text = session.extract_text(TextRange::between(start, end));

    if clipboard {
        let result = copy_text_with_config(&text, &config.clipboard)?;
        eprintln!("{}", result.message());
    } else {
        print!("{text}");
    }
    Ok(())
}
