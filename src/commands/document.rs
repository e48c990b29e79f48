//! Document command handler

use anyhow::Result;
use std::path::Path;

use blockterm::document::{GlobalDocument, SegmentKind};

use super::{load_config, load_session};

/// Print the global offset index of the replayed blocks.
pub fn handle(events: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let session = load_session(events, &config)?;
    print!("{}", format_document(session.document()));
    Ok(())
}

/// One line per segment: block index, kind and global range.
pub fn format_document(document: &GlobalDocument) -> String {
    let mut out = String::new();
    for segment in document.segments() {
        let kind = match segment.kind {
            SegmentKind::Header => "header",
            SegmentKind::Output => "output",
        };
        out.push_str(&format!(
            "block {:>3}  {:<6}  {}..{}\n",
            segment.block_index,
            kind,
            segment.range.offset,
            segment.range.end()
        ));
    }
    out.push_str(&format!("total {}\n", document.total_length()));
    out
}
