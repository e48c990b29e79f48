//! Clipboard operations for copying selected text.
//!
//! Hands the text to the first available system tool: `pbcopy` on macOS,
//! `wl-copy` under Wayland, then `xclip` or `xsel` under X11.
//!
//! # Example
//!
//! ```ignore
//! use blockterm::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("selected text")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};

use crate::config::ClipboardConfig;
use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::EmptySelection` - text is empty
/// - `ClipboardError::ContentTooLarge` - text exceeds the default size limit
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}

/// Copy text honoring the `[clipboard]` config section.
pub fn copy_text_with_config(
    text: &str,
    config: &ClipboardConfig,
) -> Result<CopyResult, ClipboardError> {
    if !config.enabled {
        return Err(ClipboardError::Disabled);
    }
    Copy::new().max_bytes(config.max_bytes).text(text)
}
