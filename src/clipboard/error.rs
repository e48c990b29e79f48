//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Nothing selected to copy")]
    EmptySelection,

    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    #[error("Selection too large for clipboard ({size_bytes} bytes). Maximum is {max_bytes} bytes.")]
    ContentTooLarge { size_bytes: u64, max_bytes: u64 },

    #[error("Clipboard integration is disabled in the config")]
    Disabled,
}
