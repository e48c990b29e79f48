//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyToolError {
    #[error("tool not found")]
    NotFound,
    #[error("{0}")]
    Failed(String),
}

/// An external program that can put text on the system clipboard.
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can run on this system.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
