//! Platform clipboard tools.

mod pipe;

pub use pipe::PipeTool;

use super::tool::CopyTool;

/// Tools for the current platform, in priority order.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    vec![
        Box::new(PipeTool::pbcopy()),
        Box::new(PipeTool::wl_copy()),
        Box::new(PipeTool::xclip()),
        Box::new(PipeTool::xsel()),
    ]
}
