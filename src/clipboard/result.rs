//! Clipboard copy outcome.

/// The tool that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
}

impl CopyMethod {
    /// Executable name of the tool.
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
        }
    }
}

/// A successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// User-facing confirmation.
    pub fn message(&self) -> String {
        format!(
            "Copied {} to clipboard via {}",
            match self.size_bytes {
                1 => "1 byte".to_string(),
                n => format!("{n} bytes"),
            },
            self.tool.name()
        )
    }
}
