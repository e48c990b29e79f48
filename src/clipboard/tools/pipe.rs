//! Clipboard tools that read the text to copy from stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// A clipboard program fed through a stdin pipe.
#[derive(Debug, Clone)]
pub struct PipeTool {
    method: CopyMethod,
    program: &'static str,
    args: &'static [&'static str],
    /// Only usable under this `target_os`, when set
    os: Option<&'static str>,
    /// Only usable when this environment variable is set, when set
    requires_env: Option<&'static str>,
}

impl PipeTool {
    /// macOS `pbcopy`.
    pub fn pbcopy() -> Self {
        Self {
            method: CopyMethod::Pbcopy,
            program: "pbcopy",
            args: &[],
            os: Some("macos"),
            requires_env: None,
        }
    }

    /// Wayland `wl-copy`.
    pub fn wl_copy() -> Self {
        Self {
            method: CopyMethod::WlCopy,
            program: "wl-copy",
            args: &[],
            os: Some("linux"),
            requires_env: Some("WAYLAND_DISPLAY"),
        }
    }

    /// X11 `xclip`.
    pub fn xclip() -> Self {
        Self {
            method: CopyMethod::Xclip,
            program: "xclip",
            args: &["-selection", "clipboard"],
            os: Some("linux"),
            requires_env: None,
        }
    }

    /// X11 `xsel`.
    pub fn xsel() -> Self {
        Self {
            method: CopyMethod::Xsel,
            program: "xsel",
            args: &["--clipboard", "--input"],
            os: Some("linux"),
            requires_env: None,
        }
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[&'static str] {
        self.args
    }

    /// Check if the program is installed.
    fn tool_exists(&self) -> bool {
        Command::new("which")
            .arg(self.program)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl CopyTool for PipeTool {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        let os_ok = self.os.map_or(true, |os| os == std::env::consts::OS);
        let env_ok = self
            .requires_env
            .map_or(true, |var| std::env::var_os(var).is_some());
        os_ok && env_ok && self.tool_exists()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => CopyToolError::NotFound,
                _ => CopyToolError::Failed(e.to_string()),
            })?;

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        // stdin is closed here so the tool sees EOF; always reap the child,
        // even when the write failed
        let status = child
            .wait()
            .map_err(|e| CopyToolError::Failed(e.to_string()))?;
        written.map_err(|e| CopyToolError::Failed(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(CopyToolError::Failed(format!(
                "{} exited with {}",
                self.program,
                status
            )))
        }
    }
}
