//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Colors substituted where a style leaves one unspecified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Foreground for text with no explicit color ("#RRGGBB")
    #[serde(default = "default_foreground")]
    pub default_foreground: String,
    /// Background for text with no explicit color; empty keeps it transparent
    #[serde(default)]
    pub default_background: String,
    /// Foreground used when reverse video swaps in an absent background
    #[serde(default = "default_foreground")]
    pub reverse_fallback: String,
}

pub fn default_foreground() -> String {
    "#d4d4d4".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_foreground: default_foreground(),
            default_background: String::new(),
            reverse_fallback: default_foreground(),
        }
    }
}

/// Mouse-drag selection behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Characters the selection advances per auto-scroll tick while the
    /// pointer is beyond the content edge
    #[serde(default = "default_autoscroll_step")]
    pub autoscroll_step: usize,
}

pub fn default_autoscroll_step() -> usize {
    3
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            autoscroll_step: default_autoscroll_step(),
        }
    }
}

/// System clipboard integration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default = "default_clipboard_enabled")]
    pub enabled: bool,
    /// Largest text (in bytes) handed to a clipboard tool
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

pub fn default_clipboard_enabled() -> bool {
    true
}

pub fn default_max_bytes() -> u64 {
    10 * 1024 * 1024
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: default_clipboard_enabled(),
            max_bytes: default_max_bytes(),
        }
    }
}

/// Logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set (e.g. "warn", "blockterm=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
