//! Configuration management for blockterm

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::terminal::RenderTheme;

impl Config {
    /// Get the config file path (~/.config/blockterm/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/blockterm)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific path, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Render theme built from the `[render]` section
    pub fn render_theme(&self) -> RenderTheme {
        RenderTheme::from_config(&self.render)
    }

    /// Auto-scroll step, never zero so dragging past an edge always progresses
    pub fn autoscroll_step(&self) -> usize {
        self.selection.autoscroll_step.max(1)
    }
}
