//! Global context for CLI commands

use anyhow::{Context as _, Result};
use std::env;
use std::path::Path;
use texforge_core::config::Config;

/// Global context containing loaded config
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by loading texforge.toml
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config path cannot be read or parsed
    /// - texforge.toml in the current directory is invalid
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => {
                let current_dir = env::current_dir()?;
                Config::load_or_default(&current_dir)?
            }
        };

        Ok(Self { config, verbose })
    }
}
