//! Search configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Switches for the optional refinements of the minimax search.
///
/// None of them changes which value a position has; they only change how
/// quickly the answer is found. Every field defaults when missing from a
/// TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SearchConfig {
    /// Answer the center square on the empty board without searching.
    #[serde(default = "default_opening_shortcut")]
    opening_shortcut: bool,

    /// Return a root action as soon as it completes a line.
    #[serde(default = "default_early_exit")]
    early_exit: bool,

    /// Evaluate root subtrees on the rayon thread pool.
    #[serde(default = "default_parallel_root")]
    parallel_root: bool,
}

fn default_opening_shortcut() -> bool {
    true
}

fn default_early_exit() -> bool {
    true
}

fn default_parallel_root() -> bool {
    false
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            opening_shortcut: default_opening_shortcut(),
            early_exit: default_early_exit(),
            parallel_root: default_parallel_root(),
        }
    }
}

impl SearchConfig {
    /// Plain exhaustive search: no opening shortcut, no early exit, sequential.
    pub fn exhaustive() -> Self {
        Self {
            opening_shortcut: false,
            early_exit: false,
            parallel_root: false,
        }
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?config, "Parsed search config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
