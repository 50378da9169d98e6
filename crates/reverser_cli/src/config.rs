//! Configuration management for the reverser CLI.
//!
//! This module provides functionality for loading, saving, and resolving the
//! optional TOML configuration file. Configuration is only read when a path
//! is given explicitly, so a bare invocation always behaves the same way.
//!
//! # Example TOML Configuration
//!
//! ```toml
//! [reverse]
//! default_input = "abcd"
//!
//! [explain]
//! format = "text"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use reverser_core::DEFAULT_INPUT;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "reverser.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the reverser CLI application.
///
/// Every section and key is optional; missing values fall back to their
/// defaults.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings for the `reverse` command
    #[serde(default)]
    pub reverse: ReverseConfig,

    /// Settings for the `explain` command
    #[serde(default)]
    pub explain: ExplainConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// - `Error::Config` if the file does not exist
    /// - `Error::LoadFile` if the file cannot be read
    /// - `Error::ParseTomlFile` if the file is not valid TOML for this schema
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use reverser_cli::config::AppConfig;
    ///
    /// let config = AppConfig::load(Path::new("./reverser.toml"))?;
    /// println!("Default input: {}", config.reverse.default_input);
    /// # Ok::<(), reverser_cli::errors::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path).map_err(Error::LoadFile)?;
        let config: AppConfig = toml::from_str(&content).map_err(Error::ParseTomlFile)?;

        Ok(config)
    }

    /// Loads the file at `config_path` if one is given, otherwise returns the
    /// defaults without touching the filesystem.
    pub fn resolve(config_path: Option<&str>) -> Result<Self, Error> {
        match config_path {
            Some(path) => Self::load(Path::new(path)),
            None => Ok(Self::default()),
        }
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created when missing and an existing file at
    /// the target path is overwritten.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Renders the configuration as pretty-printed TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("Failed to serialize configuration: {}", e)))
    }
}

/// Configuration for the `reverse` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseConfig {
    /// Input reversed when none is given on the command line.
    #[serde(default = "ReverseConfig::default_input")]
    pub default_input: String,
}

impl ReverseConfig {
    fn default_input() -> String {
        DEFAULT_INPUT.to_string()
    }
}

impl Default for ReverseConfig {
    fn default() -> Self {
        Self {
            default_input: Self::default_input(),
        }
    }
}

/// Configuration for the `explain` command.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How diagnoses are rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON array of diagnoses
    Json,
}

/// Resolves the path to the configuration file.
///
/// - If `config_path` is `Some(path)`, returns that path as a `PathBuf`
/// - If `config_path` is `None`, returns `./reverser.toml` in the current directory
/// - Falls back to the current directory if unable to determine the working directory
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
