use std::io::Write;

use clap::{Subcommand, ValueEnum};
use tracing::{debug, error, info, instrument};

use crate::config::{get_config_path, AppConfig, OutputFormat};
use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Create initial configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Check configuration syntax
    Validate {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show current configuration
    Get {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Configuration key to get (e.g., "reverse.default_input")
        key: Option<String>,
    },

    /// Update configuration values
    Set {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Configuration key to set (e.g., "explain.format")
        key: String,

        /// Value to set
        value: String,
    },
}

/// Execute the config command
#[instrument(skip(out))]
pub fn execute(cmd: &ConfigCommands, out: &mut impl Write) -> Result<(), Error> {
    match cmd {
        ConfigCommands::Init { path } => init_config(path.as_deref(), out),
        ConfigCommands::Validate { path } => validate_config(path.as_deref(), out),
        ConfigCommands::Get { path, key } => get_config(path.as_deref(), key.as_deref(), out),
        ConfigCommands::Set { path, key, value } => {
            set_config(path.as_deref(), key, value, out)
        }
    }
}

/// Initialize a new configuration file
fn init_config(path: Option<&str>, out: &mut impl Write) -> Result<(), Error> {
    let config_path = get_config_path(path);
    debug!(message = "Initializing configuration", path = ?config_path);

    if config_path.exists() {
        let err = Error::Config(format!(
            "Configuration file already exists at {:?}",
            config_path
        ));
        error!(
            message = "Configuration file already exists",
            path = ?config_path,
            error = ?err
        );
        return Err(err);
    }

    AppConfig::default().save(&config_path)?;

    info!(message = "Configuration initialized", path = ?config_path);
    writeln!(out, "Configuration initialized at {:?}", config_path)
        .map_err(|_| Error::StdOutFlushFailed)
}

/// Validate a configuration file
fn validate_config(path: Option<&str>, out: &mut impl Write) -> Result<(), Error> {
    let config_path = get_config_path(path);
    debug!(message = "Validating configuration", path = ?config_path);

    match AppConfig::load(&config_path) {
        Ok(_) => {
            info!(message = "Configuration is valid", path = ?config_path);
            writeln!(out, "Configuration is valid").map_err(|_| Error::StdOutFlushFailed)
        }
        Err(e) => {
            error!(
                message = "Configuration is invalid",
                path = ?config_path,
                error = ?e
            );
            Err(Error::Config("The configuration is invalid".to_string()))
        }
    }
}

/// Get a configuration value, or the whole configuration when no key is given
fn get_config(path: Option<&str>, key: Option<&str>, out: &mut impl Write) -> Result<(), Error> {
    let config_path = get_config_path(path);
    debug!(message = "Getting configuration", path = ?config_path, key = ?key);

    let config = AppConfig::load(&config_path)?;

    let written = match key {
        Some(key) => {
            let value = get_config_value(&config, key)?;
            writeln!(out, "{}: {}", key, value)
        }
        None => write!(out, "{}", config.to_toml()?),
    };
    written.map_err(|_| Error::StdOutFlushFailed)
}

/// Set a configuration value, creating the file if it does not exist yet
fn set_config(
    path: Option<&str>,
    key: &str,
    value: &str,
    out: &mut impl Write,
) -> Result<(), Error> {
    let config_path = get_config_path(path);
    debug!(
        message = "Setting configuration",
        path = ?config_path,
        key = key,
        value = value
    );

    let mut config = if config_path.exists() {
        AppConfig::load(&config_path)?
    } else {
        AppConfig::default()
    };

    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    info!(message = "Configuration updated", key = key, value = value);
    writeln!(out, "Configuration updated: {} = {}", key, value)
        .map_err(|_| Error::StdOutFlushFailed)
}

/// Get a value from the configuration by key path
fn get_config_value(config: &AppConfig, key: &str) -> Result<String, Error> {
    match key {
        "reverse.default_input" => Ok(config.reverse.default_input.clone()),
        "explain.format" => Ok(format_name(config.explain.format)),
        _ => Err(Error::InvalidArguments(format!(
            "Invalid configuration key: {}",
            key
        ))),
    }
}

/// Set a value in the configuration by key path
fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), Error> {
    match key {
        "reverse.default_input" => {
            config.reverse.default_input = value.to_string();
            Ok(())
        }
        "explain.format" => {
            config.explain.format = OutputFormat::from_str(value, true).map_err(|_| {
                Error::InvalidArguments(format!(
                    "Invalid value for explain.format: {} (expected text or json)",
                    value
                ))
            })?;
            Ok(())
        }
        _ => Err(Error::InvalidArguments(format!(
            "Invalid configuration key: {}",
            key
        ))),
    }
}

fn format_name(format: OutputFormat) -> String {
    format
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}
