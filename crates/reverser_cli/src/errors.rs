use std::io;

use reverser_core::ReverseError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the reverser CLI application.
///
/// This enum represents all possible error conditions that can arise during
/// CLI operations, including configuration issues, bad input, and I/O
/// problems.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error occurred while loading or saving configuration.
    ///
    /// This error is returned when the configuration file is missing, already
    /// exists when it should not, or cannot be written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line arguments or input were provided.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Failed to load a file from the filesystem.
    ///
    /// This error wraps underlying I/O errors that occur when reading files,
    /// such as permission issues or missing files.
    #[error("Failed to load file.")]
    LoadFile(io::Error),

    /// Failed to parse a TOML configuration file.
    #[error("Failed to parse TOML configuration file.")]
    ParseTomlFile(toml::de::Error),

    /// Failed to serialize output or configuration.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Failed to write to or flush the standard output buffer.
    ///
    /// This error occurs when the CLI cannot write output to the terminal,
    /// typically due to broken pipes or terminal issues.
    #[error("Failed to flush the std out buffer.")]
    StdOutFlushFailed,

    /// An error raised by the reverser core library.
    #[error(transparent)]
    Core(#[from] ReverseError),
}
