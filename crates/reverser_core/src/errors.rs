//! Error types for string reversal and defect classification.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors produced by the reverser core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReverseError {
    /// A character position outside `[0, length - 1]` was requested.
    ///
    /// This is the recoverable form of the out-of-range access that a loop
    /// starting at `length` instead of `length - 1` runs into.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// A defect recognition pattern failed to compile.
    #[error("Invalid defect pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Result type alias for reverser core operations.
pub type ReverseResult<T> = Result<T, ReverseError>;
