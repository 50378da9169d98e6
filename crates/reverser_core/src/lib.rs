//! Core library for the reverser.
//!
//! Provides character-wise string reversal with bounds-checked positional
//! access, and a classifier that recognises the defects of a broken
//! string-reversal program in compiler and runtime output.

pub mod classifier;
pub mod defects;
pub mod errors;
pub mod sequence;

pub use classifier::DefectClassifier;
pub use defects::{Defect, DefectCategory, Diagnosis, SourceLocation};
pub use errors::{ReverseError, ReverseResult};
pub use sequence::{reverse, CharSequence};

/// Input reversed when no other input is given.
pub const DEFAULT_INPUT: &str = "abcd";
