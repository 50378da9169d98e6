//! Defect types recognised in compiler and runtime output.
//!
//! Each [`Diagnosis`] pairs a recognised [`Defect`] with where it was
//! reported and a short explanation and fix suggestion.

use std::fmt;
use std::path::Path;

use serde::Serialize;

#[cfg(test)]
#[path = "defects_tests.rs"]
mod tests;

/// When a defect surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectCategory {
    /// Reported by the compiler; the program never runs.
    CompileTime,
    /// Raised while the program runs.
    Runtime,
}

impl fmt::Display for DefectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefectCategory::CompileTime => write!(f, "compile-time"),
            DefectCategory::Runtime => write!(f, "runtime"),
        }
    }
}

/// A file position taken from a diagnostic or stack frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub path: String,
    pub line: usize,
}

impl SourceLocation {
    /// Creates a location from a file path and a 1-based line number.
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    /// The file name without directory or extension, if any.
    ///
    /// `dir/ReverseString.java` yields `ReverseString`; the fix for a
    /// filename mismatch uses it as the class name the file expects.
    pub fn file_stem(&self) -> Option<&str> {
        Path::new(&self.path).file_stem().and_then(|s| s.to_str())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// A recognised defect and the details captured from the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Defect {
    /// A public class declared in a file whose name differs from the class.
    PublicClassFilenameMismatch {
        class_name: String,
        expected_file: String,
    },

    /// An identifier used without a declaration in scope.
    ///
    /// The compiler reports the lookup site either as a class, or as a
    /// variable and its type when a member is looked up through a variable.
    SymbolNotFound {
        symbol_type: String,
        symbol_name: String,
        location_class: Option<String>,
        location_variable: Option<String>,
        location_var_type: Option<String>,
    },

    /// A character access outside the bounds of a string.
    ///
    /// The index may be negative. Older runtimes report only the index, so
    /// `length` may be unknown.
    StringIndexOutOfBounds { index: i64, length: Option<usize> },
}

impl Defect {
    /// Stable name of the defect template.
    pub fn name(&self) -> &'static str {
        match self {
            Defect::PublicClassFilenameMismatch { .. } => "PublicClassFilenameMismatchError",
            Defect::SymbolNotFound { .. } => "SymbolNotFoundError",
            Defect::StringIndexOutOfBounds { .. } => "StringIndexOutOfBoundsException",
        }
    }

    pub fn category(&self) -> DefectCategory {
        match self {
            Defect::PublicClassFilenameMismatch { .. } | Defect::SymbolNotFound { .. } => {
                DefectCategory::CompileTime
            }
            Defect::StringIndexOutOfBounds { .. } => DefectCategory::Runtime,
        }
    }

    fn explanation(&self) -> String {
        match self {
            Defect::PublicClassFilenameMismatch {
                class_name,
                expected_file,
            } => format!(
                "Class `{}` is declared public, so it must be defined in a file named `{}`.",
                class_name, expected_file
            ),
            Defect::SymbolNotFound {
                symbol_type,
                symbol_name,
                location_class,
                location_variable,
                location_var_type,
            } => match (location_variable, location_var_type, location_class) {
                (Some(variable), Some(var_type), _) => format!(
                    "The {} `{}` is not defined in class `{}`, the type of variable `{}`.",
                    symbol_type, symbol_name, var_type, variable
                ),
                (_, _, Some(class)) => format!(
                    "The {} `{}` is used in class `{}` but is never declared there.",
                    symbol_type, symbol_name, class
                ),
                _ => format!(
                    "The {} `{}` is used but is never declared.",
                    symbol_type, symbol_name
                ),
            },
            Defect::StringIndexOutOfBounds { index, .. } if *index < 0 => format!(
                "The code accesses index {}, which is below 0; string indices start at 0.",
                index
            ),
            Defect::StringIndexOutOfBounds { index, length } => match length {
                Some(0) => format!(
                    "The code accesses index {} of an empty string, which has no valid indices.",
                    index
                ),
                Some(length) => format!(
                    "The code accesses index {} of a string that only has {} characters; valid indices are 0 to {}.",
                    index,
                    length,
                    length - 1
                ),
                None => format!(
                    "The code accesses index {}, which is beyond the end of the string.",
                    index
                ),
            },
        }
    }

    fn fix(&self, location: Option<&SourceLocation>) -> String {
        match self {
            Defect::PublicClassFilenameMismatch {
                class_name,
                expected_file,
            } => match location.and_then(SourceLocation::file_stem) {
                Some(stem) if stem != class_name.as_str() => format!(
                    "Rename class `{}` to `{}` to match its file, or rename the file to `{}`.",
                    class_name, stem, expected_file
                ),
                _ => format!("Rename the file to `{}`.", expected_file),
            },
            Defect::SymbolNotFound {
                symbol_name,
                location_var_type: Some(var_type),
                ..
            } => format!(
                "Call a member that `{}` actually defines, or correct the spelling of `{}`.",
                var_type, symbol_name
            ),
            Defect::SymbolNotFound { symbol_name, .. } => format!(
                "Declare `{}` before using it, or correct the spelling to an identifier that is already declared.",
                symbol_name
            ),
            Defect::StringIndexOutOfBounds { index, .. } if *index < 0 => {
                "Keep the index at or above 0: stop a reverse loop after index 0 \
                 instead of reading one position before it."
                    .to_string()
            }
            Defect::StringIndexOutOfBounds { .. } => "Keep the index below the string length: \
                 start a reverse loop at `length() - 1` and stop after index 0."
                .to_string(),
        }
    }
}

/// A defect found in compiler or runtime output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub name: &'static str,
    pub category: DefectCategory,
    pub location: Option<SourceLocation>,
    #[serde(flatten)]
    pub defect: Defect,
    pub explanation: String,
    pub fix: String,
}

impl Diagnosis {
    /// Builds a diagnosis, deriving the explanation and fix from the defect.
    pub fn new(defect: Defect, location: Option<SourceLocation>) -> Self {
        let explanation = defect.explanation();
        let fix = defect.fix(location.as_ref());
        Self {
            name: defect.name(),
            category: defect.category(),
            location,
            defect,
            explanation,
            fix,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({}) at {}", self.name, self.category, location),
            None => write!(f, "{} ({})", self.name, self.category),
        }
    }
}
