//! Recognition of defects in compiler and runtime output.
//!
//! The classifier knows a fixed set of templates: a public class declared in
//! a mismatched file, a reference to an undeclared symbol, and an
//! out-of-bounds string index. It scans captured `javac` / `java` output and
//! returns one [`Diagnosis`] per recognised defect.

use std::str::FromStr;

use regex::{Captures, Regex};
use tracing::{debug, instrument};

use crate::defects::{Defect, Diagnosis, SourceLocation};
use crate::{ReverseError, ReverseResult};

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;

const FILENAME_MISMATCH_PATTERN: &str = r"(?m)^(?P<path>\S+?):(?P<line>\d+): error: class (?P<class_name>\S+) is public, should be declared in a file named (?P<expected_file>\S+\.java)";

const SYMBOL_NOT_FOUND_PATTERN: &str = r"(?m)^(?P<path>\S+?):(?P<line>\d+): error: cannot find symbol[^\n]*\n(?:[^\n]*\n){0,3}?[ \t]*symbol:[ \t]+(?P<symbol_type>variable|method|class)[ \t]+(?P<symbol_name>[^\s(]+)[^\n]*(?:\n[ \t]*location:[ \t]+(?:class[ \t]+(?P<location_class>\S+)|variable[ \t]+(?P<location_variable>\S+)[ \t]+of type[ \t]+(?P<location_var_type>\S+)))?";

const STRING_INDEX_PATTERN: &str = r"java\.lang\.StringIndexOutOfBoundsException: (?:String index out of range: (?P<range_index>-?\d+)|[Ii]ndex (?P<pair_index>-?\d+), length (?P<pair_length>\d+)|[Ii]ndex (?P<bounds_index>-?\d+) out of bounds for length (?P<bounds_length>\d+))";

const STACK_FRAME_PATTERN: &str = r"^\s*at (?P<symbol>\S+)\((?P<path>[^:()]+):(?P<line>\d+)\)";

/// Scans output text for the known defect templates.
#[derive(Debug, Clone)]
pub struct DefectClassifier {
    filename_mismatch: Regex,
    symbol_not_found: Regex,
    string_index: Regex,
    stack_frame: Regex,
}

impl DefectClassifier {
    /// Compiles the recognition patterns.
    ///
    /// # Errors
    ///
    /// Returns `ReverseError::InvalidPattern` if a pattern fails to compile.
    pub fn new() -> ReverseResult<Self> {
        Ok(Self {
            filename_mismatch: compile(FILENAME_MISMATCH_PATTERN)?,
            symbol_not_found: compile(SYMBOL_NOT_FOUND_PATTERN)?,
            string_index: compile(STRING_INDEX_PATTERN)?,
            stack_frame: compile(STACK_FRAME_PATTERN)?,
        })
    }

    /// Returns every recognised defect in the order it appears in `output`.
    ///
    /// Text that matches no template is ignored, so unrelated output yields
    /// an empty list.
    #[instrument(skip(self, output), fields(output_len = output.len()))]
    pub fn classify(&self, output: &str) -> Vec<Diagnosis> {
        let mut found: Vec<(usize, Diagnosis)> = Vec::new();

        for caps in self.filename_mismatch.captures_iter(output) {
            let defect = Defect::PublicClassFilenameMismatch {
                class_name: caps["class_name"].to_string(),
                expected_file: caps["expected_file"].to_string(),
            };
            found.push((offset(&caps), Diagnosis::new(defect, location(&caps))));
        }

        for caps in self.symbol_not_found.captures_iter(output) {
            let defect = Defect::SymbolNotFound {
                symbol_type: caps["symbol_type"].to_string(),
                symbol_name: caps["symbol_name"].to_string(),
                location_class: optional(&caps, "location_class"),
                location_variable: optional(&caps, "location_variable"),
                location_var_type: optional(&caps, "location_var_type"),
            };
            found.push((offset(&caps), Diagnosis::new(defect, location(&caps))));
        }

        for caps in self.string_index.captures_iter(output) {
            let Some(defect) = string_index_defect(&caps) else {
                debug!(
                    message = "Skipping index report with unparseable numbers",
                    text = &caps[0]
                );
                continue;
            };
            let end = caps.get(0).map_or(0, |m| m.end());
            let location = self.first_user_frame(&output[end..]);
            found.push((offset(&caps), Diagnosis::new(defect, location)));
        }

        found.sort_by_key(|(position, _)| *position);
        let diagnoses: Vec<Diagnosis> = found.into_iter().map(|(_, d)| d).collect();

        for diagnosis in &diagnoses {
            debug!(message = "Recognised defect", defect = %diagnosis);
        }
        diagnoses
    }

    /// Location of the first stack frame outside the runtime library.
    ///
    /// Only the frames directly following the exception line are considered.
    fn first_user_frame(&self, trace: &str) -> Option<SourceLocation> {
        trace
            .lines()
            .skip(1)
            .map_while(|line| self.stack_frame.captures(line))
            .find(|caps| !is_runtime_frame(&caps["symbol"]))
            .and_then(|caps| location(&caps))
    }
}

fn compile(pattern: &str) -> ReverseResult<Regex> {
    Regex::new(pattern).map_err(|e| ReverseError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

fn offset(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(0, |m| m.start())
}

fn location(caps: &Captures<'_>) -> Option<SourceLocation> {
    let path = caps.name("path")?.as_str();
    let line = caps.name("line")?.as_str().parse().ok()?;
    Some(SourceLocation::new(path, line))
}

fn optional(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_string())
}

/// Parses an optional numeric capture; the outer `None` means the digits did
/// not fit the target type.
fn number<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<Option<T>> {
    match caps.name(name) {
        Some(m) => m.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

fn string_index_defect(caps: &Captures<'_>) -> Option<Defect> {
    let index = number::<i64>(caps, "range_index")?
        .or(number(caps, "pair_index")?)
        .or(number(caps, "bounds_index")?)?;
    let length = number::<usize>(caps, "pair_length")?.or(number(caps, "bounds_length")?);

    Some(Defect::StringIndexOutOfBounds { index, length })
}

/// Frames from the runtime library: a `java.*`/`jdk.*` module prefix such as
/// `java.base/`, or an unqualified runtime package on older JDKs.
///
/// Class loader and user module prefixes (`app//`, `mymod/`) do not count.
fn is_runtime_frame(symbol: &str) -> bool {
    let (prefix, qualified) = symbol.rsplit_once('/').unwrap_or(("", symbol));

    let runtime_module = prefix
        .split('/')
        .any(|segment| segment.starts_with("java.") || segment.starts_with("jdk."));

    runtime_module
        || ["java.", "javax.", "jdk.", "sun."]
            .iter()
            .any(|package| qualified.starts_with(package))
}
