use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Args;
use colored::Colorize;
use reverser_core::{DefectClassifier, Diagnosis};
use tracing::{debug, info, instrument};

use crate::config::{AppConfig, OutputFormat};
use crate::errors::Error;

#[cfg(test)]
#[path = "explain_cmd_tests.rs"]
mod tests;

/// Arguments for the explain command
#[derive(Args, Debug, Default, Clone)]
pub struct ExplainArgs {
    /// File holding compiler or runtime output; reads stdin when omitted
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format; defaults to the configured format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Explains the defects found in the captured output.
///
/// Reads from `args.file` when set, otherwise from `input`. Returns the
/// number of recognised defects.
#[instrument(skip(config, input, out))]
pub fn execute(
    args: &ExplainArgs,
    config: &AppConfig,
    input: impl Read,
    out: &mut impl Write,
) -> Result<usize, Error> {
    let text = read_output(args.file.as_deref(), input)?;
    let diagnoses = DefectClassifier::new()?.classify(&text);
    info!(message = "Classified output", defects = diagnoses.len());

    match args.format.unwrap_or(config.explain.format) {
        OutputFormat::Text => render_text(&diagnoses, out)?,
        OutputFormat::Json => render_json(&diagnoses, out)?,
    }
    out.flush().map_err(|_| Error::StdOutFlushFailed)?;

    Ok(diagnoses.len())
}

fn read_output(file: Option<&Path>, mut input: impl Read) -> Result<String, Error> {
    let text = match file {
        Some(path) => {
            debug!(message = "Reading output from file", path = ?path);
            fs::read_to_string(path).map_err(Error::LoadFile)?
        }
        None => {
            let mut buffer = String::new();
            input.read_to_string(&mut buffer).map_err(Error::LoadFile)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(Error::InvalidArguments(
            "no compiler or runtime output to explain".to_string(),
        ));
    }
    Ok(text)
}

fn render_text(diagnoses: &[Diagnosis], out: &mut impl Write) -> Result<(), Error> {
    if diagnoses.is_empty() {
        writeln!(out, "No known defects found.").map_err(|_| Error::StdOutFlushFailed)?;
        return Ok(());
    }

    for (i, diagnosis) in diagnoses.iter().enumerate() {
        if i > 0 {
            writeln!(out).map_err(|_| Error::StdOutFlushFailed)?;
        }
        write_diagnosis(diagnosis, out).map_err(|_| Error::StdOutFlushFailed)?;
    }
    Ok(())
}

fn write_diagnosis(diagnosis: &Diagnosis, out: &mut impl Write) -> io::Result<()> {
    let location = diagnosis
        .location
        .as_ref()
        .map(|l| format!(" at {}", l))
        .unwrap_or_default();

    writeln!(
        out,
        "{} ({}){}",
        diagnosis.name.red().bold(),
        diagnosis.category,
        location
    )?;
    writeln!(out, "  {}", diagnosis.explanation)?;
    writeln!(out, "  {} {}", "Fix:".green(), diagnosis.fix)
}

fn render_json(diagnoses: &[Diagnosis], out: &mut impl Write) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(diagnoses)
        .map_err(|e| Error::Serialization(format!("Failed to serialize diagnoses: {}", e)))?;
    writeln!(out, "{}", json).map_err(|_| Error::StdOutFlushFailed)
}
