use std::io::Write;

use clap::Args;
use reverser_core::reverse;
use tracing::{debug, instrument};

use crate::config::AppConfig;
use crate::errors::Error;

#[cfg(test)]
#[path = "reverse_cmd_tests.rs"]
mod tests;

/// Arguments for the reverse command
#[derive(Args, Debug, Default, Clone)]
pub struct ReverseArgs {
    /// String to reverse; defaults to the configured input
    pub input: Option<String>,
}

/// Reverses the requested input and writes it as one line to `out`.
#[instrument(skip(config, out))]
pub fn execute(args: &ReverseArgs, config: &AppConfig, out: &mut impl Write) -> Result<(), Error> {
    let input = args
        .input
        .as_deref()
        .unwrap_or(&config.reverse.default_input);
    debug!(message = "Reversing input", chars = input.chars().count());

    writeln!(out, "{}", reverse(input)).map_err(|_| Error::StdOutFlushFailed)?;
    out.flush().map_err(|_| Error::StdOutFlushFailed)?;
    Ok(())
}
