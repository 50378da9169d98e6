use std::io::{self, Write};

use clap::{Parser, Subcommand};

mod commands;
mod config;

mod errors;
use commands::{config_cmd::ConfigCommands, explain_cmd::ExplainArgs, reverse_cmd::ReverseArgs};
use config::AppConfig;
use errors::Error;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Reverser CLI: reverse strings and explain the defects of a broken reversal program
#[derive(Parser, Debug)]
#[command(name = "reverser")]
#[command(
    about = "Reverse strings and explain the defects of a broken reversal program",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Defaults to `reverse` with the default input
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reverse a string and print it
    Reverse(ReverseArgs),

    /// Explain known defects found in compiler or runtime output
    Explain(ExplainArgs),

    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

/// Runs the parsed command and returns the process exit code.
fn run(cli: Cli) -> Result<i32, Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Reverse(ReverseArgs::default())) {
        Commands::Reverse(args) => {
            let config = AppConfig::resolve(cli.config.as_deref())?;
            commands::reverse_cmd::execute(&args, &config, &mut out)?;
            Ok(0)
        }
        Commands::Explain(args) => {
            let config = AppConfig::resolve(cli.config.as_deref())?;
            let found = commands::explain_cmd::execute(&args, &config, io::stdin().lock(), &mut out)?;
            Ok(if found > 0 { 0 } else { 1 })
        }
        Commands::Config(cmd) => {
            commands::config_cmd::execute(&cmd, &mut out)?;
            Ok(0)
        }
        Commands::Version => {
            writeln!(
                out,
                "reverser version {}",
                option_env!("REVERSER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
            )
            .map_err(|_| Error::StdOutFlushFailed)?;
            Ok(0)
        }
    }
}

fn main() {
    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_env("REVERSER_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("Error: {e}");
            1
        }
    };
    std::process::exit(code);
}
