//! Command line interface for the `cite` bibliography renderer.
//!
//! Reads BibJSON documents and prints their bibliography and footnotes in a
//! chosen citation style:
//!
//! ```bash
//! # Print to the terminal using the configured default style
//! cite export my_papers.json
//!
//! # Write Chicago citations as Markdown or HTML
//! cite export my_papers.json chicago bibliography.md
//! cite export my_papers.json chicago bibliography.html
//!
//! # List the registered styles
//! cite styles
//! ```
//!
//! Logging goes to stderr and is controlled with `-v` (repeatable) or
//! `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use cite::{config::Config, style::StyleRegistry};
use clap::{builder::ArgAction, Parser};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Render bibliographies and footnotes from BibJSON records")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the platform-specific config
  /// directory.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level.
///
/// `RUST_LOG` takes precedence. Otherwise:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Loads configuration and dispatches the parsed command.
#[instrument(skip_all)]
fn run<I: UserInteraction>(interaction: &I, cli: Cli) -> Result<()> {
  let config_path = cli.config.unwrap_or_else(Config::default_path);
  debug!(path = %config_path.display(), "Using configuration");
  let config = Config::load(&config_path)?;
  let registry = StyleRegistry::default();

  match cli.command {
    Commands::Export(options) => export(interaction, &config, &registry, options),
    Commands::Styles => styles(interaction, &registry),
  }
}

/// Entry point. Errors are reported once on stderr and turn into a failing exit code.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(&Terminal, cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      // Nothing more can be reported if stderr itself is gone
      let _ = Terminal.reply(ResponseContent::Error(&error));
      ExitCode::FAILURE
    },
  }
}
