//! Subcommands of the `cite` binary, one module each.

use clap::{Args, Subcommand};

use super::*;

pub mod export;
pub mod styles;

pub use export::{export, ExportOptions};
pub use styles::styles;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Generate a formatted bibliography and footnotes from a BibJSON file
  Export(ExportOptions),

  /// List the available citation styles
  Styles,
}
