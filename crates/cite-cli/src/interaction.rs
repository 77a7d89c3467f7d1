//! How commands report results and status to the user.

use std::io::Write;

use console::style;

use super::*;

/// Marker for informational messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Marker for completed work
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Marker for failures
pub static ERROR_PREFIX: &str = "✗ ";

/// Everything a command may want to tell the user.
///
/// Rendered citations go to stdout untouched so they can be piped; status
/// messages go to stderr.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A fully rendered citation document
  Citations(&'a str),
  /// Registered style identifiers
  Styles(&'a [&'a str]),
  /// Work finished, e.g. an output file was written
  Success(&'a str),
  /// Something worth knowing that is not a failure
  Info(&'a str),
  /// The command failed
  Error(&'a CliError),
}

/// Output channel for commands, so they can be driven by tests as well as a terminal.
pub trait UserInteraction {
  /// Delivers one response to the user.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Interaction through the process's standard streams.
pub struct Terminal;

impl UserInteraction for Terminal {
  fn reply(&self, content: ResponseContent) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    match content {
      ResponseContent::Citations(text) => write!(stdout, "{text}")?,
      ResponseContent::Styles(names) =>
        for name in names {
          writeln!(stdout, "{name}")?;
        },
      ResponseContent::Success(message) =>
        writeln!(stderr, "{}{}", style(SUCCESS_PREFIX).green(), message)?,
      ResponseContent::Info(message) =>
        writeln!(stderr, "{}{}", style(INFO_PREFIX).blue(), message)?,
      ResponseContent::Error(error) =>
        writeln!(stderr, "{}{}", style(ERROR_PREFIX).red(), style(error).red())?,
    }
    Ok(())
  }
}
