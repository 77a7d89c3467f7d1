//! Errors surfaced at the command line boundary.

use cite::error::CiteError;
use thiserror::Error;

/// Error type alias used for the `cite` binary.
pub type Result<T> = core::result::Result<T, CliError>;

/// Failures reported to the user once per invocation.
#[derive(Error, Debug)]
pub enum CliError {
  /// Loading a document or configuration failed.
  #[error(transparent)]
  Cite(#[from] CiteError),

  /// The requested style is not registered.
  #[error("Unknown style '{style}'. Supported styles: {supported}")]
  UnknownStyle {
    /// Style identifier as given
    style:     String,
    /// Comma separated list of registered styles
    supported: String,
  },

  /// Writing output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
