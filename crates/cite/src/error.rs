//! Error types for the cite library.
//!
//! Rendering a citation cannot fail: every missing or malformed field degrades
//! to shorter output. Errors only arise at the edges of the engine:
//! - Resolving a style identifier that is not registered
//! - Loading a document that has no records
//! - Reading or writing files
//! - Parsing configuration
//!
//! # Examples
//!
//! ```
//! use cite::{error::CiteError, style::StyleRegistry};
//!
//! let registry = StyleRegistry::default();
//! match registry.resolve("apa") {
//!   Err(CiteError::UnknownStyle(name)) => println!("No style named {name}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(style) => println!("Using {}", style.name()),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`cite`](crate) crate.
pub type Result<T> = core::result::Result<T, CiteError>;

/// Errors that can occur outside of the formatting core.
#[derive(Error, Debug)]
pub enum CiteError {
  /// The requested citation style is not registered.
  ///
  /// This is a configuration problem reported once per invocation, not a
  /// per-record failure. The string holds the identifier that was requested.
  #[error("Unknown style '{0}'")]
  UnknownStyle(String),

  /// The document holds neither a top-level array nor a `records` array.
  #[error("Could not find any BibJSON records")]
  NoRecords,

  /// The document or configuration was not valid JSON.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - The document file does not exist or cannot be read
  /// - The configuration directory cannot be created
  /// - Permission errors occur
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// Any other configuration problem.
  #[error("{0}")]
  Config(String),
}
