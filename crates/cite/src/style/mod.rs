//! Citation styles and the registry that resolves them by name.
//!
//! A style is anything implementing [`CitationStyle`]: given a [`Record`] it
//! can produce a bibliography entry, a long footnote and a short footnote.
//! Styles that only know a single-line form implement
//! [`CitationStyle::bibliography`] and inherit the footnote fallbacks.
//!
//! # Examples
//!
//! Adding a style alongside the bundled ones:
//!
//! ```
//! use cite::{prelude::*, style::StyleRegistry};
//!
//! struct TitleOnly;
//!
//! impl CitationStyle for TitleOnly {
//!   fn name(&self) -> &str { "title-only" }
//!
//!   fn bibliography(&self, record: &Record) -> String { record.title().to_string() }
//! }
//!
//! let registry = StyleRegistry::default().with_style(TitleOnly);
//! assert_eq!(registry.names(), vec!["chicago", "mla", "title-only"]);
//! assert!(registry.get("apa").is_none());
//! ```

use super::*;

mod chicago;
mod mla;

pub use chicago::Chicago;
pub use mla::Mla;

/// The capability set every citation style provides.
///
/// Implementations are pure: the same record always renders to the same text
/// and no call has side effects, so styles can be shared across threads.
pub trait CitationStyle: Send + Sync {
  /// Identifier the style is registered under, e.g. "chicago".
  fn name(&self) -> &str;

  /// The entry for a sorted reference list.
  fn bibliography(&self, record: &Record) -> String;

  /// The full citation used the first time a work is cited.
  ///
  /// Defaults to the bibliography entry.
  fn long_footnote(&self, record: &Record) -> String { self.bibliography(record) }

  /// The abbreviated citation used for later references.
  ///
  /// Defaults to the bibliography entry.
  fn short_footnote(&self, record: &Record) -> String { self.bibliography(record) }

  /// Whether the footnote forms are real renderings rather than fallbacks.
  fn supports_footnotes(&self) -> bool { false }
}

/// Maps style identifiers to style implementations.
///
/// The default registry holds [`Chicago`] and the [`Mla`] stub.
pub struct StyleRegistry {
  styles: BTreeMap<String, Box<dyn CitationStyle>>,
}

impl StyleRegistry {
  /// Creates a registry with no styles.
  pub fn empty() -> Self { Self { styles: BTreeMap::new() } }

  /// Adds a style, replacing any registered under the same name.
  pub fn register(&mut self, style: impl CitationStyle + 'static) {
    debug!(style = style.name(), "Registering citation style");
    self.styles.insert(style.name().to_string(), Box::new(style));
  }

  /// Builder form of [`StyleRegistry::register`].
  pub fn with_style(mut self, style: impl CitationStyle + 'static) -> Self {
    self.register(style);
    self
  }

  /// Looks up a style by its exact identifier.
  pub fn get(&self, name: &str) -> Option<&dyn CitationStyle> {
    self.styles.get(name).map(|style| &**style)
  }

  /// Looks up a style, reporting an unregistered identifier as
  /// [`CiteError::UnknownStyle`].
  pub fn resolve(&self, name: &str) -> Result<&dyn CitationStyle> {
    self.get(name).ok_or_else(|| {
      warn!(style = name, "Requested citation style is not registered");
      CiteError::UnknownStyle(name.to_string())
    })
  }

  /// Registered identifiers in sorted order.
  pub fn names(&self) -> Vec<&str> { self.styles.keys().map(String::as_str).collect() }
}

impl Default for StyleRegistry {
  fn default() -> Self { Self::empty().with_style(Chicago).with_style(Mla) }
}

impl std::fmt::Debug for StyleRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StyleRegistry").field("styles", &self.names()).finish()
  }
}
