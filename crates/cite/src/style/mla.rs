//! A minimal MLA style that only knows the single-line form.

use super::*;

/// MLA placeholder. Renders a single tagged line per record and relies on the
/// trait fallbacks for footnotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mla;

impl CitationStyle for Mla {
  fn name(&self) -> &str { "mla" }

  fn bibliography(&self, record: &Record) -> String {
    format!("[MLA] {}", record.title.as_deref().unwrap_or("Unknown Title"))
  }
}
