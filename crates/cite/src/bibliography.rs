//! Assembling a sorted bibliography with its footnotes.
//!
//! Records are ordered by the family name of their first contributor (authors
//! before editors, "Unknown" when neither yields a name) using plain string
//! comparison. The sort is stable, so records sharing a key keep their input
//! order. Each record then renders independently into a [`Citation`].

use super::*;
use crate::style::Chicago;

/// The three renderings of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
  /// Entry for the reference list
  pub bibliography:   String,
  /// First-use footnote
  pub long_footnote:  String,
  /// Subsequent-use footnote
  pub short_footnote: String,
}

impl Citation {
  /// Renders one record in `style`.
  pub fn new(style: &dyn CitationStyle, record: &Record) -> Self {
    Self {
      bibliography:   style.bibliography(record),
      long_footnote:  style.long_footnote(record),
      short_footnote: style.short_footnote(record),
    }
  }
}

/// Entry point for turning a collection of records into citations.
pub struct Bibliography;

impl Bibliography {
  /// Records in bibliography order.
  pub fn sorted(records: &[Record]) -> Vec<&Record> {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    sorted
  }

  /// Sorts `records` and renders one [`Citation`] per record in `style`.
  ///
  /// No record is ever dropped: the output has exactly as many citations as
  /// there are records.
  ///
  /// # Examples
  ///
  /// ```
  /// use cite::{prelude::*, Bibliography};
  /// use serde_json::json;
  ///
  /// let records: Vec<Record> = ["Zeno", "Adams", "Midas"]
  ///   .iter()
  ///   .map(|family| Record::from_value(&json!({ "author": [{ "given": "A.", "family": family }] })))
  ///   .collect();
  ///
  /// let registry = StyleRegistry::default();
  /// let citations = Bibliography::assemble(registry.resolve("chicago")?, &records);
  /// let order: Vec<&str> = citations.iter().map(|c| c.short_footnote.as_str()).collect();
  /// assert_eq!(order, [
  ///   "Adams, <i>Untitled</i> [pg].",
  ///   "Midas, <i>Untitled</i> [pg].",
  ///   "Zeno, <i>Untitled</i> [pg]."
  /// ]);
  /// # Ok::<(), CiteError>(())
  /// ```
  #[instrument(skip_all, fields(style = style.name(), records = records.len()))]
  pub fn assemble(style: &dyn CitationStyle, records: &[Record]) -> Vec<Citation> {
    let citations: Vec<Citation> =
      Self::sorted(records).into_iter().map(|record| Citation::new(style, record)).collect();
    debug!(citations = citations.len(), "Assembled bibliography");
    citations
  }
}

/// Assembles `records` in Chicago style.
pub fn assemble(records: &[Record]) -> Vec<Citation> { Bibliography::assemble(&Chicago, records) }
