//! Loading BibJSON documents.
//!
//! A document is either a bare JSON array of records or an object carrying
//! its records under a `records` key, as BibJSON collections do:
//!
//! ```json
//! {
//!   "metadata": { "collection": "thesis" },
//!   "records": [
//!     { "type": "book", "title": "Dune", "author": ["Frank Herbert"] }
//!   ]
//! }
//! ```

use super::*;

/// The records of a loaded BibJSON document, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
  records: Vec<Record>,
}

impl Document {
  /// Wraps already decoded records.
  pub fn new(records: Vec<Record>) -> Self { Self { records } }

  /// Parses a document from JSON text.
  ///
  /// Fails with [`CiteError::Json`] for invalid JSON and [`CiteError::NoRecords`]
  /// when the JSON holds no record list. Individual records never fail to
  /// decode.
  ///
  /// # Examples
  ///
  /// ```
  /// use cite::{document::Document, error::CiteError};
  ///
  /// let document = Document::parse(r#"{ "records": [{ "title": "Dune" }] }"#).unwrap();
  /// assert_eq!(document.records()[0].title(), "Dune");
  ///
  /// assert!(matches!(Document::parse(r#"{ "title": "Dune" }"#), Err(CiteError::NoRecords)));
  /// ```
  pub fn parse(text: &str) -> Result<Self> {
    let root: Value = serde_json::from_str(text)?;
    Self::from_value(&root)
  }

  /// Extracts the record list from a parsed JSON root.
  pub fn from_value(root: &Value) -> Result<Self> {
    let entries = match root {
      Value::Array(entries) => entries,
      Value::Object(object) => match object.get("records") {
        Some(Value::Array(entries)) => entries,
        _ => return Err(CiteError::NoRecords),
      },
      _ => return Err(CiteError::NoRecords),
    };
    let records: Vec<Record> = entries.iter().map(Record::from_value).collect();
    debug!(records = records.len(), "Loaded BibJSON records");
    Ok(Self { records })
  }

  /// Reads and parses a document from disk.
  #[instrument(skip_all, fields(path = %path.as_ref().display()))]
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let text = std::fs::read_to_string(path.as_ref())?;
    Self::parse(&text)
  }

  /// The decoded records.
  pub fn records(&self) -> &[Record] { &self.records }

  /// Consumes the document, returning its records.
  pub fn into_records(self) -> Vec<Record> { self.records }

  /// Number of records.
  pub fn len(&self) -> usize { self.records.len() }

  /// Whether the document holds no records.
  pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
