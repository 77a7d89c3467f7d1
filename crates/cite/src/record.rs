//! The bibliographic record consumed by every citation style.
//!
//! Records come from BibJSON documents assembled by hand or by catalog
//! lookups, so the decoder here is deliberately forgiving: any JSON value turns
//! into a [`Record`], with unusable fields treated as absent. Numbers are
//! accepted wherever text is expected since volumes and years often arrive
//! numeric.
//!
//! # Examples
//!
//! ```
//! use cite::record::{Contributors, Record};
//! use serde_json::json;
//!
//! let record = Record::from_value(&json!({
//!   "type": "article",
//!   "title": "On Computable Numbers",
//!   "author": ["Alan Turing"],
//!   "year": 1936,
//!   "journal": { "name": "Proceedings of the London Mathematical Society", "volume": 42 }
//! }));
//!
//! assert!(record.is_article());
//! assert_eq!(record.year.as_deref(), Some("1936"));
//! assert!(matches!(record.contributors(), Contributors::Authors(people) if people.len() == 1));
//! assert_eq!(record.sort_key(), "Turing");
//! ```

use super::*;

/// Title used when a record has none.
pub const UNTITLED: &str = "Untitled";

/// Sort key and short-form name used when no contributor has a family name.
pub const UNKNOWN: &str = "Unknown";

/// One bibliographic entry.
///
/// Records are immutable inputs: styles only read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
  /// Entry type such as "article", "paper" or "book"
  pub kind:       Option<String>,
  /// Title as supplied, see [`Record::title`] for the defaulted form
  pub title:      Option<String>,
  /// Authors in citation order
  pub author:     Vec<Person>,
  /// Editors in citation order, used only without authors
  pub editor:     Vec<Person>,
  /// Year of publication
  pub year:       Option<String>,
  /// Containing journal for articles
  pub journal:    Option<Journal>,
  /// Publisher. `Some` whenever the record names the key, even with no usable value
  pub publisher:  Option<String>,
  /// Place of publication
  pub place:      Option<String>,
  /// Typed identifiers such as DOIs or ISBNs
  pub identifier: Vec<Identifier>,
  /// Web location, used when no DOI is known
  pub url:        Option<String>,
}

/// Journal details for an article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
  /// Journal title
  pub name:   Option<String>,
  /// Volume
  pub volume: Option<String>,
  /// Issue number
  pub number: Option<String>,
  /// Page range
  pub pages:  Option<String>,
}

/// A typed identifier attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifier {
  /// Identifier scheme, e.g. "doi" or "isbn"
  pub kind: String,
  /// Identifier value within its scheme
  pub id:   String,
}

/// The people a record is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contributors<'a> {
  /// The record has authors
  Authors(&'a [Person]),
  /// No authors, but editors
  Editors(&'a [Person]),
  /// Neither authors nor editors
  Anonymous,
}

impl<'a> Contributors<'a> {
  /// The first attributed person, if any.
  pub fn first(&self) -> Option<&'a Person> {
    match *self {
      Contributors::Authors(people) | Contributors::Editors(people) => people.first(),
      Contributors::Anonymous => None,
    }
  }
}

impl Record {
  /// Decodes a record from any JSON value without failing.
  pub fn from_value(value: &Value) -> Self {
    if !value.is_object() {
      debug!(?value, "Record is not a JSON object, treating as empty");
    }

    let record = Self {
      kind:       value.get("type").and_then(lenient_text),
      title:      value.get("title").and_then(lenient_text),
      author:     people(value.get("author")),
      editor:     people(value.get("editor")),
      year:       non_empty_text(value, "year"),
      journal:    value.get("journal").filter(|journal| journal.is_object()).map(|journal| {
        Journal {
          name:   non_empty_text(journal, "name"),
          volume: non_empty_text(journal, "volume"),
          number: non_empty_text(journal, "number"),
          pages:  non_empty_text(journal, "pages"),
        }
      }),
      publisher:  value
        .get("publisher")
        .map(|publisher| lenient_text(publisher).unwrap_or_default()),
      place:      non_empty_text(value, "place"),
      identifier: identifiers(value.get("identifier")),
      url:        non_empty_text(value, "url"),
    };
    trace!(?record, "Decoded record");
    record
  }

  /// The record title, or "Untitled" when none was given.
  pub fn title(&self) -> &str { self.title.as_deref().unwrap_or(UNTITLED) }

  /// Articles and papers get quoted titles, everything else is italicized.
  pub fn is_article(&self) -> bool { matches!(self.kind.as_deref(), Some("article" | "paper")) }

  /// The contributor list used for attribution. Authors take priority over editors.
  pub fn contributors(&self) -> Contributors<'_> {
    if !self.author.is_empty() {
      Contributors::Authors(&self.author)
    } else if !self.editor.is_empty() {
      Contributors::Editors(&self.editor)
    } else {
      Contributors::Anonymous
    }
  }

  /// Family name of the first contributor, or "Unknown".
  pub fn sort_key(&self) -> &str {
    self
      .contributors()
      .first()
      .filter(|person| !person.is_unnamed())
      .map_or(UNKNOWN, |person| person.family.as_str())
  }

  /// The first DOI identifier. The scan stops at the first match even when its
  /// value is empty.
  pub fn doi(&self) -> Option<&str> {
    self.identifier.iter().find(|identifier| identifier.kind == "doi").map(|doi| doi.id.as_str())
  }

  /// A resolvable link for the record: the DOI resolver when a DOI entry exists,
  /// otherwise the record's URL.
  pub fn link(&self) -> Option<String> {
    match self.doi() {
      Some("") => None,
      Some(doi) => Some(format!("https://doi.org/{doi}")),
      None => self.url.clone(),
    }
  }
}

impl<'de> Deserialize<'de> for Record {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where D: serde::Deserializer<'de> {
    Value::deserialize(deserializer).map(|value| Self::from_value(&value))
  }
}

/// Strings pass through and numbers keep their JSON text. Anything else is absent.
fn lenient_text(value: &Value) -> Option<String> {
  match value {
    Value::String(text) => Some(text.clone()),
    Value::Number(number) => Some(number.to_string()),
    _ => None,
  }
}

fn non_empty_text(value: &Value, key: &str) -> Option<String> {
  value.get(key).and_then(lenient_text).filter(|text| !text.is_empty())
}

fn people(value: Option<&Value>) -> Vec<Person> {
  value.and_then(Value::as_array).map_or_else(Vec::new, |people| {
    people.iter().map(Person::parse).collect()
  })
}

fn identifiers(value: Option<&Value>) -> Vec<Identifier> {
  let Some(entries) = value.and_then(Value::as_array) else {
    return Vec::new();
  };
  entries
    .iter()
    .filter(|entry| entry.is_object())
    .map(|entry| Identifier {
      kind: entry.get("type").and_then(lenient_text).unwrap_or_default(),
      id:   entry.get("id").and_then(lenient_text).unwrap_or_default(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_full_record() {
    let record = Record::from_value(&json!({
      "type": "article",
      "title": "A Mathematical Theory of Communication",
      "author": [{ "given": "Claude E.", "family": "Shannon" }],
      "year": "1948",
      "journal": {
        "name": "Bell System Technical Journal",
        "volume": "27",
        "number": "3",
        "pages": "379-423"
      },
      "identifier": [{ "type": "doi", "id": "10.1002/j.1538-7305.1948.tb01338.x" }]
    }));

    assert_eq!(record.kind.as_deref(), Some("article"));
    assert_eq!(record.title(), "A Mathematical Theory of Communication");
    assert_eq!(record.author, vec![Person::new("Claude E.", "Shannon")]);
    let journal = record.journal.as_ref().unwrap();
    assert_eq!(journal.volume.as_deref(), Some("27"));
    assert_eq!(journal.pages.as_deref(), Some("379-423"));
    assert_eq!(record.doi(), Some("10.1002/j.1538-7305.1948.tb01338.x"));
    assert_eq!(
      record.link().as_deref(),
      Some("https://doi.org/10.1002/j.1538-7305.1948.tb01338.x")
    );
  }

  #[test]
  fn test_defaults() {
    let record = Record::from_value(&json!({}));
    assert_eq!(record.title(), "Untitled");
    assert!(!record.is_article());
    assert_eq!(record.contributors(), Contributors::Anonymous);
    assert_eq!(record.sort_key(), "Unknown");
    assert_eq!(record.link(), None);
  }

  #[traced_test]
  #[test]
  fn test_non_object_record() {
    assert_eq!(Record::from_value(&json!("just a string")), Record::default());
    assert_eq!(Record::from_value(&json!(null)), Record::default());
    assert!(logs_contain("Record is not a JSON object"));
  }

  #[test]
  fn test_numeric_fields() {
    let record = Record::from_value(&json!({
      "year": 1962,
      "journal": { "volume": 5, "number": 2 }
    }));
    assert_eq!(record.year.as_deref(), Some("1962"));
    assert_eq!(record.journal.unwrap().number.as_deref(), Some("2"));
  }

  #[test]
  fn test_unusable_fields_are_absent() {
    let record = Record::from_value(&json!({
      "title": ["not", "text"],
      "year": "",
      "journal": "Nature",
      "author": "Alan Turing",
      "place": { "city": "London" }
    }));
    assert_eq!(record.title(), "Untitled");
    assert_eq!(record.year, None);
    assert_eq!(record.journal, None);
    assert!(record.author.is_empty());
    assert_eq!(record.place, None);
  }

  #[test]
  fn test_publisher_key_presence() {
    let record = Record::from_value(&json!({ "publisher": null }));
    assert_eq!(record.publisher.as_deref(), Some(""));

    let record = Record::from_value(&json!({ "title": "No Publisher" }));
    assert_eq!(record.publisher, None);
  }

  #[test]
  fn test_authors_take_priority_over_editors() {
    let record = Record::from_value(&json!({
      "author": ["Alan Turing"],
      "editor": ["Jack Copeland"]
    }));
    assert!(matches!(record.contributors(), Contributors::Authors(_)));
    assert_eq!(record.sort_key(), "Turing");

    let record = Record::from_value(&json!({ "author": [], "editor": ["Copeland, Jack"] }));
    assert!(matches!(record.contributors(), Contributors::Editors(_)));
    assert_eq!(record.sort_key(), "Copeland");
  }

  #[test]
  fn test_unnamed_first_contributor_sorts_as_unknown() {
    let record = Record::from_value(&json!({ "author": [42, "Alan Turing"] }));
    assert_eq!(record.author.len(), 2);
    assert_eq!(record.sort_key(), "Unknown");
  }

  #[test]
  fn test_first_doi_wins() {
    let record = Record::from_value(&json!({
      "identifier": [
        { "type": "isbn", "id": "978-0-226-45808-3" },
        { "type": "doi", "id": "10.1000/first" },
        { "type": "doi", "id": "10.1000/second" }
      ],
      "url": "https://example.org"
    }));
    assert_eq!(record.doi(), Some("10.1000/first"));
    assert_eq!(record.link().as_deref(), Some("https://doi.org/10.1000/first"));
  }

  #[test]
  fn test_empty_doi_stops_the_scan() {
    let record = Record::from_value(&json!({
      "identifier": [{ "type": "doi", "id": "" }, { "type": "doi", "id": "10.1000/later" }],
      "url": "https://example.org"
    }));
    assert_eq!(record.doi(), Some(""));
    assert_eq!(record.link(), None);
  }

  #[test]
  fn test_url_fallback() {
    let record = Record::from_value(&json!({
      "identifier": [{ "type": "isbn", "id": "978-0-226-45808-3" }],
      "url": "https://example.org/book"
    }));
    assert_eq!(record.link().as_deref(), Some("https://example.org/book"));
  }

  #[test]
  fn test_deserialize_never_fails() {
    let records: Vec<Record> =
      serde_json::from_value(json!([{ "title": "Kept" }, 17, [], "text"])).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title(), "Kept");
    assert_eq!(records[1].title(), "Untitled");
  }
}
