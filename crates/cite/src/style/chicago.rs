//! Chicago notes-bibliography style.
//!
//! Every rendering is built from an ordered list of fragments, one per rule
//! (attribution, title, container, link), joined once at the end. Footnotes
//! carry a literal `[pg]` placeholder where the cited page belongs.

use super::*;
use crate::{
  markup::italic,
  names::{self, NameContext},
  record::{Contributors, Journal},
};

/// Stands in for the page number a footnote points at.
const PAGE: &str = "[pg]";

/// Attribution used when a record has neither authors nor editors.
const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Leading words dropped from short titles.
const ARTICLES: [&str; 3] = ["The", "A", "An"];

/// Number of words kept in a short title.
const SHORT_TITLE_WORDS: usize = 4;

/// Chicago style: bibliography entries plus long and short footnotes.
///
/// # Examples
///
/// ```
/// use cite::{prelude::*, style::Chicago};
/// use serde_json::json;
///
/// let record = Record::from_value(&json!({
///   "type": "article",
///   "title": "Computing Machinery and Intelligence",
///   "author": [{ "firstname": "Alan", "lastname": "Turing" }],
///   "year": "1950",
///   "journal": { "name": "Mind", "volume": "59", "number": "236", "pages": "433-460" }
/// }));
///
/// assert_eq!(
///   Chicago.bibliography(&record),
///   "Turing, Alan. \"Computing Machinery and Intelligence.\" <i>Mind</i> 59, no. 236 (1950): \
///    433-460."
/// );
/// assert_eq!(
///   Chicago.long_footnote(&record),
///   "Alan Turing, \"Computing Machinery and Intelligence,\" <i>Mind</i> 59, no. 236 (1950): [pg]."
/// );
/// assert_eq!(Chicago.short_footnote(&record), "Turing, \"Computing Machinery and Intelligence,\" [pg].");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Chicago;

impl CitationStyle for Chicago {
  fn name(&self) -> &str { "chicago" }

  fn bibliography(&self, record: &Record) -> String {
    [
      attribution(record, NameContext::Bibliographic),
      ". ".to_string(),
      full_title(record, "."),
      bibliography_container(record),
      link(record),
    ]
    .concat()
  }

  fn long_footnote(&self, record: &Record) -> String {
    [
      attribution(record, NameContext::Footnote),
      ", ".to_string(),
      full_title(record, ","),
      footnote_container(record),
    ]
    .concat()
  }

  fn short_footnote(&self, record: &Record) -> String {
    let family = record.sort_key();
    let title = short_title(record.title());
    let title = if record.is_article() { format!("\"{title},\"") } else { italic(&title) };
    format!("{family}, {title} {PAGE}.")
  }

  fn supports_footnotes(&self) -> bool { true }
}

/// Who the work is attributed to, with an editor suffix when needed.
fn attribution(record: &Record, context: NameContext) -> String {
  let (people, editors) = match record.contributors() {
    Contributors::Authors(people) => (people, false),
    Contributors::Editors(people) => (people, true),
    Contributors::Anonymous => return UNKNOWN_AUTHOR.to_string(),
  };

  let names = names::render(people, context);
  if !editors {
    return names;
  }
  let suffix = match (people.len() > 1, context) {
    (true, NameContext::Bibliographic) => ", eds",
    (false, NameContext::Bibliographic) => ", ed",
    (true, NameContext::Footnote) => ", eds.",
    (false, NameContext::Footnote) => ", ed.",
  };
  format!("{names}{suffix}")
}

/// Quoted for articles with `terminator` inside the quotes, italic otherwise.
///
/// Italic titles only take a terminator in the bibliography, where it is a
/// period; in footnotes the comma belongs to quoted titles alone.
fn full_title(record: &Record, terminator: &str) -> String {
  let title = record.title();
  if record.is_article() {
    format!("\"{title}{terminator}\"")
  } else if terminator == "." {
    format!("{}.", italic(title))
  } else {
    italic(title)
  }
}

/// Volume and issue, as in " 27, no. 3". The issue is only shown with a volume.
fn volume_and_issue(journal: &Journal) -> String {
  match (&journal.volume, &journal.number) {
    (Some(volume), Some(number)) => format!(" {volume}, no. {number}"),
    (Some(volume), None) => format!(" {volume}"),
    (None, _) => String::new(),
  }
}

/// Journal name, volume and issue, then the parenthesized year.
fn journal_heading(journal: &Journal, year: Option<&str>) -> String {
  [
    " ".to_string(),
    journal.name.as_deref().map(italic).unwrap_or_default(),
    volume_and_issue(journal),
    year.map(|year| format!(" ({year})")).unwrap_or_default(),
  ]
  .concat()
}

/// Where the work appeared, as written in a bibliography entry.
fn bibliography_container(record: &Record) -> String {
  let year = record.year.as_deref();

  if let Some(journal) = &record.journal {
    let pages = journal.pages.as_deref().map(|pages| format!(": {pages}")).unwrap_or_default();
    return [journal_heading(journal, year), pages, ".".to_string()].concat();
  }

  if let Some(publisher) = record.publisher.as_deref() {
    let place = record.place.as_deref();
    if place.is_some() || !publisher.is_empty() {
      return [
        " ".to_string(),
        place.map(|place| format!("{place}: ")).unwrap_or_default(),
        publisher.to_string(),
        year.map(|year| format!(", {year}")).unwrap_or_default(),
        ".".to_string(),
      ]
      .concat();
    }
  }

  match year {
    Some(year) => format!(" {year}."),
    None => ".".to_string(),
  }
}

/// Where the work appeared, as written in a long footnote.
fn footnote_container(record: &Record) -> String {
  let year = record.year.as_deref();

  if let Some(journal) = &record.journal {
    return format!("{}: {PAGE}.", journal_heading(journal, year));
  }

  if let Some(publisher) = record.publisher.as_deref() {
    return [
      " (".to_string(),
      record.place.as_deref().map(|place| format!("{place}: ")).unwrap_or_default(),
      publisher.to_string(),
      year.map(|year| format!(", {year}")).unwrap_or_default(),
      format!("), {PAGE}."),
    ]
    .concat();
  }

  let year = year.map(|year| format!(" ({year})")).unwrap_or_default();
  format!("{year}, {PAGE}.")
}

/// The DOI resolver link or URL that closes a bibliography entry.
fn link(record: &Record) -> String {
  record.link().map(|link| format!(" {link}.")).unwrap_or_default()
}

/// The first four words of a title, without a single leading article.
fn short_title(title: &str) -> String {
  let mut words = title.split_whitespace().peekable();
  if words.next_if(|word| ARTICLES.contains(word)).is_some() {
    trace!(title, "Dropped leading article from short title");
  }
  words.take(SHORT_TITLE_WORDS).collect::<Vec<_>>().join(" ")
}
