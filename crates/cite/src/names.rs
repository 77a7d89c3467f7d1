//! Joining lists of people into prose.
//!
//! Two grammars are supported. A bibliography entry inverts only the first
//! name so the list sorts by family name:
//!
//! ```text
//! Lovelace, Ada, Charles Babbage, and Alan Turing
//! ```
//!
//! A footnote reads every name naturally:
//!
//! ```text
//! Ada Lovelace, Charles Babbage, and Alan Turing
//! ```

use super::*;

/// Where a list of names is going to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameContext {
  /// Leading a bibliography entry: first name as "Family, Given"
  Bibliographic,
  /// Inside a footnote: every name as "Given Family"
  Footnote,
}

/// Renders `people` as a single prose list.
///
/// Names are separated by commas and "and" precedes only the last name once two
/// or more are present. An empty slice yields an empty string.
///
/// # Examples
///
/// ```
/// use cite::{
///   names::{render, NameContext},
///   person::Person,
/// };
///
/// let people = [Person::new("Ada", "Lovelace"), Person::new("Charles", "Babbage")];
/// assert_eq!(render(&people, NameContext::Bibliographic), "Lovelace, Ada, and Charles Babbage");
/// assert_eq!(render(&people, NameContext::Footnote), "Ada Lovelace, and Charles Babbage");
/// ```
pub fn render(people: &[Person], context: NameContext) -> String {
  let last = people.len().saturating_sub(1);
  people
    .iter()
    .enumerate()
    .map(|(index, person)| {
      let name = match (index, context) {
        (0, NameContext::Bibliographic) => person.inverted(),
        _ => person.natural(),
      };
      match index {
        0 => name,
        i if i == last => format!(", and {name}"),
        _ => format!(", {name}"),
      }
    })
    .collect()
}
