//! Normalization of author and editor names.
//!
//! People arrive in several shapes depending on where a record came from. Each
//! shape has a matcher, and the matchers are tried in a fixed priority order:
//!
//! 1. An object with `firstname` and `lastname` keys
//! 2. An object with `given` and `family` keys (catalog convention)
//! 3. An object with a single `name` key holding free text
//! 4. A bare string holding free text
//!
//! Free text is read as "Family, Given" when it contains a comma and as
//! "Given Family" otherwise.
//!
//! # Examples
//!
//! ```
//! use cite::person::Person;
//! use serde_json::json;
//!
//! let turing = Person::parse(&json!({ "name": "Turing, Alan" }));
//! assert_eq!(turing.given, "Alan");
//! assert_eq!(turing.family, "Turing");
//!
//! let lovelace = Person::parse(&json!("Ada Lovelace"));
//! assert_eq!(lovelace.family, "Lovelace");
//! ```

use super::*;
use crate::record::UNKNOWN;

/// A matcher inspects a raw value and either recognizes its shape or passes.
type ShapeMatcher = fn(&Value) -> Option<Person>;

/// Shape matchers in the order they are tried.
const SHAPES: [(&str, ShapeMatcher); 4] = [
  ("firstname/lastname", match_firstname_lastname),
  ("given/family", match_given_family),
  ("name", match_name),
  ("string", match_string),
];

/// A canonical person, the normalized form of any supported name shape.
///
/// `family` is empty only when the source carried no recognizable family name.
/// The display orders substitute "Unknown" when nothing at all was recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Person {
  /// Given names, possibly empty
  pub given:  String,
  /// Family name
  pub family: String,
  /// Display form of the name as it was supplied
  pub full:   String,
}

impl Person {
  /// Creates a person from already separated name parts.
  pub fn new(given: impl Into<String>, family: impl Into<String>) -> Self {
    let given = given.into();
    let family = family.into();
    let full = match (given.is_empty(), family.is_empty()) {
      (_, true) => given.clone(),
      (true, false) => family.clone(),
      (false, false) => format!("{family}, {given}"),
    };
    Self { given, family, full }
  }

  /// Normalizes any supported person representation.
  ///
  /// This never fails. Values that match no shape yield an empty person.
  pub fn parse(value: &Value) -> Self {
    SHAPES
      .iter()
      .find_map(|(shape, matcher)| {
        let person = matcher(value)?;
        trace!(shape = *shape, family = %person.family, "Matched person shape");
        Some(person)
      })
      .unwrap_or_else(|| {
        debug!(?value, "Person matched no known shape");
        Self::default()
      })
  }

  /// Parses free text in either "Family, Given" or "Given Family" order.
  ///
  /// With a comma, everything before the first comma is the family name and the
  /// rest (left-trimmed) is the given name. Without one, the text is split at the
  /// last space and the final token becomes the family name. A single token is
  /// taken as the family name alone. Surrounding whitespace is ignored.
  pub fn from_text(text: &str) -> Self {
    let text = text.trim();
    let (given, family) = if let Some((family, given)) = text.split_once(',') {
      (given.trim_start(), family)
    } else if let Some((given, family)) = text.rsplit_once(' ') {
      (given, family)
    } else {
      ("", text)
    };
    Self { given: given.to_string(), family: family.to_string(), full: text.to_string() }
  }

  /// Whether no family name could be recovered.
  pub fn is_unnamed(&self) -> bool { self.family.is_empty() }

  /// The name in "Family, Given" order, as it leads a bibliography entry.
  ///
  /// See [`Person::natural`] for how unnamed people render.
  pub fn inverted(&self) -> String {
    match (self.given.is_empty(), self.family.is_empty()) {
      (true, true) => UNKNOWN.to_string(),
      (true, false) => self.family.clone(),
      (false, true) => self.given.clone(),
      (false, false) => format!("{}, {}", self.family, self.given),
    }
  }

  /// The name in "Given Family" order.
  ///
  /// A person without a family name renders as the given name alone, or as
  /// "Unknown" when nothing was recovered.
  pub fn natural(&self) -> String {
    match (self.given.is_empty(), self.family.is_empty()) {
      (true, true) => UNKNOWN.to_string(),
      (true, false) => self.family.clone(),
      (false, true) => self.given.clone(),
      (false, false) => format!("{} {}", self.given, self.family),
    }
  }
}

impl From<&str> for Person {
  fn from(text: &str) -> Self { Self::from_text(text) }
}

impl Display for Person {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.full) }
}

impl<'de> Deserialize<'de> for Person {
  fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
  where D: serde::Deserializer<'de> {
    Value::deserialize(deserializer).map(|value| Self::parse(&value))
  }
}

/// Reads `key` from an object as text, treating non-strings as empty.
fn text_field<'a>(value: &'a Value, key: &str) -> &'a str {
  value.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Both keys must be present for a structured shape to apply.
fn has_keys(value: &Value, first: &str, second: &str) -> bool {
  value.get(first).is_some() && value.get(second).is_some()
}

fn match_firstname_lastname(value: &Value) -> Option<Person> {
  has_keys(value, "firstname", "lastname")
    .then(|| Person::new(text_field(value, "firstname"), text_field(value, "lastname")))
}

fn match_given_family(value: &Value) -> Option<Person> {
  has_keys(value, "given", "family")
    .then(|| Person::new(text_field(value, "given"), text_field(value, "family")))
}

fn match_name(value: &Value) -> Option<Person> {
  value.get("name").map(|_| Person::from_text(text_field(value, "name")))
}

fn match_string(value: &Value) -> Option<Person> { value.as_str().map(Person::from_text) }
