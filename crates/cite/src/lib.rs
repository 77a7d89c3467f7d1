//! Citation rendering for loosely structured bibliographic records.
//!
//! `cite` turns BibJSON-like records into prose citations. For every record it
//! produces:
//!
//! - a bibliography entry for the sorted reference list
//! - a long footnote for the first time a work is cited
//! - a short footnote for every later reference
//!
//! # Features
//!
//! - **Lenient input**: people may arrive as `firstname`/`lastname` objects, catalog style
//!   `given`/`family` objects, a single `name` field or a bare string, in either "Family, Given"
//!   or "Given Family" order
//! - **Total formatting**: no record shape makes rendering fail, missing fields only shorten the
//!   output
//! - **Pluggable styles**: Chicago is fully implemented, further styles register through the
//!   [`style::CitationStyle`] trait
//! - **Markup agnostic**: titles are wrapped in a single italic marker pair which output channels
//!   translate (see [`markup`])
//!
//! # Getting Started
//!
//! ```
//! use cite::{document::Document, prelude::*, Bibliography};
//!
//! # fn main() -> Result<(), CiteError> {
//! let document = Document::parse(
//!   r#"[{ "type": "book", "title": "The Structure of Scientific Revolutions",
//!         "author": [{ "name": "Kuhn, Thomas" }], "year": "1962",
//!         "publisher": "University of Chicago Press", "place": "Chicago" }]"#,
//! )?;
//!
//! let registry = StyleRegistry::default();
//! let chicago = registry.resolve("chicago")?;
//! let citations = Bibliography::assemble(chicago, document.records());
//!
//! assert_eq!(
//!   citations[0].bibliography,
//!   "Kuhn, Thomas. <i>The Structure of Scientific Revolutions</i>. Chicago: University of \
//!    Chicago Press, 1962."
//! );
//! assert_eq!(citations[0].short_footnote, "Kuhn, <i>Structure of Scientific Revolutions</i> [pg].");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`person`]: Normalizing a single author or editor into a [`person::Person`]
//! - [`names`]: Joining people into prose for bibliographies and footnotes
//! - [`record`]: The bibliographic [`record::Record`] and its lenient decoding
//! - [`style`]: The style contract, the registry and the bundled styles
//! - [`bibliography`]: Sorting records and producing citation triples
//! - [`document`]: Loading BibJSON documents from disk or strings
//! - [`markup`]: The italic marker and its translation into output channels
//! - [`config`]: Persisted user preferences
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument, trace, warn};
#[cfg(test)] use tracing_test::traced_test;

pub mod bibliography;
pub mod config;
pub mod document;
pub mod error;
pub mod markup;
pub mod names;
pub mod person;
pub mod record;
pub mod style;

pub use bibliography::{assemble, Bibliography, Citation};

use crate::{error::*, person::Person, record::Record, style::CitationStyle};

/// Common traits and types for ergonomic imports.
///
/// ```
/// use cite::prelude::*;
///
/// fn title_of(style: &dyn CitationStyle) -> &str { style.name() }
/// ```
pub mod prelude {
  pub use crate::{
    error::CiteError,
    names::NameContext,
    person::Person,
    record::Record,
    style::{CitationStyle, StyleRegistry},
  };
}
