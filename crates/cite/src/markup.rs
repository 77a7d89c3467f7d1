//! Italic markup and its translation into output channels.
//!
//! Styles emit plain text where italicized spans (book and journal titles) are
//! wrapped in a single marker pair, [`ITALIC_OPEN`] and [`ITALIC_CLOSE`]. A
//! [`Channel`] turns that text into what a particular destination expects.
//!
//! # Examples
//!
//! ```
//! use cite::markup::{italic, Channel};
//!
//! let text = format!("{}.", italic("Dune"));
//! assert_eq!(Channel::Markdown.render(&text), "*Dune*.");
//! assert_eq!(Channel::Html.render(&text), "<i>Dune</i>.");
//! ```

use super::*;

/// Opens an italicized span.
pub const ITALIC_OPEN: &str = "<i>";

/// Closes an italicized span.
pub const ITALIC_CLOSE: &str = "</i>";

/// Wraps `text` in the italic marker pair.
pub fn italic(text: &str) -> String { format!("{ITALIC_OPEN}{text}{ITALIC_CLOSE}") }

/// Destination format for rendered citations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
  /// Plain terminal output, italics shown with Markdown-style asterisks
  #[default]
  Terminal,
  /// A Markdown document
  Markdown,
  /// An HTML document
  Html,
}

impl Channel {
  /// Chooses a channel from an output path's extension.
  ///
  /// `.html` selects [`Channel::Html`], `.md` selects [`Channel::Markdown`] and
  /// anything else, including no path at all, is written as terminal text.
  pub fn for_output(path: Option<&Path>) -> Self {
    match path.and_then(Path::extension).and_then(|extension| extension.to_str()) {
      Some("html") => Channel::Html,
      Some("md") => Channel::Markdown,
      _ => Channel::Terminal,
    }
  }

  /// Translates marked-up citation text for this channel.
  pub fn render(&self, text: &str) -> String {
    match self {
      Channel::Terminal | Channel::Markdown =>
        text.replace(ITALIC_OPEN, "*").replace(ITALIC_CLOSE, "*"),
      Channel::Html => escape_html(text),
    }
  }
}

/// Escapes characters unsafe in HTML while keeping the italic markers as tags.
fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  let mut rest = text;
  while !rest.is_empty() {
    if let Some(after) = rest.strip_prefix(ITALIC_OPEN) {
      escaped.push_str(ITALIC_OPEN);
      rest = after;
    } else if let Some(after) = rest.strip_prefix(ITALIC_CLOSE) {
      escaped.push_str(ITALIC_CLOSE);
      rest = after;
    } else {
      let mut chars = rest.chars();
      match chars.next() {
        Some('&') => escaped.push_str("&amp;"),
        Some('<') => escaped.push_str("&lt;"),
        Some('>') => escaped.push_str("&gt;"),
        Some('"') => escaped.push_str("&quot;"),
        Some(other) => escaped.push(other),
        None => break,
      }
      rest = chars.as_str();
    }
  }
  escaped
}
