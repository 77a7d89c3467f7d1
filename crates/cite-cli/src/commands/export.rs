//! Module for the "export" command: render a document's citations into a channel.

use std::path::Path;

use cite::{
  document::Document,
  markup::Channel,
  prelude::*,
  Bibliography, Citation,
};

use super::*;

/// Arguments for `cite export`.
#[derive(Args, Clone, Debug)]
pub struct ExportOptions {
  /// BibJSON file holding the records
  pub file: PathBuf,

  /// Citation style, defaults to the configured style
  /// Examples: "chicago", "mla"
  pub style: Option<String>,

  /// Output file. `.md` writes Markdown, `.html` writes HTML, otherwise plain text.
  /// Prints to the terminal when omitted
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Export`] in the CLI.
#[instrument(skip(interaction, config, registry))]
pub fn export<I: UserInteraction>(
  interaction: &I,
  config: &Config,
  registry: &StyleRegistry,
  options: ExportOptions,
) -> Result<()> {
  let ExportOptions { file, style, output } = options;
  let style_name = style.unwrap_or_else(|| config.default_style.clone());

  let style = registry.resolve(&style_name).map_err(|_| CliError::UnknownStyle {
    style:     style_name.clone(),
    supported: registry.names().join(", "),
  })?;

  let document = Document::from_path(&file)?;
  if document.is_empty() {
    interaction.reply(ResponseContent::Info(&format!("No records found in {}", file.display())))?;
  }

  let citations = Bibliography::assemble(style, document.records());
  let channel = Channel::for_output(output.as_deref());
  let rendered = layout(channel, &citations, style.supports_footnotes());
  debug!(?channel, citations = citations.len(), "Rendered citations");

  match output {
    Some(path) => {
      write_output(&path, &rendered)?;
      interaction.reply(ResponseContent::Success(&format!(
        "Wrote {} {} citations to {}",
        citations.len(),
        style.name(),
        path.display()
      )))
    },
    None => interaction.reply(ResponseContent::Citations(&rendered)),
  }
}

/// Writes `rendered` to `path`, creating missing parent directories.
fn write_output(path: &Path, rendered: &str) -> Result<()> {
  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, rendered)?;
  Ok(())
}

/// Lays out every citation for `channel`.
///
/// Styles with footnotes get three headed sections; other styles get a single
/// numbered list of bibliography entries.
fn layout(channel: Channel, citations: &[Citation], footnotes: bool) -> String {
  if !footnotes {
    return numbered(channel, citations.iter().map(|c| c.bibliography.as_str()));
  }

  let sections = [
    section(channel, "Bibliography", citations.iter().map(|c| c.bibliography.as_str())),
    section(channel, "Long footnotes", citations.iter().map(|c| c.long_footnote.as_str())),
    section(channel, "Short footnotes", citations.iter().map(|c| c.short_footnote.as_str())),
  ];

  match channel {
    Channel::Html => sections.concat(),
    Channel::Terminal | Channel::Markdown => sections.join("\n"),
  }
}

/// A headed, numbered list.
fn section<'a>(channel: Channel, heading: &str, entries: impl Iterator<Item = &'a str>) -> String {
  let list = numbered(channel, entries);
  match channel {
    Channel::Html => format!("<h2>{heading}</h2>\n{list}"),
    Channel::Terminal | Channel::Markdown => format!("## {heading}\n{list}"),
  }
}

/// One numbered entry per line, or an ordered list for HTML.
fn numbered<'a>(channel: Channel, entries: impl Iterator<Item = &'a str>) -> String {
  let items: String = entries
    .enumerate()
    .map(|(index, entry)| match channel {
      Channel::Html => format!("<li>{}</li>\n", channel.render(entry)),
      Channel::Terminal | Channel::Markdown =>
        format!("{}. {}\n", index + 1, channel.render(entry)),
    })
    .collect();
  match channel {
    Channel::Html => format!("<ol>\n{items}</ol>\n"),
    Channel::Terminal | Channel::Markdown => items,
  }
}
