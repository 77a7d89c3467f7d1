use cite::markup::Channel;

use super::*;

#[test]
fn test_chicago_fixture_bibliography() {
  let citations = fixture_citations("chicago");
  let bibliography: Vec<&str> = citations.iter().map(|c| c.bibliography.as_str()).collect();

  assert_eq!(bibliography, [
    "Copeland, B. Jack, ed. <i>The Essential Turing</i>. Oxford: Clarendon Press, 2004.",
    "Kuhn, Thomas. <i>The Structure of Scientific Revolutions</i>. Chicago: University of Chicago \
     Press, 1962.",
    "McCarthy, John, Marvin Minsky, Nathaniel Rochester, and Claude E. Shannon. \"A Proposal for \
     the Dartmouth Summer Research Project on Artificial Intelligence.\" 1955. \
     http://jmc.stanford.edu/articles/dartmouth.html.",
    "Turing, Alan. \"Computing Machinery and Intelligence.\" <i>Mind</i> 59, no. 236 (1950): \
     433-460. https://doi.org/10.1093/mind/LIX.236.433.",
    "Unknown Author. <i>Anonymous Notes on the Analytical Engine</i>..",
  ]);
}

#[test]
fn test_chicago_fixture_long_footnotes() {
  let citations = fixture_citations("chicago");
  let footnotes: Vec<&str> = citations.iter().map(|c| c.long_footnote.as_str()).collect();

  assert_eq!(footnotes, [
    "B. Jack Copeland, ed., <i>The Essential Turing</i> (Oxford: Clarendon Press, 2004), [pg].",
    "Thomas Kuhn, <i>The Structure of Scientific Revolutions</i> (Chicago: University of Chicago \
     Press, 1962), [pg].",
    "John McCarthy, Marvin Minsky, Nathaniel Rochester, and Claude E. Shannon, \"A Proposal for \
     the Dartmouth Summer Research Project on Artificial Intelligence,\" (1955), [pg].",
    "Alan Turing, \"Computing Machinery and Intelligence,\" <i>Mind</i> 59, no. 236 (1950): [pg].",
    "Unknown Author, <i>Anonymous Notes on the Analytical Engine</i>, [pg].",
  ]);
}

#[test]
fn test_chicago_fixture_short_footnotes() {
  let citations = fixture_citations("chicago");
  let footnotes: Vec<&str> = citations.iter().map(|c| c.short_footnote.as_str()).collect();

  assert_eq!(footnotes, [
    "Copeland, <i>Essential Turing</i> [pg].",
    "Kuhn, <i>Structure of Scientific Revolutions</i> [pg].",
    "McCarthy, \"Proposal for the Dartmouth,\" [pg].",
    "Turing, \"Computing Machinery and Intelligence,\" [pg].",
    "Unknown, <i>Anonymous Notes on the</i> [pg].",
  ]);
}

#[test]
fn test_mla_fixture_is_sorted_single_lines() {
  let citations = fixture_citations("mla");
  assert_eq!(citations.len(), 5);
  assert_eq!(citations[0].bibliography, "[MLA] The Essential Turing");
  assert!(citations.iter().all(|c| c.long_footnote == c.bibliography));
}

#[test]
fn test_channels_translate_fixture_output() {
  let citations = fixture_citations("chicago");
  let kuhn = &citations[1].short_footnote;

  assert_eq!(Channel::Markdown.render(kuhn), "Kuhn, *Structure of Scientific Revolutions* [pg].");
  assert_eq!(Channel::Html.render(kuhn), "Kuhn, <i>Structure of Scientific Revolutions</i> [pg].");
  assert_eq!(
    Channel::Html.render(&citations[3].short_footnote),
    "Turing, &quot;Computing Machinery and Intelligence,&quot; [pg]."
  );
}

#[test]
fn test_formatting_twice_is_identical() {
  assert_eq!(fixture_citations("chicago"), fixture_citations("chicago"));
}
