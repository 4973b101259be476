//! Rendering of a [`Citation`] as a BibTeX `@article` entry.
//!
//! Two styles are supported. The default style carries the abstract link in
//! a `note` field; the SPIRES style (named for compatibility with the field
//! layout historically used by the SPIRES HEP database) carries the raw
//! identifier in an `eprint` field and omits the link.
//!
//! No escaping is performed here: math and capitalized acronyms in titles
//! must be braced by hand before the entry is used with BibTeX.
//!
//! # Examples
//!
//! ```
//! use arxcite::{format, Citation};
//!
//! let citation = Citation {
//!   authors: vec!["Edward Witten".into()],
//!   title:   "Some title".into(),
//!   year:    "2016".into(),
//!   link:    "https://arxiv.org/abs/1605.02391".into(),
//! };
//!
//! let entry = format::render(&citation, "1605.02391", format::Style::Default);
//! assert!(entry.starts_with("@article{Wit16,"));
//! ```

use crate::Citation;

/// Which field layout to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
  /// author, title, year, and the abstract link in a `\url` note.
  #[default]
  Default,
  /// author, year, title, then `eprint` and `archivePrefix` instead of a
  /// link.
  Spires,
}

/// Renders a citation as a BibTeX entry in the given style.
///
/// The entry's tag is the citation key derived by [`Citation::key`]. The
/// `identifier` is the one the caller originally supplied; only the SPIRES
/// style embeds it. The output has no trailing newline.
pub fn render(citation: &Citation, identifier: &str, style: Style) -> String {
  let tag = citation.key();
  match style {
    Style::Spires => format!(
      "@article{{{tag},\n\tauthor = {{{author}}},\n\tyear = {{{year}}},\n\ttitle = \
       {{{title}}},\n\teprint = {{{identifier}}},\n\tarchivePrefix = \"arXiv\"\n}}",
      author = citation.author_field(),
      year = citation.year,
      title = citation.title,
    ),
    Style::Default => format!(
      "@article{{{tag},\n\tauthor = {{{author}}},\n\ttitle = {{{title}}},\n\tyear = \
       {{{year}}},\n\tnote = {{\\url{{{link}}}}}\n}}",
      author = citation.author_field(),
      title = citation.title,
      year = citation.year,
      link = citation.link,
    ),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Citation {
    Citation {
      authors: vec!["Gregory W. Moore".into(), "Edward Witten".into()],
      title:   "Self-Duality, Ramond-Ramond Fields, and K-Theory".into(),
      year:    "1999".into(),
      link:    "https://arxiv.org/abs/hep-th/9912279".into(),
    }
  }

  #[test]
  fn test_default_style_byte_for_byte() {
    let expected = "@article{MW99,\n\
                    \tauthor = {Gregory W. Moore and Edward Witten},\n\
                    \ttitle = {Self-Duality, Ramond-Ramond Fields, and K-Theory},\n\
                    \tyear = {1999},\n\
                    \tnote = {\\url{https://arxiv.org/abs/hep-th/9912279}}\n\
                    }";
    assert_eq!(render(&sample(), "hep-th/9912279", Style::Default), expected);
  }

  #[test]
  fn test_spires_style_byte_for_byte() {
    let expected = "@article{MW99,\n\
                    \tauthor = {Gregory W. Moore and Edward Witten},\n\
                    \tyear = {1999},\n\
                    \ttitle = {Self-Duality, Ramond-Ramond Fields, and K-Theory},\n\
                    \teprint = {hep-th/9912279},\n\
                    \tarchivePrefix = \"arXiv\"\n\
                    }";
    assert_eq!(render(&sample(), "hep-th/9912279", Style::Spires), expected);
  }

  #[test]
  fn test_no_trailing_newline() {
    assert!(!render(&sample(), "hep-th/9912279", Style::Default).ends_with('\n'));
    assert!(!render(&sample(), "hep-th/9912279", Style::Spires).ends_with('\n'));
  }
}
