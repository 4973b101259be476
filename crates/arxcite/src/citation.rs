//! The citation record and citation-key derivation.
//!
//! A [`Citation`] is the one entity this library produces: the four fields
//! of an article that a BibTeX entry needs. It is constructed once per run
//! by the response parser and is immutable afterwards.

/// A complete citation record for one arXiv article.
///
/// All four fields are non-empty once a record has been constructed; the
/// parser fails atomically rather than hand back a partial record.
///
/// # Examples
///
/// ```
/// use arxcite::Citation;
///
/// let citation = Citation {
///   authors: vec!["Edward Witten".into()],
///   title:   "Some title".into(),
///   year:    "2016".into(),
///   link:    "https://arxiv.org/abs/1605.02391".into(),
/// };
/// assert_eq!(citation.key(), "Wit16");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
  /// The article's authors, full names in document order
  pub authors: Vec<String>,
  /// The article's title, verbatim (LaTeX markup is the caller's problem)
  pub title:   String,
  /// Four-digit publication year
  pub year:    String,
  /// Canonical link to the human-readable abstract page
  pub link:    String,
}

impl Citation {
  /// The BibTeX `author` field: full names joined with `" and "`.
  pub fn author_field(&self) -> String { self.authors.join(" and ") }

  /// Derives the citation tag (e.g. `KT90` or `Wit16`) for use by `\ref`
  /// or `\cref`.
  ///
  /// With multiple authors, the tag is the first letter of each author's
  /// surname followed by the last two digits of the year. With a single
  /// author it is the first three letters of the surname (fewer if the
  /// surname is shorter) plus the year digits.
  ///
  /// The surname is taken to be the last whitespace-delimited token of the
  /// full name. Since this is so context-sensitive it won't be perfect:
  /// multi-word surnames lose their particle (von Neumann comes out as `N`,
  /// not `vN`). Accepted imprecision; the tag is a mnemonic, not a unique
  /// ID.
  pub fn key(&self) -> String {
    let author = self.author_field();
    let year_suffix = &self.year[self.year.len().saturating_sub(2)..];

    if author.contains(" and ") {
      // initials + year
      let initials: String = author
        .split(" and ")
        .filter_map(|name| name.split_whitespace().last())
        .filter_map(|surname| surname.chars().next())
        .collect();
      format!("{initials}{year_suffix}")
    } else {
      // first 3 letters of surname + year
      let surname = author.split_whitespace().last().unwrap_or_default();
      let prefix: String = surname.chars().take(3).collect();
      format!("{prefix}{year_suffix}")
    }
  }
}
