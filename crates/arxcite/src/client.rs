//! Client for fetching citation metadata from arXiv.org.
//!
//! This module builds the query URL, performs the single HTTP GET against
//! the arXiv Atom API (http://export.arxiv.org/api/query), and parses the
//! response into a [`Citation`]. Both new-style (1312.7188) and old-style
//! (hep-th/0605198) identifiers are supported; identifiers are passed
//! through to the API verbatim, with no validation and no URL-encoding,
//! and the API is relied upon to reject anything malformed.
//!
//! # Examples
//!
//! ```no_run
//! use arxcite::ArxivClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArxivClient::new();
//! let citation = client.fetch_citation("1312.7188").await?;
//!
//! println!("Title: {}", citation.title);
//! println!("Authors: {}", citation.author_field());
//! # Ok(())
//! # }
//! ```

use super::*;

/// Host of the public arXiv query API.
const DEFAULT_BASE_URL: &str = "http://export.arxiv.org";

lazy_static! {
  /// Matches the default-namespace declaration on the feed root element.
  static ref XMLNS: Regex = Regex::new(r#" xmlns="[^"]+""#).unwrap();
}

/// Internal representation of the arXiv API's Atom feed response.
#[derive(Debug, Deserialize)]
struct Feed {
  /// A `Feed` from arXiv may contain multiple `Entry`s; an identifier that
  /// matches nothing yields a feed with none at all.
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// Internal representation of one article entry from arXiv's API response.
///
/// Only the fields needed for a BibTeX entry are captured; the rest of the
/// response (summary, categories, version info) is ignored.
#[derive(Debug, Deserialize)]
struct Entry {
  /// Article title (may contain LaTeX markup, passed through verbatim)
  title:     String,
  /// List of article authors, in document order
  #[serde(rename = "author")]
  authors:   Vec<EntryAuthor>,
  /// Publication timestamp; only the leading year is used
  published: String,
  /// The entry's links; the abstract page is the one typed `text/html`
  #[serde(rename = "link", default)]
  links:     Vec<Link>,
}

/// Internal representation of an author from arXiv's API response.
#[derive(Debug, Deserialize)]
struct EntryAuthor {
  /// Author's full name
  name: String,
}

/// Internal representation of a `link` element on an entry.
#[derive(Debug, Deserialize)]
struct Link {
  /// Link target
  #[serde(rename = "@href")]
  href: String,
  /// MIME type of the target, when the API provides one
  #[serde(rename = "@type")]
  kind: Option<String>,
}

/// Client for interacting with the arXiv API.
///
/// This client performs the single request needed to cite an article and
/// converts the response into a [`Citation`]. The base URL is swappable so
/// tests can point it at a local mock server.
///
/// # Examples
///
/// ```no_run
/// # use arxcite::ArxivClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ArxivClient::new();
///
/// // Fetch using a new-style ID
/// let citation1 = client.fetch_citation("1312.7188").await?;
///
/// // Fetch using an old-style ID (the subject-class prefix stays as-is)
/// let citation2 = client.fetch_citation("hep-th/0605198").await?;
/// # Ok(())
/// # }
/// ```
pub struct ArxivClient {
  /// Internal web client used to connect to the API.
  client:   reqwest::Client,
  /// Scheme and host the query path is appended to.
  base_url: String,
}

impl ArxivClient {
  /// Creates a client pointed at the public arXiv API.
  pub fn new() -> Self {
    Self { client: reqwest::Client::new(), base_url: DEFAULT_BASE_URL.to_string() }
  }

  /// Creates a client pointed at an alternate host, e.g. a mock server.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.into() }
  }

  /// Builds the query URL for an identifier.
  ///
  /// The identifier is embedded verbatim: no validation, no
  /// percent-encoding. Old-style identifiers keep their slash
  /// (`hep-th/0605198`), which the API accepts as-is. A malformed
  /// identifier travels to the API untouched and fails there.
  pub fn query_url(&self, identifier: &str) -> String {
    format!("{}/api/query?id_list={}", self.base_url, identifier)
  }

  /// Fetches citation metadata for an article by its identifier.
  ///
  /// Performs one GET with no retries, then parses the Atom response. The
  /// returned [`Citation`] has its abstract link already normalized to the
  /// canonical `https`, version-free form.
  ///
  /// # Errors
  ///
  /// - [`CiteError::Network`] if the request fails or returns a non-2xx
  ///   status; the variant carries the query URL.
  /// - [`CiteError::Decode`] if the body is not UTF-8.
  /// - [`CiteError::Parse`] if the body is not well-formed XML or is
  ///   missing a required element.
  /// - [`CiteError::MissingEntry`] if the identifier matched no article.
  /// - [`CiteError::AmbiguousLink`] if the entry does not have exactly one
  ///   `text/html` link.
  pub async fn fetch_citation(&self, identifier: &str) -> Result<Citation, CiteError> {
    let url = self.query_url(identifier);

    debug!("Fetching from arXiv via: {url}");

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .and_then(|response| response.error_for_status())
      .map_err(|source| CiteError::Network { url: url.clone(), source })?;
    let body =
      response.bytes().await.map_err(|source| CiteError::Network { url: url.clone(), source })?;
    let text = String::from_utf8(body.to_vec())?;

    debug!("arXiv response: {text}");

    parse_response(&text)
  }
}

impl Default for ArxivClient {
  fn default() -> Self { Self::new() }
}

/// Parses an arXiv Atom response into a [`Citation`].
///
/// Construction is atomic: a [`Citation`] is only returned when the title,
/// authors, published date, and exactly one `text/html` link were all
/// present; otherwise an error is returned and no partial record exists.
pub fn parse_response(text: &str) -> Result<Citation, CiteError> {
  // The deserializer keys elements by their literal names, so the default
  // xmlns declaration on the feed root is removed up front (first occurrence
  // only). This is a compatibility shim, not real namespace handling:
  // a document using a prefix for the Atom namespace would not parse.
  let stripped = XMLNS.replace(text, "");

  let feed: Feed = from_str(&stripped).map_err(|e| CiteError::Parse(e.to_string()))?;
  let entry = feed.entries.into_iter().next().ok_or(CiteError::MissingEntry)?;

  let html_links: Vec<&Link> =
    entry.links.iter().filter(|link| link.kind.as_deref() == Some("text/html")).collect();
  if html_links.len() != 1 {
    return Err(CiteError::AmbiguousLink(html_links.len()));
  }
  let link = canonical_abstract_url(&html_links[0].href);

  // The published element is a full timestamp (e.g. 2013-12-27T09:22:06Z);
  // BibTeX only wants the year.
  let year: String = entry.published.chars().take(4).collect();

  Ok(Citation {
    authors: entry.authors.into_iter().map(|author| author.name).collect(),
    title: entry.title,
    year,
    link,
  })
}

/// Rewrites an abstract link into its canonical secure form.
///
/// The API hands back links like `http://arxiv.org/abs/1312.7188v2`. Two
/// rewrites are applied, in order:
///
/// 1. If the string contains more than one `'v'`, truncate at the last one,
///    dropping the version suffix. The only `'v'` in a bare abstract URL is
///    the one in "arxiv", so a second occurrence marks a version. This is an
///    arXiv-specific quirk and is relied upon as-is.
/// 2. Upgrade the scheme by replacing the first `http://` with `https://`.
///
/// Already-canonical links pass through unchanged, so the rewrite is
/// idempotent.
pub fn canonical_abstract_url(href: &str) -> String {
  let mut url = href.to_string();
  if url.matches('v').count() > 1 {
    if let Some(position) = url.rfind('v') {
      url.truncate(position);
    }
  }
  url.replacen("http://", "https://", 1)
}
