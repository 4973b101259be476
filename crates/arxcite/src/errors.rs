//! Error types for the arxcite library.
//!
//! Every failure mode here is terminal for a single-shot citation fetch:
//! nothing is retried or recovered internally. Either a complete
//! [`Citation`](crate::Citation) is produced, or one of these errors
//! propagates to the caller.

use thiserror::Error;

/// Errors that can occur while fetching and parsing an arXiv article.
///
/// The variants follow the stages of the pipeline: the network request,
/// decoding the body, parsing the Atom feed, and selecting the abstract
/// link. Network errors carry the offending URL so a failed request can be
/// diagnosed without re-running with extra logging.
#[derive(Error, Debug)]
pub enum CiteError {
  /// The HTTP request to the arXiv API failed.
  ///
  /// This covers DNS failures, refused connections, timeouts, and non-2xx
  /// responses. The URL that was requested is included in the message.
  #[error("request to {url} failed: {source}")]
  Network {
    /// The query URL that was being fetched.
    url:    String,
    /// The underlying transport error.
    #[source]
    source: reqwest::Error,
  },

  /// The response body was not valid UTF-8.
  #[error("response body was not valid UTF-8: {0}")]
  Decode(#[from] std::string::FromUtf8Error),

  /// The response body could not be parsed as an Atom feed.
  ///
  /// The string parameter carries the deserializer's message, which names
  /// the missing or malformed element.
  #[error("failed to parse arXiv response: {0}")]
  Parse(String),

  /// The feed contained no `entry` element.
  ///
  /// arXiv returns an empty feed rather than an HTTP error when an
  /// identifier matches nothing.
  #[error("no entry found for the given identifier")]
  MissingEntry,

  /// The entry did not have exactly one `text/html` link.
  ///
  /// The abstract page link is selected by its `type` attribute; anything
  /// other than exactly one match means the response shape changed and a
  /// silent pick would risk citing the wrong URL. Carries the observed
  /// count.
  #[error("expected exactly one text/html link, found {0}")]
  AmbiguousLink(usize),
}
