//! Error types for the arxcite CLI.
//!
//! A thin wrapper over the library and clipboard error types so that `main`
//! can return a single error type, print a diagnostic to stderr, and exit
//! non-zero. The `transparent` pattern keeps the underlying messages
//! intact.

use thiserror::Error;

/// Errors that can terminate a CLI run.
#[derive(Error, Debug)]
pub enum ArxciteCliError {
  /// Errors from the underlying arxcite library (network, decode, parse,
  /// missing entry, ambiguous link)
  #[error(transparent)]
  Cite(#[from] arxcite::CiteError),

  /// Errors from the system clipboard
  #[error(transparent)]
  Clipboard(#[from] arboard::Error),
}
