//! A library for fetching metadata of a single arXiv article and rendering
//! it as a BibTeX entry.
//!
//! The pipeline is strictly linear: build a query URL from an identifier,
//! issue one GET against the arXiv API, parse the Atom response into a
//! [`Citation`], derive a citation key from surnames and year, and render
//! the entry in one of two styles.
//!
//! # Example
//! ```rust,no_run
//! use arxcite::{render, ArxivClient, Style};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!   let citation = ArxivClient::new().fetch_citation("1312.7188").await?;
//!   println!("{}", render(&citation, "1312.7188", Style::Default));
//!
//!   Ok(())
//! }
//! ```
//!
//! # Caveats
//!
//! As with BibTeX in general, any math in article titles must be manually
//! escaped, and so must capital letters in acronyms or proper nouns: many
//! style files lowercase them unless braced. This library passes titles
//! through verbatim.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use lazy_static::lazy_static;
use quick_xml::de::from_str;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

pub mod citation;
pub mod client;
pub mod errors;
pub mod format;

pub use citation::Citation;
pub use client::ArxivClient;
pub use errors::CiteError;
pub use format::{render, Style};
