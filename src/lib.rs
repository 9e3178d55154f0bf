//! # pagetext
//!
//! Fetch a single web page and extract its main readable text.
//!
//! The crate is a thin shim around two collaborators: a blocking HTTP
//! client downloads the page, and a readability engine turns the markup
//! into plain text. What lives here is the seam: a fixed
//! extraction policy, error translation, and the JSON envelope the
//! CLI prints.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagetext::{extract_text, ExtractOptions};
//!
//! let text = extract_text("https://example.com/article", &ExtractOptions::default());
//! if text.is_empty() {
//!     eprintln!("nothing extracted");
//! } else {
//!     println!("{text}");
//! }
//! ```
//!
//! ## Failure model
//!
//! [`fetch_and_extract`] is the Result-returning core: transport and
//! collaborator failures surface as [`Error`], while "nothing
//! extractable" is `Ok` with an empty string. [`extract_text`] wraps it
//! with the contract the CLI relies on: it never fails, logging errors
//! to the error stream and collapsing them to an empty string.

mod error;
mod fetch;
mod options;
mod result;

/// Extraction seam around the readability collaborator.
pub mod extraction;

pub use error::{Error, Result};
pub use options::ExtractOptions;
pub use result::ExtractionResult;

/// Fetch `url` and extract its main readable text.
///
/// Download failures and collaborator failures surface as `Err`; a page
/// with nothing extractable (unreachable content, non-success status,
/// empty document) is `Ok` with an empty string.
pub fn fetch_and_extract(url: &str, options: &ExtractOptions) -> Result<String> {
    let Some(html) = fetch::download(url)? else {
        return Ok(String::new());
    };
    extraction::extract(&html, Some(url), options)
}

/// Fetch `url` and extract its main readable text, never failing.
///
/// Failures are logged to the error stream and collapsed to an empty
/// string; the empty string is the sole failure channel.
#[must_use]
pub fn extract_text(url: &str, options: &ExtractOptions) -> String {
    match fetch_and_extract(url, options) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("Error extracting content from {url}: {err}");
            String::new()
        }
    }
}
