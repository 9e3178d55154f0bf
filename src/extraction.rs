//! Content extraction.
//!
//! The heavy lifting (candidate scoring, boilerplate detection, entity
//! and encoding handling) is delegated to `dom_smoothie`'s Readability
//! implementation. This module owns the seam around it: document
//! pre-cleaning according to `ExtractOptions`, baseline recovery when
//! the readability pass comes back empty, and whitespace normalization
//! of the final text.

use dom_query::Document;
use dom_smoothie::{Config, Readability};

use crate::error::{Error, Result};
use crate::options::ExtractOptions;

/// Elements that never carry readable text.
static NOISE_SELECTOR: &str = "script, style, noscript, template";

/// Containers that hold reader comment sections.
///
/// Patterns follow the comment-section selectors used by trafilatura-
/// family extractors: WordPress comment lists, Disqus mounts, generic
/// `comment`-prefixed ids and classes.
static COMMENT_SECTION_SELECTOR: &str = "#comments, #respond, #disqus_thread, \
    [id^=\"comment\"], [class^=\"comment\"], [class*=\"comment-list\"], \
    [class*=\"commentlist\"], [class*=\"post-comments\"], [class*=\"article-comments\"]";

/// Character thresholds handed to the readability pass. The lenient
/// value keeps borderline blocks when recall is favored.
const CHAR_THRESHOLD_DEFAULT: usize = 500;
const CHAR_THRESHOLD_RECALL: usize = 100;

/// Extract the main readable text from an HTML document.
///
/// `url` is the document's own URL, used by the readability pass to
/// resolve relative links. An empty result is `Ok`: nothing
/// extractable is a normal outcome, not an error. With
/// `enable_fallback` unset, a collaborator failure surfaces as
/// `Error::Readability` instead of being recovered.
pub fn extract(html: &str, url: Option<&str>, options: &ExtractOptions) -> Result<String> {
    let doc = Document::from(html);
    pre_clean(&doc, options);
    let cleaned = doc.html().to_string();

    match readability_text(&cleaned, url, options) {
        Ok(text) if !text.is_empty() => return Ok(text),
        Ok(_) => tracing::debug!("readability pass produced no text"),
        Err(err) if options.enable_fallback => {
            tracing::debug!("readability pass failed: {err}");
        }
        Err(err) => return Err(err),
    }

    if options.enable_fallback {
        return Ok(body_text(&doc));
    }
    Ok(String::new())
}

/// Baseline extraction on its own: pre-clean `html` and return the body
/// text. This is the recovery path `extract` takes when the readability
/// pass yields nothing.
#[must_use]
pub fn baseline_text(html: &str, options: &ExtractOptions) -> String {
    let doc = Document::from(html);
    pre_clean(&doc, options);
    body_text(&doc)
}

/// Remove elements the extraction policy excludes before handing the
/// document to the readability pass.
fn pre_clean(doc: &Document, options: &ExtractOptions) {
    doc.select(NOISE_SELECTOR).remove();
    if !options.include_comments {
        doc.select(COMMENT_SECTION_SELECTOR).remove();
    }
    if !options.include_tables {
        doc.select("table").remove();
    }
}

/// Primary extraction: run the cleaned document through Readability.
fn readability_text(html: &str, url: Option<&str>, options: &ExtractOptions) -> Result<String> {
    let config = Config {
        char_threshold: if options.favor_recall {
            CHAR_THRESHOLD_RECALL
        } else {
            CHAR_THRESHOLD_DEFAULT
        },
        ..Config::default()
    };

    let mut readability =
        Readability::new(html, url, Some(config)).map_err(|err| Error::Readability(err.to_string()))?;
    let article = readability
        .parse()
        .map_err(|err| Error::Readability(err.to_string()))?;

    Ok(normalize_text(&article.text_content))
}

/// Text content of `body` (the parser synthesizes one for fragments),
/// normalized.
fn body_text(doc: &Document) -> String {
    let body = doc.select("body");
    let text = if body.nodes().is_empty() {
        doc.select("html").text()
    } else {
        body.text()
    };
    normalize_text(&text)
}

/// Normalize extracted text: trim lines, collapse intra-line whitespace
/// runs, drop empty lines.
fn normalize_text(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    lines.join("\n")
}
