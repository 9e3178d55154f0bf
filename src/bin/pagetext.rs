//! CLI envelope: fetch one URL, print a JSON result to stdout.
//!
//! Exit status is 1 when no URL argument is given. Soft failures
//! (unfetchable page, nothing extracted) exit 0 and are reported in the
//! JSON payload. Stdout carries exactly one JSON document per run; all
//! diagnostics go to stderr.

use std::env;
use std::process;

use pagetext::{extract_text, ExtractOptions, ExtractionResult};
use tracing_subscriber::EnvFilter;

fn main() {
    // Stdout is reserved for the JSON document.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let Some(url) = env::args().nth(1) else {
        println!("{}", serde_json::json!({ "error": "URL is required" }));
        process::exit(1);
    };

    let text = extract_text(&url, &ExtractOptions::default());
    let result = if text.is_empty() {
        ExtractionResult::failure(url, "Failed to extract content from URL")
    } else {
        ExtractionResult::ok(url, text)
    };

    println!("{}", serde_json::to_string(&result).unwrap_or_default());
}
