//! Page download.
//!
//! Fetching is deliberately thin: one blocking GET per process, no
//! retries, no cancellation, the client's default timeout. A response
//! without usable content is a normal outcome (`Ok(None)`), not an
//! error; only transport-level failures surface as `Err`.

use crate::error::Result;

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Download the resource at `url` as text.
///
/// Returns `Ok(None)` when the server answers with a non-success status
/// or an empty body. The URL string is handed to the HTTP client as-is;
/// malformed URLs fail inside the client and surface as transport
/// errors.
pub fn download(url: &str) -> Result<Option<String>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        tracing::debug!("{url} answered {status}, treating as no content");
        return Ok(None);
    }

    // Charset detection and decoding happen inside the client.
    let body = response.text()?;
    if body.trim().is_empty() {
        tracing::debug!("{url} returned an empty body");
        return Ok(None);
    }

    Ok(Some(body))
}
