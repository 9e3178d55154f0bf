//! The JSON envelope describing one fetch-and-extract invocation.

use serde::{Deserialize, Serialize};

/// Result of one fetch-and-extract invocation.
///
/// Exactly one of `content`+`length` or `error` is present. The
/// constructors are the only intended way to build a value, so the
/// invariant holds by construction; absent fields are omitted from the
/// serialized JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Whether extraction produced text.
    pub success: bool,

    /// The input URL, echoed back verbatim.
    pub url: String,

    /// Extracted plain text. Unbounded; never truncated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Character count of `content` (scalar values, not bytes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Human-readable failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Build a success envelope from extracted text.
    #[must_use]
    pub fn ok(url: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            success: true,
            url: url.into(),
            length: Some(content.chars().count()),
            content: Some(content),
            error: None,
        }
    }

    /// Build a failure envelope carrying a reason.
    #[must_use]
    pub fn failure(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: url.into(),
            content: None,
            length: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_and_failure_populate_disjoint_fields() {
        let ok = ExtractionResult::ok("https://example.com", "abc");
        assert!(ok.success);
        assert_eq!(ok.content.as_deref(), Some("abc"));
        assert_eq!(ok.length, Some(3));
        assert!(ok.error.is_none());

        let failure = ExtractionResult::failure("https://example.com", "boom");
        assert!(!failure.success);
        assert!(failure.content.is_none());
        assert!(failure.length.is_none());
        assert_eq!(failure.error.as_deref(), Some("boom"));
    }
}
