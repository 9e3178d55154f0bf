//! Configuration options for content extraction.
//!
//! `ExtractOptions` replaces process-wide library configuration with an
//! explicit record passed into each extraction call.

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. `Default::default()`
/// encodes the fixed policy the CLI runs with.
///
/// # Example
///
/// ```rust
/// use pagetext::ExtractOptions;
///
/// // The fixed CLI policy
/// let options = ExtractOptions::default();
///
/// // Customize specific fields
/// let options = ExtractOptions {
///     include_comments: true,
///     ..ExtractOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ExtractOptions {
    /// Include comment sections in extraction.
    ///
    /// Default: `false`
    pub include_comments: bool,

    /// Include table content in extraction.
    ///
    /// Default: `true`
    pub include_tables: bool,

    /// Recover text with baseline extraction when the readability pass
    /// yields nothing usable.
    ///
    /// Default: `true`
    pub enable_fallback: bool,

    /// Tune extraction for higher recall (fewer missed content blocks).
    ///
    /// When enabled, the readability pass runs with a more lenient
    /// character threshold so borderline content is kept. Downstream
    /// consumers tolerate noise better than truncation.
    ///
    /// Default: `true`
    pub favor_recall: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_comments: false,
            include_tables: true,
            enable_fallback: true,
            favor_recall: true,
        }
    }
}
