use pagetext::extraction::{baseline_text, extract};
use pagetext::ExtractOptions;

fn article_html() -> String {
    // Enough prose that the article is an unambiguous main candidate.
    let para = "The committee reviewed the annual report in detail and \
                published its findings alongside the supporting data. ";
    format!(
        r#"<html><head><title>Report</title></head><body>
            <nav><a href="/">Home</a> <a href="/reports">Reports</a></nav>
            <article>
                <h1>Annual Report</h1>
                <p>ARTICLE_MARKER {para}</p>
                <p>{para}{para}</p>
                <p>{para}{para}</p>
            </article>
            <footer>Copyright</footer>
        </body></html>"#
    )
}

static COMMENTED_PAGE: &str = r#"<html><body>
    <div><p>BODY_MARKER A short update note for readers.</p></div>
    <div id="comments"><p>COMMENT_MARKER Great post, thanks!</p></div>
</body></html>"#;

static TABLED_PAGE: &str = r#"<html><body>
    <div><p>BODY_MARKER Figures for the quarter follow.</p></div>
    <table><tr><th>Quarter</th><td>TABLE_MARKER</td></tr></table>
</body></html>"#;

#[test]
fn extract_returns_main_article_text() {
    let html = article_html();
    let text = extract(&html, Some("https://example.com/report"), &ExtractOptions::default())
        .expect("expected Ok(_)");

    assert!(text.contains("ARTICLE_MARKER"));
    assert!(text.contains("committee reviewed the annual report"));
}

#[test]
fn extract_is_deterministic_for_identical_input() {
    let html = article_html();
    let options = ExtractOptions::default();

    let first =
        extract(&html, Some("https://example.com/report"), &options).expect("expected Ok(_)");
    let second =
        extract(&html, Some("https://example.com/report"), &options).expect("expected Ok(_)");

    assert_eq!(first, second);
}

#[test]
fn extract_falls_back_to_baseline_on_unstructured_pages() {
    // Too little structure for a readability candidate; the baseline
    // recovery still returns the visible text.
    let html = r#"<html><body><div>FALLBACK_MARKER tiny note</div></body></html>"#;
    let text = extract(html, None, &ExtractOptions::default()).expect("expected Ok(_)");

    assert!(text.contains("FALLBACK_MARKER"));
}

#[test]
fn extract_of_empty_document_yields_empty_text() {
    let text = extract("", None, &ExtractOptions::default()).expect("expected Ok(_)");
    assert!(text.is_empty());
}

#[test]
fn extract_without_fallback_never_panics_and_yields_no_text_on_empty_input() {
    let options = ExtractOptions {
        enable_fallback: false,
        ..ExtractOptions::default()
    };

    match extract("", None, &options) {
        Ok(text) => assert!(text.is_empty()),
        Err(_) => {} // collaborator rejection is an acceptable outcome here
    }
}

#[test]
fn extract_preserves_documents_beyond_one_hundred_thousand_characters() {
    let para = "Long form writing keeps flowing with sentence after sentence of plain prose. ";
    let body: String = (0..1600).map(|_| format!("<p>{para}</p>")).collect();
    let html = format!("<html><body><article>{body}</article></body></html>");

    let text = extract(&html, None, &ExtractOptions::default()).expect("expected Ok(_)");
    assert!(text.chars().count() > 100_000);
}

#[test]
fn baseline_excludes_comment_sections_by_default() {
    let text = baseline_text(COMMENTED_PAGE, &ExtractOptions::default());

    assert!(text.contains("BODY_MARKER"));
    assert!(!text.contains("COMMENT_MARKER"));
}

#[test]
fn baseline_keeps_comment_sections_when_enabled() {
    let options = ExtractOptions {
        include_comments: true,
        ..ExtractOptions::default()
    };
    let text = baseline_text(COMMENTED_PAGE, &options);

    assert!(text.contains("BODY_MARKER"));
    assert!(text.contains("COMMENT_MARKER"));
}

#[test]
fn baseline_keeps_table_content_by_default() {
    let text = baseline_text(TABLED_PAGE, &ExtractOptions::default());

    assert!(text.contains("BODY_MARKER"));
    assert!(text.contains("TABLE_MARKER"));
}

#[test]
fn baseline_drops_table_content_when_disabled() {
    let options = ExtractOptions {
        include_tables: false,
        ..ExtractOptions::default()
    };
    let text = baseline_text(TABLED_PAGE, &options);

    assert!(text.contains("BODY_MARKER"));
    assert!(!text.contains("TABLE_MARKER"));
}

#[test]
fn baseline_never_leaks_script_text() {
    let html = r#"<html><body>
        <p>BODY_MARKER visible text</p>
        <script>var secret = "SCRIPT_MARKER";</script>
        <style>.hidden { display: none; }</style>
    </body></html>"#;
    let text = baseline_text(html, &ExtractOptions::default());

    assert!(text.contains("BODY_MARKER"));
    assert!(!text.contains("SCRIPT_MARKER"));
    assert!(!text.contains("display: none"));
}
