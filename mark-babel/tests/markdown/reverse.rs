//! Reverse conversion tests (storage HTML → Markdown)

use mark_babel::storage_to_markdown;

fn to_md(html: &str) -> String {
    storage_to_markdown(html).expect("Should convert storage html")
}

#[test]
fn test_comment_nodes_are_kept() {
    let md = to_md("<p>Before</p><!-- keep me --><p>After</p>");
    assert!(md.contains("<!-- keep me -->"));
    assert!(md.contains("Before"));
    assert!(md.contains("After"));
}

#[test]
fn test_marker_span_becomes_anchor() {
    let md = to_md(
        r#"<p>See <span class="inline-comment-marker" data-ref="abc-123">flagged text</span> here.</p>"#,
    );
    assert_eq!(
        md,
        "See <!-- inline comment_id='abc-123' -->flagged text<!-- /inline --> here.\n"
    );
}

#[test]
fn test_code_macro_with_title() {
    let md = to_md(concat!(
        r#"<ac:structured-macro ac:name="code">"#,
        r#"<ac:parameter ac:name="language">sh</ac:parameter>"#,
        r#"<ac:parameter ac:name="collapse">false</ac:parameter>"#,
        r#"<ac:parameter ac:name="title">Install script</ac:parameter>"#,
        r#"<ac:plain-text-body><![CDATA[tar xzf tool.tar.gz]]></ac:plain-text-body>"#,
        r#"</ac:structured-macro>"#,
    ));
    assert!(md.contains("sh title Install script\ntar xzf tool.tar.gz\n"));
    assert!(!md.contains("collapse"));
}

#[test]
fn test_attachment_image() {
    let md = to_md(
        r#"<p><ac:image ac:alt="diagram"><ri:attachment ri:filename="arch.png"></ri:attachment></ac:image></p>"#,
    );
    assert_eq!(md, "![diagram](arch.png)\n");
}

#[test]
fn test_page_link_without_body() {
    let md = to_md(
        r#"<p>See <ac:link><ri:page ri:content-title="Other Page"></ri:page></ac:link>.</p>"#,
    );
    assert_eq!(md, "See Other Page.\n");
}

#[test]
fn test_nested_list() {
    let md = to_md("<ul><li>outer<ul><li>inner</li></ul></li></ul>");
    assert!(md.contains("- outer\n"));
    assert!(md.contains("  - inner\n"));
}

#[test]
fn test_empty_body() {
    assert!(to_md("").trim().is_empty());
}

#[test]
fn test_block_content_survives_conversion() {
    let md = to_md("<h1>Title</h1><h2>Subtitle</h2><ul><li>one</li><li>two</li></ul><p>Body text</p>");
    assert!(!md.trim().is_empty());
    assert!(md.starts_with("# Title\n\n## Subtitle\n\n"));
    assert!(md.contains("- one\n- two\n"));
    assert!(md.ends_with("Body text\n"));
}
