//! Full pipeline tests over the kitchensink fixture

use crate::common::{compile, fixture};
use mark_babel::{compile_page, CompileOptions, PageOptions, TemplateRegistry};

#[test]
fn test_render_is_idempotent() {
    let md = fixture("kitchensink.md");
    assert_eq!(compile(&md), compile(&md));
}

#[test]
fn test_kitchensink_output() {
    let html = compile(&fixture("kitchensink.md"));

    // one code macro, one diagram macro
    assert_eq!(html.matches(r#"ac:name="code""#).count(), 1);
    assert_eq!(
        html.matches(r#"ac:name="cloudscript-confluence-mermaid""#).count(),
        1
    );
    assert!(html.contains(r#"<ac:parameter ac:name="title">Install script</ac:parameter>"#));

    assert_eq!(html.matches("inline-comment-marker").count(), 1);
    assert!(html.contains(r#"data-ref="rn-42">this sentence</span>"#));

    assert!(html.contains("<ac:rich-text-body>"));
    assert!(html.contains("<table>"));
    assert!(html.contains("<dl>"));
    assert!(html.contains("footnote"));
    assert!(html.contains("<del>removed</del>"));
    assert!(!html.contains("mkCOLONmk"));
}

#[test]
fn test_page_from_fixture() {
    let page = compile_page(
        &fixture("kitchensink.md"),
        &TemplateRegistry::default(),
        &CompileOptions::default(),
        &PageOptions {
            drop_leading_h1: true,
            title_from_leading_h1: true,
        },
    )
    .unwrap();

    assert_eq!(page.title, "Release Notes");
    assert!(!page.body.contains("Release Notes"));
    assert!(page.body.starts_with("<p>Intro paragraph"));
}
