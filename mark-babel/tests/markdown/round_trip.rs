//! Round trips: Markdown → storage → Markdown → storage
//!
//! The Markdown text is normalized by the reverse direction, so the checks
//! compare the storage output of both compilations.

use crate::common::{compile, fixture};
use mark_babel::storage_to_markdown;

fn recompile(markdown: &str) -> (String, String) {
    let first = compile(markdown);
    let reversed = storage_to_markdown(&first).expect("Should convert storage html");
    (first, compile(&reversed))
}

#[test]
fn test_code_macro_round_trip() {
    let (first, second) = recompile("```go collapse title Example\nfmt.Println()\n```\n");
    assert_eq!(first, second);
}

#[test]
fn test_inline_comment_round_trip() {
    let (first, second) = recompile(
        "See <!-- inline comment_id='abc-123' -->flagged text<!-- /inline --> here.\n",
    );
    assert_eq!(first, second);
    assert!(second.contains(r#"data-ref="abc-123">flagged text</span>"#));
}

#[test]
fn test_inline_formatting_round_trip() {
    let (first, second) = recompile("Some **bold** and *emphasis* with `code`.\n");
    assert_eq!(first, second);
}

#[test]
fn test_fixture_keeps_macros_and_anchors() {
    let (first, second) = recompile(&fixture("kitchensink.md"));

    for html in [&first, &second] {
        assert_eq!(html.matches(r#"ac:name="code""#).count(), 1);
        assert_eq!(html.matches("inline-comment-marker").count(), 1);
        assert!(html.contains(r#"<ac:parameter ac:name="collapse">true</ac:parameter>"#));
    }
}
