//! Inline comment anchor tests
//!
//! An anchor written as bracketing HTML comments must come out of the full
//! pipeline as exactly one marker span per anchor.

use crate::common::compile;

fn count_spans(html: &str) -> usize {
    html.matches(r#"<span class="inline-comment-marker""#).count()
}

#[test]
fn test_single_anchor_recovered() {
    let html = compile(
        "See <!-- inline comment_id='abc-123' -->flagged text<!-- /inline --> here.\n",
    );

    assert_eq!(
        html,
        "<p>See <span class=\"inline-comment-marker\" data-ref=\"abc-123\">flagged text</span> here.</p>\n"
    );
    assert_eq!(count_spans(&html), 1);
}

#[test]
fn test_no_anchors_no_spans() {
    let html = compile("Plain text with a <!-- regular comment --> inside.\n");
    assert_eq!(count_spans(&html), 0);
    assert!(html.contains("<!-- regular comment -->"));
}

#[test]
fn test_multiple_anchors() {
    let md = concat!(
        "First <!-- inline comment_id='one' -->alpha<!-- /inline --> and ",
        "<!-- inline comment_id='two' -->beta<!-- /inline -->.\n\n",
        "Second paragraph <!-- inline comment_id='three' -->gamma<!-- /inline -->.\n",
    );
    let html = compile(md);

    assert_eq!(count_spans(&html), 3);
    assert!(html.contains(r#"data-ref="one">alpha</span>"#));
    assert!(html.contains(r#"data-ref="two">beta</span>"#));
    assert!(html.contains(r#"data-ref="three">gamma</span>"#));
}

#[test]
fn test_anchor_with_formatted_body() {
    let html = compile("<!-- inline comment_id='f' -->**bold** words<!-- /inline --> after\n");
    assert_eq!(count_spans(&html), 1);
    assert!(html.contains("data-ref=\"f\">"));
    assert!(html.contains("words</span>"));
}

#[test]
fn test_unterminated_anchor_left_alone() {
    let html = compile("Text <!-- inline comment_id='open' -->never closed.\n");
    assert_eq!(count_spans(&html), 0);
    assert!(html.contains("<!-- inline comment_id='open' -->"));
}
