//! Inline comment marker recovery.
//!
//! An inline comment in Markdown is written as a comment carrying the comment
//! id, the commented text, and a closing comment:
//!
//! ```text
//! <!-- inline comment_id='abc-123' -->flagged text<!-- /inline -->
//! ```
//!
//! The wiki expects `<span class="inline-comment-marker" data-ref="abc-123">`
//! around the text instead. All anchors are found in one scan of the rendered
//! document and replaced in that same pass, so replacement output is never
//! rescanned. An opening comment without a closing one is left untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static INLINE_COMMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--[^>]*comment_id='(?P<comment_id>[^']*)'[^>]*-->(?P<body>.*?)<!--[^>]*-->")
        .expect("inline comment pattern is valid")
});

/// Rewrite every bracketing-comment anchor into an inline comment marker span.
pub fn recover_inline_comments(html: &str) -> String {
    INLINE_COMMENT
        .replace_all(html, |caps: &Captures| {
            inline_comment_marker(&caps["comment_id"], &caps["body"])
        })
        .into_owned()
}

/// Closing comment of an inline comment anchor, as written by the reverse
/// converter.
pub const INLINE_COMMENT_CLOSE: &str = "<!-- /inline -->";

/// Opening comment of an inline comment anchor, as written by the reverse
/// converter.
pub fn inline_comment_open(comment_id: &str) -> String {
    format!("<!-- inline comment_id='{comment_id}' -->")
}

/// The storage-format span for a single inline comment.
pub fn inline_comment_marker(comment_id: &str, body: &str) -> String {
    format!(r#"<span class="inline-comment-marker" data-ref="{comment_id}">{body}</span>"#)
}
