//! Markdown file publishing tests

use mark_babel::{html_to_markdown_file, MarkError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_persists_converted_markdown() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("page.md");

    html_to_markdown_file(
        r#"<h2>Notes</h2><p>Read <span class="inline-comment-marker" data-ref="c1">this</span>.</p>"#,
        &path,
    )
    .expect("Should write markdown");

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "## Notes\n\nRead <!-- inline comment_id='c1' -->this<!-- /inline -->.\n"
    );
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("page.md");

    let result = html_to_markdown_file("<p>x</p>", &path);
    assert!(matches!(result, Err(MarkError::IoError(_))));
    assert!(!path.exists());
}
