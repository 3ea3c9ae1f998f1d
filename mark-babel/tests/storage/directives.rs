//! Fence info string directive tests

use mark_babel::{parse_language, parse_title, CodeBlockDirective};

#[test]
fn test_language_examples() {
    assert_eq!(parse_language("python"), "python");
    assert_eq!(parse_language("collapse"), "");
    assert_eq!(parse_language("title My Title"), "");
    assert_eq!(parse_language(""), "");
}

#[test]
fn test_title_keeps_separator() {
    assert_eq!(parse_title("python title My Title"), " My Title");
}

#[test]
fn test_collapse_without_language() {
    let directive = CodeBlockDirective::parse("collapse title Output");
    assert_eq!(directive.language, "");
    assert!(directive.collapse);
    assert_eq!(directive.title, " Output");
}

#[test]
fn test_plain_language_has_no_directives() {
    let directive = CodeBlockDirective::parse("rust");
    assert_eq!(directive.language, "rust");
    assert!(!directive.collapse);
    assert_eq!(directive.title, "");
}
