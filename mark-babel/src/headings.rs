//! Leading H1 handling.
//!
//! Pages carry their title separately from their body, so a document that
//! opens with `# Title` would show the title twice. These helpers read or strip
//! that one heading.
//!
//! Only ever pass the whole document. The patterns are anchored at the start
//! of the input, so running them over single lines would strip every
//! top-level heading instead of just the first.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_H1: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[^#].*\n").expect("leading h1 pattern is valid"));

static LEADING_H1_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[^#]\s*(.*)\s*\n").expect("leading h1 text pattern is valid"));

/// Returns the text of the document's leading `# Heading`, or an empty string.
pub fn extract_leading_h1(markdown: &str) -> String {
    LEADING_H1_TEXT
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Removes the document's leading `# Heading` line, if there is one.
pub fn drop_leading_h1(markdown: &str) -> String {
    LEADING_H1.replace(markdown, "").into_owned()
}
