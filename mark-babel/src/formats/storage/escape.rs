//! Reserved macro tag protection.
//!
//! Storage-format tags such as `<ac:rich-text-body>` are not valid CommonMark
//! raw HTML (a tag name cannot contain `:`), so comrak's autolink rule turns
//! them into `<a href="ac:rich-text-body">...</a>`. Before parsing, the colon
//! of every reserved tag is swapped for a placeholder that keeps the tag a
//! valid HTML tag name; after rendering the placeholder is swapped back.
//!
//! The placeholder is chosen per document: the base token, suffixed with the
//! first counter value that does not already occur in the input. The choice is
//! deterministic, so converting the same input twice gives identical output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Namespace prefixes whose tags are protected by default.
pub const DEFAULT_RESERVED_PREFIXES: &[&str] = &["ac"];

const PLACEHOLDER_BASE: &str = "mkCOLONmk";

static DEFAULT_TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    tag_pattern(DEFAULT_RESERVED_PREFIXES).expect("default reserved tag pattern is valid")
});

/// The reserved-tag codec for a single document.
#[derive(Debug, Clone)]
pub struct ReservedTags {
    placeholder: String,
    pattern: Regex,
}

impl ReservedTags {
    /// Codec protecting the default `ac:` namespace in `document`.
    pub fn for_document(document: &str) -> Self {
        Self {
            placeholder: choose_placeholder(document),
            pattern: DEFAULT_TAG_PATTERN.clone(),
        }
    }

    /// Codec protecting every namespace in `prefixes`.
    ///
    /// Falls back to the default namespace when `prefixes` is empty.
    pub fn with_prefixes(document: &str, prefixes: &[String]) -> Result<Self, regex::Error> {
        if prefixes.is_empty() {
            return Ok(Self::for_document(document));
        }
        Ok(Self {
            placeholder: choose_placeholder(document),
            pattern: tag_pattern(prefixes)?,
        })
    }

    /// The token standing in for `:` in protected tags.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace the colon of every reserved tag with the placeholder.
    pub fn encode(&self, document: &str) -> String {
        let replacement = format!("<${{1}}{}${{2}}>", self.placeholder);
        self.pattern
            .replace_all(document, replacement.as_str())
            .into_owned()
    }

    /// Restore every placeholder to a colon.
    pub fn decode(&self, rendered: &str) -> String {
        rendered.replace(&self.placeholder, ":")
    }
}

fn tag_pattern<S: AsRef<str>>(prefixes: &[S]) -> Result<Regex, regex::Error> {
    let alternatives: Vec<String> = prefixes
        .iter()
        .map(|prefix| regex::escape(prefix.as_ref()))
        .collect();
    Regex::new(&format!(r"<(/?(?:{})):(\S+?)>", alternatives.join("|")))
}

fn choose_placeholder(document: &str) -> String {
    if !document.contains(PLACEHOLDER_BASE) {
        return PLACEHOLDER_BASE.to_string();
    }

    (0u64..)
        .map(|n| format!("{PLACEHOLDER_BASE}{n}"))
        .find(|candidate| !document.contains(candidate.as_str()))
        .unwrap_or_else(|| PLACEHOLDER_BASE.to_string())
}
