//! Code fence info string directives
//!
//! A fence info string has the loose shape `language? "collapse"? ("title" <any>*)?`.
//! Parsing never fails: anything unexpected degrades to empty fields.
//!
//! Both `collapse` and `title` are found by plain substring search, so a
//! language name that happens to contain either word is read as the directive
//! too (`subtitle` sets a title). This is kept as-is so existing documents
//! render the same way.

/// Metadata carried by a fenced code block's info string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlockDirective {
    pub language: String,
    pub collapse: bool,
    pub title: String,
}

impl CodeBlockDirective {
    /// Derive all directive fields from a raw info string.
    pub fn parse(info: &str) -> Self {
        Self {
            language: parse_language(info),
            collapse: info.contains(COLLAPSE_KEYWORD),
            title: parse_title(info),
        }
    }
}

const COLLAPSE_KEYWORD: &str = "collapse";
const TITLE_KEYWORD: &str = "title";

/// Returns the first whitespace-delimited token of `info`, or an empty string
/// when that token is a directive keyword rather than a language.
pub fn parse_language(info: &str) -> String {
    let first = info.split_whitespace().next().unwrap_or_default();

    if first == COLLAPSE_KEYWORD || first == TITLE_KEYWORD {
        return String::new();
    }

    first.to_string()
}

/// Returns everything after the first `title` keyword, separator included.
///
/// `"python title My Title"` yields `" My Title"`; callers that want the bare
/// text trim it themselves. A keyword followed by at most one separator
/// character has no title.
pub fn parse_title(info: &str) -> String {
    let Some(index) = info.find(TITLE_KEYWORD) else {
        return String::new();
    };
    let rest = &info[index + TITLE_KEYWORD.len()..];
    if rest.chars().nth(1).is_none() {
        return String::new();
    }
    rest.to_string()
}
