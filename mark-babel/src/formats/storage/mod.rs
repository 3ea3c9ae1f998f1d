//! Storage format implementation
//!
//! This module converts extended Markdown into the wiki's storage format: XHTML
//! plus the wiki's own `ac:` macro vocabulary.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing and HTML rendering. Only code
//! blocks get custom output (see [`renderer`]); everything else is comrak's
//! default HTML.
//!
//! # Element Mapping Table
//!
//! | Markdown                   | Storage Format                                      | Notes                                   |
//! |----------------------------|-----------------------------------------------------|-----------------------------------------|
//! | Fenced/indented code block | `<ac:structured-macro ac:name="code">`              | Info string → language/collapse/title   |
//! | ```` ```mermaid ````       | `<ac:structured-macro ac:name="cloudscript-...">`   | Diagram macro, source shown             |
//! | `<ac:tag>` raw HTML        | `<ac:tag>` verbatim                                 | Protected from autolinking              |
//! | Inline comment anchor      | `<span class="inline-comment-marker" data-ref=..>`  | Rebuilt after rendering                 |
//! | Everything else            | comrak HTML                                         | Tables, footnotes, heading ids, ...     |
//!
//! # Pipeline
//!
//! 1. Encode reserved tags ([`escape`])
//! 2. Parse and render, overriding code blocks ([`renderer`])
//! 3. Decode reserved tags
//! 4. Recover inline comment markers ([`comments`])
//!
//! Leading heading handling ([`crate::headings`]) is not part of this
//! pipeline. [`compile_page`] applies it to the raw Markdown first.
//!
//! Every call is self-contained: no global state, no counters, no timestamps.
//! The same input always yields byte-identical output.

pub mod comments;
pub mod escape;
pub mod renderer;
pub mod serializer;

use crate::error::MarkError;
use crate::headings::{drop_leading_h1, extract_leading_h1};
use crate::registry::TemplateRegistry;
use serde::Serialize;

pub use serializer::{compile_markdown, compile_markdown_with_options};

/// Options for Markdown → storage compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Convert quotes and dashes to typographic punctuation
    pub smart_punctuation: bool,
    /// Namespace prefixes whose tags are passed through untouched
    pub reserved_prefixes: Vec<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            smart_punctuation: true,
            reserved_prefixes: escape::DEFAULT_RESERVED_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
        }
    }
}

/// Options controlling how a page title is taken from the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Remove the leading `# Title` line from the body
    pub drop_leading_h1: bool,
    /// Use the leading `# Title` text as the page title
    pub title_from_leading_h1: bool,
}

/// A compiled page: title plus storage-format body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoragePage {
    /// Page title, empty when none was found
    pub title: String,
    /// Storage-format body
    pub body: String,
}

/// Compile a whole document into a page.
///
/// The leading H1 is read and optionally dropped from the raw Markdown before
/// the body is compiled.
pub fn compile_page(
    markdown: &str,
    templates: &TemplateRegistry,
    compile: &CompileOptions,
    page: &PageOptions,
) -> Result<StoragePage, MarkError> {
    let title = if page.title_from_leading_h1 {
        extract_leading_h1(markdown)
    } else {
        String::new()
    };

    let body = if page.drop_leading_h1 {
        let dropped = drop_leading_h1(markdown);
        compile_markdown_with_options(&dropped, templates, compile)?
    } else {
        compile_markdown_with_options(markdown, templates, compile)?
    };

    Ok(StoragePage { title, body })
}
