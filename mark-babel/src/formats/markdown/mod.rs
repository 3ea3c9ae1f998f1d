//! Markdown output
//!
//! This module converts storage-format HTML back to CommonMark Markdown, the
//! reverse of [`crate::formats::storage`].
//!
//! # Library Choice
//!
//! We use the `comrak` crate for serialization, the same crate that parses
//! Markdown on the way in. The storage DOM is rebuilt as a comrak AST and
//! written with `format_commonmark`, so escaping and list markers follow
//! comrak's rules.
//!
//! # Element Mapping Table
//!
//! | Storage Element                 | Markdown Equivalent            | Notes                                  |
//! |---------------------------------|--------------------------------|----------------------------------------|
//! | `p`, `h1`-`h6`                  | Paragraph, ATX heading         | Direct mapping                         |
//! | `ul`, `ol`, `li`                | List (`-` or `1.`)             | `start` kept for ordered lists         |
//! | `pre`                           | Fenced code block              | `language-*` class → info string       |
//! | code macro                      | Fenced code block              | Parameters → info string directives    |
//! | mermaid macro                   | Fenced `mermaid` code block    |                                        |
//! | `blockquote`, `hr`              | Block quote, thematic break    |                                        |
//! | `table`                         | GFM table                      | First row is the header row            |
//! | `dl`                            | **Term** paragraph + content   | Not native Markdown                    |
//! | `strong`, `em`, `del`, `code`   | `**`, `*`, `~~`, backticks     |                                        |
//! | `a`, `img`, `ac:image`          | Link, image                    | Empty anchors are dropped              |
//! | inline comment marker span      | Bracketing HTML comments       | Recompiles into the same span          |
//! | HTML comment                    | HTML comment                   | Kept verbatim                          |
//! | Other macros and containers     | Their content                  | Parameters are dropped                 |
//!
//! # Lossy Conversions
//!
//! - Layout containers and unknown macros → flattened content
//! - Table cell blocks → inline content separated by spaces
//! - Attributes (classes, ids, styles) → lost
//! - Code titles with leading whitespace → single space after `title`

pub(crate) mod macros;
pub mod serializer;

pub use serializer::storage_to_markdown;
