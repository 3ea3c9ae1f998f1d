//! Markdown to wiki storage-format conversion
//!
//!     This crate compiles Markdown into the storage format (XHTML with `ac:` macro elements)
//!     used by the wiki, and converts fetched storage pages back into Markdown.
//!
//!     TLDR: For contributors:
//!         - We never write a Markdown parser or HTML parser ourselves. Parsing and default
//!           rendering are done by comrak, storage HTML is read with html5ever.
//!         - Conversions work on the library ASTs: the compile direction rewrites comrak's AST
//!           before its HTML formatter runs, the reverse direction builds a comrak AST from
//!           the DOM and lets comrak write the Markdown.
//!         - Macro markup is produced by templates only, looked up by name in the registry.
//!         - This is a pure lib: no stdout printing, env vars or process exits. The mark-cli
//!           crate owns those.
//!
//! Architecture
//!
//!     The compile pipeline (see ./formats/storage/serializer.rs):
//!
//!         markdown
//!           → escape reserved macro tags        (formats/storage/escape.rs)
//!           → parse + render with overrides      (formats/storage/renderer.rs)
//!           → unescape reserved macro tags
//!           → recover inline comment markers     (formats/storage/comments.rs)
//!           → storage HTML
//!
//!     Leading heading handling (./headings.rs) works on the raw Markdown and is applied by
//!     the caller, or by [`compile_page`], before compiling. The reverse direction
//!     (./formats/markdown) is a separate pipeline over previously fetched storage HTML.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── directive.rs            # Fence info string directives
//!     ├── headings.rs             # Leading H1 extraction and removal
//!     ├── registry.rs             # TemplateRegistry for macro templates
//!     ├── publish.rs              # Storage HTML → Markdown file
//!     ├── templates               # Macro templates (code, mermaid)
//!     ├── formats
//!     │   ├── storage             # Markdown → storage HTML
//!     │   ├── html                # Storage HTML parsing
//!     │   └── markdown            # Storage HTML → Markdown
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Code Blocks
//!
//!     Fenced code blocks are the one node type that does not use comrak's HTML. The info
//!     string carries the language plus two directives, `collapse` and `title <text>`:
//!
//!         ```go collapse title Example
//!
//!     and the block is emitted as a code macro (or a mermaid macro for `mermaid` blocks).
//!     Directive parsing is substring based and never fails, see ./directive.rs.

pub mod directive;
pub mod error;
pub mod formats;
pub mod headings;
pub mod publish;
pub mod registry;
pub mod templates;

pub use directive::{parse_language, parse_title, CodeBlockDirective};
pub use error::MarkError;
pub use formats::markdown::storage_to_markdown;
pub use formats::storage::{
    compile_markdown, compile_markdown_with_options, compile_page, CompileOptions, PageOptions,
    StoragePage,
};
pub use headings::{drop_leading_h1, extract_leading_h1};
pub use publish::html_to_markdown_file;
pub use registry::TemplateRegistry;
pub use templates::{CodeMacro, Template};
