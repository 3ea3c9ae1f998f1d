//! Storage format tests
//!
//! Tests for Markdown → storage HTML compilation through the public API.

mod code_blocks;
mod comments;
mod directives;
mod escape;
mod headings;
mod pipeline;
