//! Storage-format serialization (Markdown → storage HTML)
//!
//! Pipeline: Markdown string → reserved tag encoding → Comrak AST →
//! code block override + default HTML → reserved tag decoding →
//! inline comment recovery → storage HTML string

use super::comments::recover_inline_comments;
use super::escape::ReservedTags;
use super::renderer::StorageRenderer;
use super::CompileOptions;
use crate::error::MarkError;
use crate::registry::TemplateRegistry;
use comrak::{parse_document, Arena, Options};
use log::trace;

/// Compile Markdown to storage format with the default options
pub fn compile_markdown(markdown: &str, templates: &TemplateRegistry) -> Result<String, MarkError> {
    compile_markdown_with_options(markdown, templates, &CompileOptions::default())
}

/// Compile Markdown to storage format
pub fn compile_markdown_with_options(
    markdown: &str,
    templates: &TemplateRegistry,
    options: &CompileOptions,
) -> Result<String, MarkError> {
    trace!("rendering markdown:\n{markdown}");

    // Step 1: Hide reserved tags from the autolinker
    let tags = ReservedTags::with_prefixes(markdown, &options.reserved_prefixes)
        .map_err(|e| MarkError::RenderError(format!("Invalid reserved tag prefix: {e}")))?;
    let escaped = tags.encode(markdown);

    // Step 2: Parse Markdown string to Comrak AST
    let arena = Arena::new();
    let comrak_options = storage_comrak_options(options);
    let root = parse_document(&arena, &escaped, &comrak_options);

    // Step 3: Render, overriding code blocks
    let mut output = Vec::new();
    StorageRenderer::new(templates).render(root, &comrak_options, &mut output)?;

    let html = String::from_utf8(output)
        .map_err(|e| MarkError::RenderError(format!("UTF-8 conversion failed: {e}")))?;

    // Step 4: Restore reserved tags, then rebuild inline comment markers
    let html = tags.decode(&html);
    let html = recover_inline_comments(&html);

    trace!("rendered markdown to html:\n{html}");
    Ok(html)
}

fn storage_comrak_options(options: &CompileOptions) -> Options<'static> {
    let mut comrak_options = Options::default();
    comrak_options.extension.table = true;
    comrak_options.extension.strikethrough = true;
    comrak_options.extension.autolink = true;
    comrak_options.extension.header_ids = Some(String::new());
    comrak_options.extension.description_lists = true;
    comrak_options.extension.footnotes = true;
    comrak_options.parse.smart = options.smart_punctuation;
    // Macro markup and inline comment anchors are raw HTML
    comrak_options.render.unsafe_ = true;
    comrak_options
}
