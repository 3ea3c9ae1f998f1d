//! Storage-format node rendering (the code block override)
//!
//! The renderer walks the comrak AST depth first, seeing every node once on
//! the way in (`entering == true`) and once on the way out. Code blocks are
//! rendered through the code macro template; every other node type is left to
//! comrak's default HTML formatter.
//!
//! comrak's formatter has no per-node override hook that is stable across
//! releases, so the override is applied to the tree itself: each code block
//! node is replaced by a raw HTML block holding the template output, which the
//! default formatter then writes out verbatim (`render.unsafe_` must be set).

use crate::directive::CodeBlockDirective;
use crate::error::MarkError;
use crate::registry::TemplateRegistry;
use crate::templates::{CodeMacro, CODE_MACRO_TEMPLATE};
use comrak::arena_tree::NodeEdge;
use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{format_html, Options};
use log::debug;
use std::io::Write;

/// What the walk does after a node has been rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStatus {
    /// Continue with the node's children (or its next sibling)
    GoToNext,
    /// Do not descend into the node's children
    SkipChildren,
}

/// Renders a comrak AST to storage-format HTML.
///
/// Holds the caller's template registry by shared reference; rendering never
/// mutates it.
pub struct StorageRenderer<'r> {
    templates: &'r TemplateRegistry,
}

impl<'r> StorageRenderer<'r> {
    pub fn new(templates: &'r TemplateRegistry) -> Self {
        Self { templates }
    }

    /// Render the tree under `root` into `output`.
    pub fn render<'a>(
        &self,
        root: &'a AstNode<'a>,
        options: &Options,
        output: &mut dyn Write,
    ) -> Result<(), MarkError> {
        self.walk(root)?;

        format_html(root, options, output)
            .map_err(|e| MarkError::RenderError(format!("HTML formatting failed: {e}")))
    }

    fn walk<'a>(&self, root: &'a AstNode<'a>) -> Result<(), MarkError> {
        let mut edges = root.traverse();

        while let Some(edge) = edges.next() {
            let (node, entering) = match edge {
                NodeEdge::Start(node) => (node, true),
                NodeEdge::End(node) => (node, false),
            };

            if self.render_node(node, entering)? == WalkStatus::SkipChildren {
                // fast-forward to this node's closing edge
                for edge in edges.by_ref() {
                    if let NodeEdge::End(closed) = edge {
                        if std::ptr::eq(closed, node) {
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Render a single node.
    ///
    /// Only code blocks are handled here, whether entering or leaving. Any
    /// other node is delegated untouched to the default formatter.
    pub fn render_node<'a>(
        &self,
        node: &'a AstNode<'a>,
        _entering: bool,
    ) -> Result<WalkStatus, MarkError> {
        let code_block = match &node.data.borrow().value {
            NodeValue::CodeBlock(code_block) => {
                Some((code_block.info.clone(), code_block.literal.clone()))
            }
            _ => None,
        };

        let Some((info, literal)) = code_block else {
            return Ok(WalkStatus::GoToNext);
        };

        let markup = self.render_code_block(&info, &literal)?;
        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: markup,
        });

        Ok(WalkStatus::SkipChildren)
    }

    fn render_code_block(&self, info: &str, literal: &str) -> Result<String, MarkError> {
        let directive = CodeBlockDirective::parse(info);
        let data = CodeMacro {
            language: directive.language,
            collapse: directive.collapse,
            title: directive.title,
            text: literal.strip_suffix('\n').unwrap_or(literal).to_string(),
        };

        debug!(
            "rendering code block: language={:?} collapse={} title={:?}",
            data.language, data.collapse, data.title
        );

        let mut buffer = Vec::new();
        self.templates
            .execute(CODE_MACRO_TEMPLATE, &data, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| MarkError::TemplateError(format!("template produced invalid UTF-8: {e}")))
    }
}
