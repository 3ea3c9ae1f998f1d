//! Markdown serialization (storage HTML → Markdown)
//!
//! Converts storage-format HTML back to CommonMark Markdown.
//! Pipeline: storage HTML → RcDom → Comrak AST → Markdown string

use super::macros::{
    image_source, info_string, is_macro_parameter, linked_page_title, read_code_macro,
};
use crate::error::MarkError;
use crate::formats::html::parser::{
    attribute, element_name, has_class, parse_storage, text_content,
};
use crate::formats::storage::comments::{inline_comment_open, INLINE_COMMENT_CLOSE};
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeHtmlBlock,
    NodeLink, NodeList, NodeTable, NodeValue, TableAlignment,
};
use comrak::{format_commonmark, Arena, Options};
use log::trace;
use markup5ever_rcdom::{Handle, NodeData};
use std::cell::RefCell;

/// Serialize storage-format HTML to Markdown
pub fn storage_to_markdown(html: &str) -> Result<String, MarkError> {
    trace!("converting storage html:\n{html}");

    // Step 1: storage HTML → RcDom
    // The document must outlive every handle taken from it
    let document = parse_storage(html)
        .ok_or_else(|| MarkError::ParseError("Storage HTML has no body".to_string()))?;

    // Step 2: RcDom → Comrak AST
    let arena = Arena::new();
    let builder = AstBuilder { arena: &arena };
    let root = builder.alloc(NodeValue::Document);
    builder.append_blocks(root, &document.body().children.borrow());

    // Step 3: Comrak AST → Markdown string (using comrak's serializer)
    let mut output = Vec::new();
    let options = default_comrak_options();
    format_commonmark(root, &options, &mut output)
        .map_err(|e| MarkError::RenderError(format!("Comrak serialization failed: {e}")))?;

    let markdown = String::from_utf8(output)
        .map_err(|e| MarkError::RenderError(format!("UTF-8 conversion failed: {e}")))?;

    // Remove Comrak's "end list" HTML comments which appear between consecutive lists
    let cleaned = markdown.replace("<!-- end list -->\n\n", "");

    trace!("converted to markdown:\n{cleaned}");
    Ok(cleaned)
}

fn default_comrak_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // Comments are written back as raw HTML
    options.render.unsafe_ = true;
    options
}

/// Elements that start a new block when found among block content
const BLOCK_ELEMENTS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "ul",
    "ol",
    "pre",
    "blockquote",
    "hr",
    "table",
    "dl",
    "div",
    "section",
    "article",
    "header",
    "footer",
    "main",
    "aside",
    "nav",
    "figure",
    "ac:structured-macro",
    "ac:rich-text-body",
    "ac:layout",
    "ac:layout-section",
    "ac:layout-cell",
    "ac:task-list",
];

fn is_block(handle: &Handle) -> bool {
    element_name(handle)
        .map(|name| BLOCK_ELEMENTS.contains(&name.as_str()))
        .unwrap_or(false)
}

fn is_blank_text(handle: &Handle) -> bool {
    match handle.data {
        NodeData::Text { ref contents } => contents.borrow().trim().is_empty(),
        _ => false,
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                output.push(' ');
            }
            in_space = true;
        } else {
            output.push(c);
            in_space = false;
        }
    }
    output
}

fn comment_markup(contents: &str) -> String {
    format!("<!--{contents}-->")
}

struct AstBuilder<'a> {
    arena: &'a Arena<AstNode<'a>>,
}

impl<'a> AstBuilder<'a> {
    fn alloc(&self, value: NodeValue) -> &'a AstNode<'a> {
        self.arena
            .alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
    }

    fn append(&self, parent: &'a AstNode<'a>, value: NodeValue) -> &'a AstNode<'a> {
        let node = self.alloc(value);
        parent.append(node);
        node
    }

    /// Append block content, wrapping runs of inline content in paragraphs
    fn append_blocks(&self, parent: &'a AstNode<'a>, children: &[Handle]) {
        let mut paragraph: Option<&'a AstNode<'a>> = None;

        for child in children {
            let is_comment = matches!(child.data, NodeData::Comment { .. });

            if is_block(child) || (is_comment && paragraph.is_none()) {
                if let Some(open) = paragraph.take() {
                    finish_inline_container(open);
                }
                self.append_block(parent, child);
                continue;
            }

            if is_macro_parameter(child) || (paragraph.is_none() && is_blank_text(child)) {
                continue;
            }

            let target = match paragraph {
                Some(open) => open,
                None => {
                    let open = self.append(parent, NodeValue::Paragraph);
                    paragraph = Some(open);
                    open
                }
            };
            self.append_inline(target, child);
        }

        if let Some(open) = paragraph {
            finish_inline_container(open);
        }
    }

    fn append_block(&self, parent: &'a AstNode<'a>, handle: &Handle) {
        if let NodeData::Comment { ref contents } = handle.data {
            self.append(
                parent,
                NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 2,
                    literal: comment_markup(contents),
                }),
            );
            return;
        }

        let Some(name) = element_name(handle) else {
            return;
        };
        let children = handle.children.borrow();

        match name.as_str() {
            "p" => {
                let paragraph = self.append(parent, NodeValue::Paragraph);
                self.append_inlines(paragraph, &children);
                finish_inline_container(paragraph);
            }

            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<u8>().unwrap_or(1);
                let heading = self.append(
                    parent,
                    NodeValue::Heading(NodeHeading {
                        level,
                        setext: false,
                    }),
                );
                self.append_inlines(heading, &children);
                finish_inline_container(heading);
            }

            "ul" | "ol" => self.append_list(parent, handle, name == "ol"),

            "pre" => {
                let language = find_code_language(handle).unwrap_or_default();
                self.append_code_block(parent, language, text_content(handle));
            }

            "blockquote" => {
                let quote = self.append(parent, NodeValue::BlockQuote);
                self.append_blocks(quote, &children);
            }

            "hr" => {
                self.append(parent, NodeValue::ThematicBreak);
            }

            "table" => self.append_table(parent, handle),

            "dl" => {
                for child in children.iter() {
                    match element_name(child).as_deref() {
                        Some("dt") => {
                            let paragraph = self.append(parent, NodeValue::Paragraph);
                            let strong = self.append(paragraph, NodeValue::Strong);
                            self.append_inlines(strong, &child.children.borrow());
                            finish_inline_container(strong);
                        }
                        Some("dd") => self.append_blocks(parent, &child.children.borrow()),
                        _ => {}
                    }
                }
            }

            "ac:structured-macro" => match read_code_macro(handle) {
                Some(data) => {
                    let info = info_string(&data);
                    self.append_code_block(parent, info, data.text);
                }
                None => self.append_blocks(parent, &children),
            },

            // Containers without a Markdown counterpart are flattened
            _ => self.append_blocks(parent, &children),
        }
    }

    fn append_list(&self, parent: &'a AstNode<'a>, handle: &Handle, ordered: bool) {
        let start = attribute(handle, "start")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(1);
        let list_type = if ordered {
            ListType::Ordered
        } else {
            ListType::Bullet
        };
        let list_info = NodeList {
            list_type,
            marker_offset: 0,
            padding: 0,
            start,
            delimiter: ListDelimType::Period,
            bullet_char: b'-',
            tight: true,
        };

        let list = self.append(parent, NodeValue::List(list_info));
        for child in handle.children.borrow().iter() {
            if element_name(child).as_deref() != Some("li") {
                continue;
            }
            let item = self.append(list, NodeValue::Item(list_info));
            self.append_blocks(item, &child.children.borrow());
        }
    }

    fn append_code_block(&self, parent: &'a AstNode<'a>, info: String, text: String) {
        let mut literal = text;
        if !literal.ends_with('\n') {
            literal.push('\n');
        }

        self.append(
            parent,
            NodeValue::CodeBlock(NodeCodeBlock {
                fenced: true,
                fence_char: b'`',
                fence_length: 3,
                fence_offset: 0,
                info,
                literal,
            }),
        );
    }

    fn append_table(&self, parent: &'a AstNode<'a>, handle: &Handle) {
        let rows = collect_rows(handle);
        let num_columns = rows
            .iter()
            .map(|row| table_cells(row).len())
            .max()
            .unwrap_or(0);
        if num_columns == 0 {
            return;
        }

        let table = self.append(
            parent,
            NodeValue::Table(NodeTable {
                alignments: vec![TableAlignment::None; num_columns],
                num_columns,
                num_rows: rows.len(),
                num_nonempty_cells: 0,
            }),
        );

        for (index, row) in rows.iter().enumerate() {
            let row_node = self.append(table, NodeValue::TableRow(index == 0));
            let cells = table_cells(row);
            for column in 0..num_columns {
                let cell_node = self.append(row_node, NodeValue::TableCell);
                if let Some(cell) = cells.get(column) {
                    self.append_flattened(cell_node, &cell.children.borrow());
                    finish_inline_container(cell_node);
                }
            }
        }
    }

    fn append_inlines(&self, parent: &'a AstNode<'a>, children: &[Handle]) {
        for child in children {
            self.append_inline(parent, child);
        }
    }

    /// Append content as inlines only, separating block children by a space.
    /// Used where Markdown cannot nest blocks (table cells).
    fn append_flattened(&self, parent: &'a AstNode<'a>, children: &[Handle]) {
        let mut first = true;
        for child in children {
            if is_block(child) && read_code_macro(child).is_none() {
                if !first {
                    self.append(parent, NodeValue::Text(" ".to_string()));
                }
                self.append_flattened(parent, &child.children.borrow());
            } else {
                self.append_inline(parent, child);
            }
            first = false;
        }
    }

    fn append_inline(&self, parent: &'a AstNode<'a>, handle: &Handle) {
        match handle.data {
            NodeData::Text { ref contents } => {
                let text = collapse_whitespace(&contents.borrow());
                if !text.is_empty() {
                    self.append(parent, NodeValue::Text(text));
                }
                return;
            }
            NodeData::Comment { ref contents } => {
                self.append(parent, NodeValue::HtmlInline(comment_markup(contents)));
                return;
            }
            NodeData::Element { .. } => {}
            _ => return,
        }

        let Some(name) = element_name(handle) else {
            return;
        };
        let children = handle.children.borrow();

        match name.as_str() {
            "strong" | "b" => {
                let strong = self.append(parent, NodeValue::Strong);
                self.append_inlines(strong, &children);
            }

            "em" | "i" => {
                let emph = self.append(parent, NodeValue::Emph);
                self.append_inlines(emph, &children);
            }

            "del" | "s" | "strike" => {
                let strike = self.append(parent, NodeValue::Strikethrough);
                self.append_inlines(strike, &children);
            }

            "code" | "tt" => {
                self.append(
                    parent,
                    NodeValue::Code(NodeCode {
                        num_backticks: 1,
                        literal: text_content(handle),
                    }),
                );
            }

            "br" => {
                self.append(parent, NodeValue::LineBreak);
            }

            "a" => {
                let url = attribute(handle, "href").unwrap_or_default();
                let has_image = children
                    .iter()
                    .any(|child| element_name(child).as_deref() == Some("img"));
                // heading anchors and other empty targets carry no content
                if text_content(handle).trim().is_empty() && !has_image {
                    return;
                }
                let link = self.append(
                    parent,
                    NodeValue::Link(NodeLink {
                        url,
                        title: attribute(handle, "title").unwrap_or_default(),
                    }),
                );
                self.append_inlines(link, &children);
            }

            "img" => {
                let image = self.append(
                    parent,
                    NodeValue::Image(NodeLink {
                        url: attribute(handle, "src").unwrap_or_default(),
                        title: attribute(handle, "title").unwrap_or_default(),
                    }),
                );
                if let Some(alt) = attribute(handle, "alt") {
                    self.append(image, NodeValue::Text(alt));
                }
            }

            "span" if has_class(handle, "inline-comment-marker") => {
                let Some(comment_id) = attribute(handle, "data-ref") else {
                    self.append_inlines(parent, &children);
                    return;
                };
                self.append(
                    parent,
                    NodeValue::HtmlInline(inline_comment_open(&comment_id)),
                );
                self.append_inlines(parent, &children);
                self.append(
                    parent,
                    NodeValue::HtmlInline(INLINE_COMMENT_CLOSE.to_string()),
                );
            }

            "ac:structured-macro" => match read_code_macro(handle) {
                Some(data) => {
                    self.append(
                        parent,
                        NodeValue::Code(NodeCode {
                            num_backticks: 1,
                            literal: data.text,
                        }),
                    );
                }
                None => self.append_inlines(parent, &children),
            },

            "ac:parameter" => {}

            "ac:image" => {
                if let Some(url) = image_source(handle) {
                    let image = self.append(
                        parent,
                        NodeValue::Image(NodeLink {
                            url,
                            title: attribute(handle, "ac:title").unwrap_or_default(),
                        }),
                    );
                    if let Some(alt) = attribute(handle, "ac:alt") {
                        self.append(image, NodeValue::Text(alt));
                    }
                }
            }

            "ac:link" => {
                if text_content(handle).trim().is_empty() {
                    if let Some(title) = linked_page_title(handle) {
                        self.append(parent, NodeValue::Text(title));
                    }
                } else {
                    self.append_inlines(parent, &children);
                }
            }

            // span, u, sup, sub and unknown elements keep only their content
            _ => self.append_inlines(parent, &children),
        }
    }
}

/// Trim the outer whitespace of an inline container, dropping it when empty.
fn finish_inline_container<'a>(node: &'a AstNode<'a>) {
    if let Some(first) = node.first_child() {
        if let NodeValue::Text(ref mut text) = first.data.borrow_mut().value {
            *text = text.trim_start().to_string();
        }
    }
    if let Some(last) = node.last_child() {
        if let NodeValue::Text(ref mut text) = last.data.borrow_mut().value {
            *text = text.trim_end().to_string();
        }
    }

    let empty_texts: Vec<_> = node
        .children()
        .filter(|child| matches!(child.data.borrow().value, NodeValue::Text(ref t) if t.is_empty()))
        .collect();
    for child in empty_texts {
        child.detach();
    }

    let removable = matches!(
        node.data.borrow().value,
        NodeValue::Paragraph | NodeValue::Heading(_) | NodeValue::Strong
    );
    if removable && node.first_child().is_none() {
        node.detach();
    }
}

/// Language of a `<pre>` block: `data-language` or a `language-*` class on
/// the inner `<code>`
fn find_code_language(pre: &Handle) -> Option<String> {
    if let Some(language) = attribute(pre, "data-language") {
        return Some(language);
    }

    pre.children.borrow().iter().find_map(|child| {
        if element_name(child).as_deref() != Some("code") {
            return None;
        }
        attribute(child, "class")?
            .split_whitespace()
            .find_map(|class| class.strip_prefix("language-").map(str::to_string))
    })
}

/// Rows of a table, looking through `thead`/`tbody`/`tfoot` but not into
/// nested tables
fn collect_rows(table: &Handle) -> Vec<Handle> {
    let mut rows = Vec::new();
    for child in table.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("tr") => rows.push(child.clone()),
            Some("thead") | Some("tbody") | Some("tfoot") => rows.extend(collect_rows(child)),
            _ => {}
        }
    }
    rows
}

fn table_cells(row: &Handle) -> Vec<Handle> {
    row.children
        .borrow()
        .iter()
        .filter(|child| matches!(element_name(child).as_deref(), Some("td") | Some("th")))
        .cloned()
        .collect()
}
