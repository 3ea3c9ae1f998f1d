//! Storage HTML parsing (storage HTML → RcDom)
//!
//! Storage format is XHTML with `ac:`/`ri:` elements, while html5ever is an
//! HTML5 parser. Namespaced elements parse fine as unknown elements, but
//! CDATA sections do not: outside foreign content they become bogus comments
//! cut short at the first `>`. They are rewritten to escaped text first.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CDATA_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!\[CDATA\[(.*?)\]\]>").expect("cdata pattern is valid"));

/// A parsed storage fragment.
///
/// Owns the whole DOM. `markup5ever_rcdom` empties every descendant when the
/// document node is dropped, so handles into the tree are only usable while
/// this value is alive.
pub struct StorageDocument {
    dom: RcDom,
    body: Handle,
}

impl StorageDocument {
    /// The `<body>` element holding the fragment's content
    pub fn body(&self) -> &Handle {
        &self.body
    }

    /// The document node the body hangs from
    pub fn document(&self) -> &Handle {
        &self.dom.document
    }
}

/// Parse a storage-format fragment.
///
/// Returns `None` only if the parser produced no `<body>`.
pub fn parse_storage(html: &str) -> Option<StorageDocument> {
    let preprocessed = CDATA_SECTION.replace_all(html, |caps: &Captures| escape_text(&caps[1]));
    let wrapped = format!("<!DOCTYPE html><html><head></head><body>{preprocessed}</body></html>");

    let dom = parse_document(RcDom::default(), ParseOpts::default())
        .from_utf8()
        .one(wrapped.as_bytes());

    let body = find_first_element(&dom.document, "body")?;
    Some(StorageDocument { dom, body })
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Local (lowercase) name of an element, `None` for other node kinds
pub fn element_name(handle: &Handle) -> Option<String> {
    match handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

/// Value of the named attribute on an element
pub fn attribute(handle: &Handle, attr_name: &str) -> Option<String> {
    match handle.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| attr.name.local.as_ref() == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Whether an element's `class` attribute lists `class_name`
pub fn has_class(handle: &Handle, class_name: &str) -> bool {
    attribute(handle, "class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

/// Concatenated text of every descendant text node
pub fn text_content(handle: &Handle) -> String {
    let mut output = String::new();
    collect_text(handle, &mut output);
    output
}

fn collect_text(handle: &Handle, output: &mut String) {
    if let NodeData::Text { ref contents } = handle.data {
        output.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        collect_text(child, output);
    }
}

/// Get the first element with the given local name, depth first
pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if element_name(handle).as_deref() == Some(name) {
        return Some(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}
