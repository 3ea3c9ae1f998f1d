//! Storage macros that map back to Markdown constructs.

use crate::formats::html::parser::{attribute, element_name, text_content};
use crate::templates::code::{CODE_MACRO_NAME, MERMAID_LANGUAGE, MERMAID_MACRO_NAME};
use crate::templates::CodeMacro;
use markup5ever_rcdom::Handle;

/// Read a code (or diagram) macro back into its template record.
///
/// Returns `None` for any other macro.
pub(crate) fn read_code_macro(handle: &Handle) -> Option<CodeMacro> {
    let macro_name = attribute(handle, "ac:name")?;
    let mermaid = macro_name == MERMAID_MACRO_NAME;
    if macro_name != CODE_MACRO_NAME && !mermaid {
        return None;
    }

    let mut data = CodeMacro::default();
    if mermaid {
        data.language = MERMAID_LANGUAGE.to_string();
    }

    for child in handle.children.borrow().iter() {
        match element_name(child).as_deref() {
            Some("ac:parameter") => {
                let value = text_content(child);
                match attribute(child, "ac:name").as_deref() {
                    Some("language") if !mermaid => data.language = value.trim().to_string(),
                    Some("collapse") => data.collapse = value.trim() == "true",
                    Some("title") => data.title = value.trim().to_string(),
                    _ => {}
                }
            }
            Some("ac:plain-text-body") => data.text = text_content(child),
            _ => {}
        }
    }

    Some(data)
}

/// The fence info string that compiles back into `data`.
///
/// Inverse of [`crate::directive::CodeBlockDirective::parse`] for titles
/// without leading whitespace.
pub(crate) fn info_string(data: &CodeMacro) -> String {
    let mut parts = Vec::new();
    if !data.language.is_empty() {
        parts.push(data.language.clone());
    }
    if data.collapse {
        parts.push("collapse".to_string());
    }
    if !data.title.is_empty() {
        parts.push(format!("title {}", data.title));
    }
    parts.join(" ")
}

/// Whether an element carries only macro configuration, never content
pub(crate) fn is_macro_parameter(handle: &Handle) -> bool {
    element_name(handle).as_deref() == Some("ac:parameter")
}

/// Image source for `<ac:image>`: an external URL or an attachment name
pub(crate) fn image_source(handle: &Handle) -> Option<String> {
    handle.children.borrow().iter().find_map(|child| {
        match element_name(child).as_deref() {
            Some("ri:url") => attribute(child, "ri:value"),
            Some("ri:attachment") => attribute(child, "ri:filename"),
            _ => None,
        }
    })
}

/// Page title targeted by an `<ac:link>` without a link body
pub(crate) fn linked_page_title(handle: &Handle) -> Option<String> {
    handle.children.borrow().iter().find_map(|child| {
        match element_name(child).as_deref() {
            Some("ri:page") => attribute(child, "ri:content-title"),
            _ => None,
        }
    })
}
