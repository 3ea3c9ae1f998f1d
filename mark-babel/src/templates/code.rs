//! Code block macro template.
//!
//! Produces the wiki's `code` macro:
//!
//! ```text
//! <ac:structured-macro ac:name="code">
//! <ac:parameter ac:name="language">go</ac:parameter>
//! <ac:parameter ac:name="collapse">true</ac:parameter>
//! <ac:parameter ac:name="title">Example</ac:parameter>
//! <ac:plain-text-body><![CDATA[fmt.Println()]]></ac:plain-text-body>
//! </ac:structured-macro>
//! ```
//!
//! Mermaid diagrams go through the diagram macro instead, which takes a
//! `showSource` flag in place of a language.

use super::{escape_cdata, escape_xml, CodeMacro, Template, CODE_MACRO_TEMPLATE};
use crate::error::MarkError;
use std::io::Write;

pub const CODE_MACRO_NAME: &str = "code";
pub const MERMAID_MACRO_NAME: &str = "cloudscript-confluence-mermaid";
pub const MERMAID_LANGUAGE: &str = "mermaid";

/// Default template for fenced code blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeMacroTemplate;

impl Template for CodeMacroTemplate {
    fn name(&self) -> &str {
        CODE_MACRO_TEMPLATE
    }

    fn render(&self, data: &CodeMacro, out: &mut dyn Write) -> Result<(), MarkError> {
        write_code_macro(data, out).map_err(|e| MarkError::TemplateError(e.to_string()))
    }
}

fn write_code_macro(data: &CodeMacro, out: &mut dyn Write) -> std::io::Result<()> {
    let mermaid = data.language == MERMAID_LANGUAGE;
    let macro_name = if mermaid {
        MERMAID_MACRO_NAME
    } else {
        CODE_MACRO_NAME
    };

    writeln!(out, r#"<ac:structured-macro ac:name="{macro_name}">"#)?;
    if mermaid {
        writeln!(out, r#"<ac:parameter ac:name="showSource">true</ac:parameter>"#)?;
    } else {
        writeln!(
            out,
            r#"<ac:parameter ac:name="language">{}</ac:parameter>"#,
            escape_xml(&data.language)
        )?;
    }
    writeln!(
        out,
        r#"<ac:parameter ac:name="collapse">{}</ac:parameter>"#,
        data.collapse
    )?;

    // directive titles keep the separator after the keyword
    let title = data.title.trim();
    if !title.is_empty() {
        writeln!(
            out,
            r#"<ac:parameter ac:name="title">{}</ac:parameter>"#,
            escape_xml(title)
        )?;
    }

    writeln!(
        out,
        "<ac:plain-text-body><![CDATA[{}]]></ac:plain-text-body>",
        escape_cdata(&data.text)
    )?;
    writeln!(out, "</ac:structured-macro>")
}
