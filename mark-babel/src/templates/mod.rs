//! Macro templates for storage-format output.
//!
//! The renderer never writes wiki macro markup itself. It hands a small data
//! record to a named [`Template`] looked up in a
//! [`TemplateRegistry`](crate::registry::TemplateRegistry), and the template
//! writes the markup to the output sink. Callers that target a different macro
//! vocabulary register their own template under the same name.
//!
//! # Available Templates
//!
//! - **Code macro** ([`code`]): registered as [`CODE_MACRO_TEMPLATE`], renders
//!   fenced code blocks as `<ac:structured-macro ac:name="code">`.
//!
//! # Example
//!
//! ```ignore
//! use mark_babel::registry::TemplateRegistry;
//! use mark_babel::templates::{CodeMacro, CODE_MACRO_TEMPLATE};
//!
//! let registry = TemplateRegistry::default();
//! let mut out = Vec::new();
//! registry.execute(CODE_MACRO_TEMPLATE, &CodeMacro::default(), &mut out)?;
//! ```

mod util;

pub mod code;

use crate::error::MarkError;
use serde::Serialize;
use std::io::Write;

pub use code::CodeMacroTemplate;
pub(crate) use util::{escape_cdata, escape_xml};

/// Name under which the code block macro template is registered.
pub const CODE_MACRO_TEMPLATE: &str = "ac:code";

/// The record a code block macro template is executed with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeMacro {
    pub language: String,
    pub collapse: bool,
    pub title: String,
    pub text: String,
}

/// A named template producing storage-format markup.
///
/// Implementations write directly to `out`. Nothing is guaranteed about the
/// sink's contents when an error is returned.
pub trait Template: Send + Sync {
    /// The name the template is registered under (e.g. `"ac:code"`)
    fn name(&self) -> &str;

    /// Render `data` into `out`
    fn render(&self, data: &CodeMacro, out: &mut dyn Write) -> Result<(), MarkError>;
}
