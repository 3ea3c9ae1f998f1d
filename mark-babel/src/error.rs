//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting documents
#[derive(Debug, Clone, PartialEq)]
pub enum MarkError {
    /// Template not found in registry
    TemplateNotFound(String),
    /// A template failed while writing its output
    TemplateError(String),
    /// Error while rendering Markdown to storage format
    RenderError(String),
    /// Error while reading storage-format HTML
    ParseError(String),
    /// Reading or writing a document failed
    IoError(String),
}

impl fmt::Display for MarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkError::TemplateNotFound(name) => write!(f, "Template '{name}' not found"),
            MarkError::TemplateError(msg) => write!(f, "Template error: {msg}"),
            MarkError::RenderError(msg) => write!(f, "Render error: {msg}"),
            MarkError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            MarkError::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for MarkError {}

impl From<std::io::Error> for MarkError {
    fn from(err: std::io::Error) -> Self {
        MarkError::IoError(err.to_string())
    }
}
