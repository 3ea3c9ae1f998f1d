//! Markdown publishing for fetched pages.
//!
//! Converts storage-format HTML (as fetched from the wiki) to Markdown and
//! writes it to a destination file. The file handle lives only for the call
//! and is released on every exit path.
//!
//! The library reports failures as [`MarkError`]; a one-shot caller such as
//! the CLI treats any error as fatal.

use crate::error::MarkError;
use crate::formats::markdown::storage_to_markdown;
use log::debug;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Converts `html` to Markdown and writes it to `path`, replacing any
/// existing file.
///
/// # Errors
///
/// Returns [`MarkError`] if:
/// - The storage HTML cannot be converted
/// - The destination cannot be created or written
pub fn html_to_markdown_file(html: &str, path: impl AsRef<Path>) -> Result<(), MarkError> {
    let path = path.as_ref();
    let markdown = storage_to_markdown(html)?;
    write_to_path(path, markdown.as_bytes())?;
    debug!("wrote {} bytes of markdown to {}", markdown.len(), path.display());
    Ok(())
}

fn write_to_path(path: &Path, bytes: &[u8]) -> Result<(), MarkError> {
    let mut file = File::create(path)
        .map_err(|err| MarkError::IoError(format!("{}: {err}", path.display())))?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|err| MarkError::IoError(format!("{}: {err}", path.display())))
}
