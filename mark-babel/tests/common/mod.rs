//! Shared helpers for the integration tests.

use mark_babel::templates::{CodeMacro, Template, CODE_MACRO_TEMPLATE};
use mark_babel::{compile_markdown, MarkError, TemplateRegistry};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Compile with the default template registry
pub fn compile(markdown: &str) -> String {
    compile_markdown(markdown, &TemplateRegistry::default()).expect("Should compile markdown")
}

/// Read a file from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// A code macro template that records what it is executed with and writes a
/// fixed marker.
pub struct Recorder(Arc<Mutex<Vec<CodeMacro>>>);

impl Template for Recorder {
    fn name(&self) -> &str {
        CODE_MACRO_TEMPLATE
    }

    fn render(&self, data: &CodeMacro, out: &mut dyn Write) -> Result<(), MarkError> {
        self.0.lock().unwrap().push(data.clone());
        out.write_all(b"<recorded/>\n")
            .map_err(|e| MarkError::TemplateError(e.to_string()))
    }
}

/// Compile with a [`Recorder`] in place of the code macro template
pub fn compile_recording(markdown: &str) -> (String, Vec<CodeMacro>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut registry = TemplateRegistry::new();
    registry.register(Recorder(seen.clone()));

    let html = compile_markdown(markdown, &registry).expect("Should compile markdown");
    let calls = seen.lock().unwrap().clone();
    (html, calls)
}
