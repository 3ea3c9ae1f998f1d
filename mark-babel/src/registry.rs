//! Template registry for macro template lookup
//!
//! This module provides a centralized registry for the templates the storage
//! renderer executes. Templates are registered and retrieved by name.

use crate::error::MarkError;
use crate::templates::{CodeMacro, Template};
use std::collections::HashMap;
use std::io::Write;

/// Registry of macro templates
///
/// The renderer only holds a shared reference to the registry; it is never
/// mutated during a conversion.
///
/// # Examples
///
/// ```ignore
/// let mut registry = TemplateRegistry::new();
/// registry.register(MyCodeTemplate);
///
/// let mut out = Vec::new();
/// registry.execute("ac:code", &data, &mut out)?;
/// ```
pub struct TemplateRegistry {
    templates: HashMap<String, Box<dyn Template>>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TemplateRegistry {
            templates: HashMap::new(),
        }
    }

    /// Register a template
    ///
    /// If a template with the same name already exists, it will be replaced.
    pub fn register<T: Template + 'static>(&mut self, template: T) {
        self.templates
            .insert(template.name().to_string(), Box::new(template));
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Result<&dyn Template, MarkError> {
        self.templates
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| MarkError::TemplateNotFound(name.to_string()))
    }

    /// Check if a template exists
    pub fn has(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// List all registered template names (sorted)
    pub fn list_templates(&self) -> Vec<String> {
        let mut names: Vec<_> = self.templates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Execute the named template, writing its output to `out`
    pub fn execute(
        &self,
        name: &str,
        data: &CodeMacro,
        out: &mut dyn Write,
    ) -> Result<(), MarkError> {
        self.get(name)?.render(data, out)
    }

    /// Create a registry with the built-in templates
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::templates::CodeMacroTemplate);

        registry
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
