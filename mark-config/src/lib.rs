//! Shared configuration loader for the mark toolchain.
//!
//! `defaults/mark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mark_babel::{CompileOptions, PageOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mark.default.toml");

/// Top-level configuration consumed by mark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkConfig {
    pub compile: CompileConfig,
    pub page: PageConfig,
}

/// Mirrors the knobs exposed by the storage compiler.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileConfig {
    pub smart_punctuation: bool,
    pub reserved_prefixes: Vec<String>,
}

impl From<&CompileConfig> for CompileOptions {
    fn from(config: &CompileConfig) -> Self {
        CompileOptions {
            smart_punctuation: config.smart_punctuation,
            reserved_prefixes: config.reserved_prefixes.clone(),
        }
    }
}

/// Page title handling.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub drop_leading_h1: bool,
    pub title_from_leading_h1: bool,
}

impl From<&PageConfig> for PageOptions {
    fn from(config: &PageConfig) -> Self {
        PageOptions {
            drop_leading_h1: config.drop_leading_h1,
            title_from_leading_h1: config.title_from_leading_h1,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MarkConfig, ConfigError> {
    Loader::new().build()
}
