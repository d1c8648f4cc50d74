//! Configuration for the ALE tools.
//!
//! Layers, lowest first: the embedded `defaults/ale.default.toml`, an optional
//! [`PROJECT_CONFIG_FILE`] in the working directory, an explicit `--config` file, then
//! per-flag overrides. [`Loader`] stacks them and deserializes an [`AleConfig`].

use ale_parser::MappingPolicy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/ale.default.toml");

/// Picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = "ale.toml";

/// Top-level configuration consumed by the ALE tools.
#[derive(Debug, Clone, Deserialize)]
pub struct AleConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Knobs for `ale convert`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
    pub mapping_policy: MappingPolicy,
    pub recurse: bool,
    pub allow_all_extensions: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Stacks configuration sources over the embedded defaults.
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

    /// Layer a file that may not exist, such as a project-local `ale.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one key. Command-line flags land here, above every file.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AleConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
