//! Shared configuration loader for the ini toolchain.
//!
//! `defaults/ini.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`IniConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use ini_parser::RenderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/ini.default.toml");

/// Top-level configuration consumed by ini applications.
#[derive(Debug, Clone, Deserialize)]
pub struct IniConfig {
    pub serializer: SerializerConfig,
    pub cli: CliConfig,
}

/// Mirrors the knobs exposed by the serializer.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializerConfig {
    pub sort_sections: bool,
    pub sort_keys: bool,
    pub key_value_separator: String,
    pub blank_line_between_sections: bool,
}

impl SerializerConfig {
    /// Build serializer options, rejecting a separator that would not parse back.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        RenderOptions::new(
            self.sort_sections,
            self.sort_keys,
            self.blank_line_between_sections,
        )
        .with_separator(self.key_value_separator.as_str())
        .ok_or_else(|| {
            ConfigError::Message(format!(
                "serializer.key_value_separator must contain exactly one '=' and only spaces otherwise, got {:?}",
                self.key_value_separator
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Ini,
    Json,
    Yaml,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<IniConfig, ConfigError> {
        let config: IniConfig = self.builder.build()?.try_deserialize()?;
        config.serializer.render_options()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<IniConfig, ConfigError> {
    Loader::new().build()
}
