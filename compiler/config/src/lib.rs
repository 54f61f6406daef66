#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! attrgen Configuration
//!
//! This crate provides configuration management for attrgen.
//! It handles loading, saving, and managing configuration files that specify:
//! - Where the attribute table comes from (URL or local HTML file)
//! - Logging configuration
//! - Code generation parameters
//!
//! Configuration is stored in TOML format. Every section and key is optional;
//! missing values fall back to the defaults, which reproduce the plain
//! "fetch the attribute page, write `mod.rs`" behavior.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upstream attribute reference page.
pub const DEFAULT_URL: &str = "https://graphviz.org/doc/info/attrs.html";
/// Output file written when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "mod.rs";
pub use codegen::{DEFAULT_DOCS_BASE_URL, DEFAULT_SET_TYPE};

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the attribute table is read from
    pub source: SourceConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
}

/// Attribute table source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Page to fetch when no local input is given
    pub url: String,
    /// Local HTML file read instead of fetching `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Where to write the generated module
    pub output_path: PathBuf,
    /// Path of the ordered-set type used by the generated collections
    pub set_type: String,
    /// Base URL for `Read more` links in generated docs
    pub docs_base_url: String,
    /// Run rustfmt over the written module
    pub rustfmt: bool,
    /// Treat schema findings as errors instead of warnings
    pub strict: bool,
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/attrgen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("attrgen");
        Ok(config_dir.join("config.toml"))
    }

    /// Load `path` when given, else the default path when that file exists,
    /// else the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self { Self { url: DEFAULT_URL.to_string(), input: None } }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string() } }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            set_type: DEFAULT_SET_TYPE.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            rustfmt: false,
            strict: false,
        }
    }
}
