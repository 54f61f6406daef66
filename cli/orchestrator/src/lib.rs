#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the attrgen command-line interface.

use std::path::{Path, PathBuf};

use attrgen_config::{Config, ConfigError};
use chrono::{DateTime, Local, NaiveDateTime};
use thiserror::Error;

/// Environment variable pinning the generation timestamp for reproducible output.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Errors that can occur while running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pipeline failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// Configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// `SOURCE_DATE_EPOCH` is not a valid timestamp.
    #[error("invalid {SOURCE_DATE_EPOCH} value `{0}`")]
    InvalidEpoch(String),
    /// I/O error outside the pipeline.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Generic CLI error with a custom message.
    #[error("{0}")]
    Message(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Timestamp for the generated header.
///
/// `source_date_epoch` (seconds since the Unix epoch, UTC) wins when set;
/// otherwise the current local time is used.
pub fn generation_timestamp(source_date_epoch: Option<&str>) -> Result<NaiveDateTime> {
    match source_date_epoch {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|ts| ts.naive_utc())
            .ok_or_else(|| CliError::InvalidEpoch(raw.to_string())),
        None => Ok(Local::now().naive_local()),
    }
}

/// Write a default configuration file at `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_config(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(CliError::Message(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Config::default().save(path)?;
    Ok(path.to_path_buf())
}
