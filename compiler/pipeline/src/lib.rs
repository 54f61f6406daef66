#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns the attribute reference page into a typed
//! Rust attribute module.
//!
//! ## Module Organization
//!
//! - `orchestration` - Main pipeline entry points (`run`, `dump_catalog`)
//! - `generation_context` - Everything one generation run needs, built step by step

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// The attribute page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),
    /// The attribute table could not be extracted.
    #[error(transparent)]
    Parse(#[from] scrape::ParseError),
    /// The scraped data violates the assumed schema (strict mode only).
    #[error(transparent)]
    Schema(#[from] semantics::SchemaError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// Configuration could not be loaded or saved.
    #[error(transparent)]
    Config(#[from] attrgen_config::ConfigError),
}

// Module declarations
pub mod generation_context;
pub mod orchestration;

// Re-export public API from orchestration module
pub use generation_context::GenerationContext;
pub use orchestration::{
    build_context, dump_catalog, fetcher_for, generate_source, run, scrape_catalog,
};
