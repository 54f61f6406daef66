#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `attrgen-fetch`: Document Source Abstraction
//!
//! This crate defines the **core fetch abstraction** used by the attrgen
//! pipeline to obtain the HTML document that carries the attribute table.
//!
//! ## Core Concepts
//!
//! ### `Fetcher` Trait
//! Defines how a document is retrieved (`fetch`), returning its text. Backends
//! such as `attrgen-http` implement this trait to perform the actual network
//! I/O; [`FileFetcher`] reads a local copy for offline regeneration.
//!
//! ### `FetchError`
//! Enumerates the failure modes of a single best-effort retrieval. There is no
//! retry: callers treat every variant as fatal.
//!
//! ## Example
//! ```no_run
//! use fetch::{DynFetcher, FetchError};
//!
//! async fn demo(fetcher: DynFetcher) -> Result<(), FetchError> {
//!     let html = fetcher.fetch().await?;
//!     println!("{} bytes from {}", html.len(), fetcher.source());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

/// Type alias for structured error handling in fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Canonical error type for all fetcher implementations.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// A transport-level failure (connection refused, DNS, TLS, body read).
    #[error("HTTP fetch error: {0}")]
    Http(String),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {status} from {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Numeric status code returned by the server.
        status: u16,
    },

    /// Reading a local document failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A source of the attribute-table document.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve the whole document as text.
    async fn fetch(&self) -> Result<String>;

    /// Human-readable description of where the document comes from.
    ///
    /// For network fetchers this is the URL, for local fetchers the path.
    fn source(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched fetcher instance.
pub type DynFetcher = Arc<dyn Fetcher>;

/// Reads the document from a file on disk.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    path: PathBuf,
    display: String,
}

impl FileFetcher {
    /// Create a fetcher for the HTML file at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        Self { path, display }
    }

    /// Path this fetcher reads from.
    pub fn path(&self) -> &Path { &self.path }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self) -> Result<String> {
        std::fs::read_to_string(&self.path)
            .map_err(|source| FetchError::Io { path: self.path.clone(), source })
    }

    fn source(&self) -> &str { &self.display }
}
