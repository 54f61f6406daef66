#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `attrgen-http`: HTTP Fetch Backend for attrgen
//!
//! This crate provides a concrete HTTP-based implementation of the
//! [`fetch::Fetcher`] trait, retrieving the Graphviz attribute page.
//!
//! ## Overview
//!
//! - Implements [`HttpFetcher`], a thin wrapper over [`reqwest::Client`]
//! - Performs exactly one `GET` per [`Fetcher::fetch`] call, no retries
//! - Maps transport failures and non-2xx responses onto [`FetchError`]
//!
//! ## Example
//! ```no_run
//! use attrgen_http::HttpFetcher;
//! use fetch::Fetcher;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let fetcher = HttpFetcher::new("https://graphviz.org/doc/info/attrs.html");
//! let html = fetcher.fetch().await.unwrap();
//! println!("{} bytes", html.len());
//! # });
//! ```

use async_trait::async_trait;
use fetch::{FetchError, Fetcher};

/// A concrete implementation of the [`Fetcher`] trait using HTTP.
///
/// `HttpFetcher` performs no parsing; it returns the response body as text.
/// Errors encountered at any stage (connection, status, body decoding) are
/// normalized into [`FetchError`] variants for uniform handling.
#[derive(Clone)]
pub struct HttpFetcher {
    /// The underlying HTTP client used to perform requests.
    client: reqwest::Client,
    /// The full URL of the document (e.g. `https://graphviz.org/doc/info/attrs.html`).
    url: String,
}

impl HttpFetcher {
    /// Constructs a new `HttpFetcher` targeting the provided URL.
    ///
    /// # Example
    /// ```
    /// use attrgen_http::HttpFetcher;
    /// use fetch::Fetcher;
    ///
    /// let fetcher = HttpFetcher::new("https://graphviz.org/doc/info/attrs.html");
    /// assert_eq!(fetcher.source(), "https://graphviz.org/doc/info/attrs.html");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        logging::trace("HTTP", &format!("→ initializing HTTP fetcher for {}", url));
        Self { client: reqwest::Client::new(), url }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    /// Sends a single `GET` request and returns the body as text.
    ///
    /// # Errors
    /// - [`FetchError::Http`] if the request fails or the body cannot be read
    /// - [`FetchError::Status`] if the server answers with a non-success status
    async fn fetch(&self) -> Result<String, FetchError> {
        logging::trace("HTTP", &format!("→ GET {}", self.url));

        let resp = self.client.get(&self.url).send().await.map_err(|e| {
            tracing::error!("HTTP Fetcher - Request failed: {}", e);
            FetchError::Http(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("HTTP Fetcher - {} answered {}", self.url, status);
            return Err(FetchError::Status { url: self.url.clone(), status: status.as_u16() });
        }

        resp.text().await.map_err(|e| {
            tracing::error!("HTTP Fetcher - Failed to read body: {}", e);
            FetchError::Http(e.to_string())
        })
    }

    /// Returns the configured document URL.
    fn source(&self) -> &str { &self.url }
}
