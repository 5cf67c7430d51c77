//! HTTP fetcher implementation
//!
//! This module handles the raw page fetch for the crawler: building an HTTP
//! client with a proper user agent, performing the GET, and validating the
//! response before the body is handed to the extractor. The coordinator
//! consumes it through the [`Fetch`] trait so tests can substitute an
//! instrumented fetcher.

use futures::future::BoxFuture;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by a page fetch
///
/// The coordinator treats every variant identically: the branch that hit it
/// ends without recording a page. The variants exist for diagnostics only.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("not HTML: content-type '{0}'")]
    ContentType(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Page fetch seam consumed by the coordinator
///
/// `fetch` resolves to the raw HTML body of the page, or a [`FetchError`]
/// when the response is unusable.
pub trait Fetch: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>>;
}

impl<T: Fetch + ?Sized> Fetch for std::sync::Arc<T> {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        (**self).fetch(url)
    }
}

/// Builds an HTTP client for crawling
///
/// # Arguments
///
/// * `user_agent` - The User-Agent header value to send
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.to_string())
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Production fetcher backed by a [`reqwest::Client`]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built client
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }

    /// Performs a validated GET request
    ///
    /// Rejects responses with status >= 400 and responses whose Content-Type
    /// does not contain `text/html`; otherwise resolves to the body text.
    async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(FetchError::Status(status));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        if !content_type.contains("text/html") {
            return Err(FetchError::ContentType(content_type));
        }

        Ok(response.text().await?)
    }
}

impl Fetch for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, FetchError>> {
        Box::pin(self.get_html(url))
    }
}
