//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching with response validation
//! - HTML extraction into page records
//! - Outstanding-task completion tracking
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod tracker;

pub use coordinator::{Coordinator, VisitError};
pub use extractor::{extract_page, ExtractError, PageRecord};
pub use fetcher::{build_http_client, Fetch, FetchError, HttpFetcher};
pub use tracker::CompletionTracker;

use crate::config::CrawlConfig;
use crate::CrawlError;
use std::collections::HashMap;

/// Runs a complete crawl with the production HTTP fetcher
///
/// Builds the HTTP client, constructs a coordinator scoped to the seed's
/// host, and drives the crawl to completion.
///
/// # Arguments
///
/// * `config` - The crawl configuration, already validated
///
/// # Returns
///
/// * `Ok(pages)` - Collected records keyed by normalized URL
/// * `Err(CrawlError)` - Client construction or seed parsing failed
pub async fn crawl(config: &CrawlConfig) -> Result<HashMap<String, PageRecord>, CrawlError> {
    let fetcher = HttpFetcher::new(&config.user_agent)?;
    let coordinator = Coordinator::new(config, fetcher)?;
    Ok(coordinator.crawl().await)
}
