//! Configuration module for Sitegrazer
//!
//! Crawl configuration is assembled from command-line arguments and
//! validated once at startup; the concurrency clamp lives here, independent
//! of the coordinator's own admission logic.

mod types;
mod validation;

pub use types::{
    CrawlConfig, DEFAULT_POLITENESS_DELAY_MS, DEFAULT_USER_AGENT, MAX_CONCURRENCY_CEILING,
};
pub use validation::validate;
