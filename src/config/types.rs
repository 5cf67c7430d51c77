use std::time::Duration;

/// Hard ceiling on concurrent fetches, applied by the configuration layer
/// regardless of what the caller asks for.
pub const MAX_CONCURRENCY_CEILING: usize = 5;

/// Default politeness delay applied after each successful fetch.
pub const DEFAULT_POLITENESS_DELAY_MS: u64 = 500;

/// Default User-Agent header sent with every request.
pub const DEFAULT_USER_AGENT: &str = "sitegrazer/1.0";

/// Configuration for a single crawl run
///
/// Set once at crawl start and read-only afterward. `max_concurrency`
/// bounds simultaneously in-flight fetches, `max_pages` caps the number of
/// distinct pages collected, and the seed URL fixes the host the crawl is
/// scoped to.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// URL the crawl starts from; its host becomes the crawl scope
    pub seed_url: String,

    /// Maximum number of concurrent page fetches
    pub max_concurrency: usize,

    /// Maximum number of distinct pages to collect
    pub max_pages: usize,

    /// Delay applied after each successful fetch, in milliseconds
    pub politeness_delay_ms: u64,

    /// User-Agent header value for outgoing requests
    pub user_agent: String,
}

impl CrawlConfig {
    /// Creates a configuration with default delay and user agent
    pub fn new(seed_url: impl Into<String>, max_concurrency: usize, max_pages: usize) -> Self {
        Self {
            seed_url: seed_url.into(),
            max_concurrency,
            max_pages,
            politeness_delay_ms: DEFAULT_POLITENESS_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// The politeness delay as a [`Duration`]
    pub fn politeness_delay(&self) -> Duration {
        Duration::from_millis(self.politeness_delay_ms)
    }
}
