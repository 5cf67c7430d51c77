use crate::config::types::{CrawlConfig, MAX_CONCURRENCY_CEILING};
use crate::ConfigError;
use url::Url;

/// Validates a crawl configuration and applies the concurrency ceiling
///
/// Runs at startup, before the coordinator is constructed. A request for
/// more than [`MAX_CONCURRENCY_CEILING`] concurrent fetches is clamped with
/// a warning rather than rejected; everything else invalid is an error.
pub fn validate(config: &mut CrawlConfig) -> Result<(), ConfigError> {
    validate_seed(&config.seed_url)?;

    if config.max_concurrency < 1 {
        return Err(ConfigError::Validation(
            "invalid max concurrency value".to_string(),
        ));
    }

    if config.max_concurrency > MAX_CONCURRENCY_CEILING {
        tracing::warn!(
            "max concurrency value is {}, clamping from {}",
            MAX_CONCURRENCY_CEILING,
            config.max_concurrency
        );
        config.max_concurrency = MAX_CONCURRENCY_CEILING;
    }

    if config.max_pages < 1 {
        return Err(ConfigError::Validation(
            "invalid max pages value".to_string(),
        ));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that the seed parses as an http(s) URL with a host
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    let url =
        Url::parse(seed).map_err(|e| ConfigError::InvalidSeed(format!("'{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidSeed(format!(
            "'{}': only http and https schemes are supported",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidSeed(format!("'{}': missing host", seed)));
    }

    Ok(())
}
