use url::Url;

/// Extracts the host from a URL
///
/// Returns the lowercase hostname without any port. This is the value used
/// for the same-domain scope check: a link is in scope only when its host
/// matches the seed's host exactly.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitegrazer::url::extract_host;
///
/// let url = Url::parse("https://Example.COM:8080/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_host() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_subdomain() {
        let url = Url::parse("https://blog.example.com/post").unwrap();
        assert_eq!(extract_host(&url), Some("blog.example.com".to_string()));
    }

    #[test]
    fn test_port_excluded() {
        let url = Url::parse("http://example.com:8080/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_uppercase_lowered() {
        let url = Url::parse("https://EXAMPLE.COM/").unwrap();
        assert_eq!(extract_host(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_subdomain_differs_from_apex() {
        let apex = Url::parse("https://example.com/").unwrap();
        let sub = Url::parse("https://www.example.com/").unwrap();
        assert_ne!(extract_host(&apex), extract_host(&sub));
    }
}
