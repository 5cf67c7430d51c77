use crate::UrlError;
use url::Url;

/// Normalizes a URL into its dedupe key
///
/// The key is `host + path` (plus `:port` when the URL carries an explicit
/// port), with exactly one trailing `/` stripped from the path. Scheme,
/// query string, and fragment are discarded, so two URLs differing only in
/// those components normalize identically.
///
/// # Arguments
///
/// * `url_str` - The URL string to normalize
///
/// # Returns
///
/// * `Ok(String)` - The normalized key
/// * `Err(UrlError)` - The input could not be parsed or has no host
///
/// # Examples
///
/// ```
/// use sitegrazer::url::normalize_url;
///
/// let key = normalize_url("https://example.com/path/").unwrap();
/// assert_eq!(key, "example.com/path");
/// ```
pub fn normalize_url(url_str: &str) -> Result<String, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;

    let host = url.host_str().ok_or(UrlError::MissingHost)?;

    let mut key = host.to_string();
    if let Some(port) = url.port() {
        key.push(':');
        key.push_str(&port.to_string());
    }

    let path = url.path().strip_suffix('/').unwrap_or(url.path());
    key.push_str(path);

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_scheme_dropped() {
        let key = normalize_url("https://example.com/path").unwrap();
        assert_eq!(key, "example.com/path");
    }

    #[test]
    fn test_http_scheme_dropped() {
        let key = normalize_url("http://example.com/path").unwrap();
        assert_eq!(key, "example.com/path");
    }

    #[test]
    fn test_https_with_trailing_slash() {
        let key = normalize_url("https://example.com/path/").unwrap();
        assert_eq!(key, "example.com/path");
    }

    #[test]
    fn test_http_with_trailing_slash() {
        let key = normalize_url("http://example.com/path/").unwrap();
        assert_eq!(key, "example.com/path");
    }

    #[test]
    fn test_root_url() {
        let key = normalize_url("https://example.com").unwrap();
        assert_eq!(key, "example.com");
    }

    #[test]
    fn test_root_url_with_slash() {
        let key = normalize_url("https://example.com/").unwrap();
        assert_eq!(key, "example.com");
    }

    #[test]
    fn test_query_dropped() {
        let key = normalize_url("https://example.com/page?a=1&b=2").unwrap();
        assert_eq!(key, "example.com/page");
    }

    #[test]
    fn test_fragment_dropped() {
        let key = normalize_url("https://example.com/page#section").unwrap();
        assert_eq!(key, "example.com/page");
    }

    #[test]
    fn test_explicit_port_kept() {
        let key = normalize_url("http://127.0.0.1:8080/page").unwrap();
        assert_eq!(key, "127.0.0.1:8080/page");
    }

    #[test]
    fn test_default_port_elided() {
        // The url crate treats the scheme-default port as absent.
        let key = normalize_url("https://example.com:443/page").unwrap();
        assert_eq!(key, "example.com/page");
    }

    #[test]
    fn test_only_one_trailing_slash_stripped() {
        let key = normalize_url("https://example.com/path//").unwrap();
        assert_eq!(key, "example.com/path/");
    }

    #[test]
    fn test_malformed_url() {
        let result = normalize_url("not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_missing_host() {
        let result = normalize_url("mailto:someone@example.com");
        assert!(matches!(result, Err(UrlError::MissingHost)));
    }

    #[test]
    fn test_equivalence_across_variants() {
        let expected = "example.com/path";
        for input in [
            "https://example.com/path",
            "http://example.com/path",
            "https://example.com/path/",
            "http://example.com/path/",
            "https://example.com/path?utm_source=x",
            "http://example.com/path#top",
        ] {
            assert_eq!(normalize_url(input).unwrap(), expected, "input: {}", input);
        }
    }
}
