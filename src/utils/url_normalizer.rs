//! Base URL normalization.
//!
//! The default base has the page path appended verbatim, so it is stored
//! without a trailing slash, fragment or query.

use crate::error::EmbedError;
use url::Url;

/// Normalizes the configured default base URL.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Converted to lowercase
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Query and fragment**: Removed
/// 5. **Trailing slash**: Removed, so `{base}{path}` never produces `//`
///
/// # Errors
///
/// Returns [`EmbedError::InvalidBaseUrl`] for malformed URLs and non-HTTP(S) schemes.
///
/// # Examples
///
/// ```
/// use stats_embed::utils::normalize_base_url;
///
/// assert_eq!(
///     normalize_base_url("HTTPS://Synthetix.Streamlit.App:443/").unwrap(),
///     "https://synthetix.streamlit.app"
/// );
/// ```
pub fn normalize_base_url(input: &str) -> Result<String, EmbedError> {
    let mut url =
        Url::parse(input).map_err(|e| EmbedError::invalid_base_url(input, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(EmbedError::invalid_base_url(
                input,
                "only http and https are allowed",
            ));
        }
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase))
            .map_err(|e| EmbedError::invalid_base_url(input, e.to_string()))?;
    }

    url.set_query(None);
    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None)
            .map_err(|_| EmbedError::invalid_base_url(input, "failed to remove default port"))?;
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple_https() {
        assert_eq!(
            normalize_base_url("https://synthetix.streamlit.app").unwrap(),
            "https://synthetix.streamlit.app"
        );
    }

    #[test]
    fn test_normalize_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://example.com/").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            normalize_base_url("https://example.com/apps/").unwrap(),
            "https://example.com/apps"
        );
    }

    #[test]
    fn test_normalize_uppercase_host() {
        assert_eq!(
            normalize_base_url("https://EXAMPLE.COM/Apps").unwrap(),
            "https://example.com/Apps"
        );
    }

    #[test]
    fn test_normalize_remove_default_port() {
        assert_eq!(
            normalize_base_url("http://example.com:80").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            normalize_base_url("https://example.com:443").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_normalize_keep_custom_port() {
        assert_eq!(
            normalize_base_url("http://localhost:8501").unwrap(),
            "http://localhost:8501"
        );
    }

    #[test]
    fn test_normalize_drops_query_and_fragment() {
        assert_eq!(
            normalize_base_url("https://example.com/?x=1#top").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "file:///tmp"] {
            assert!(matches!(
                normalize_base_url(input),
                Err(EmbedError::InvalidBaseUrl { .. })
            ));
        }
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("synthetix.streamlit.app").is_err());
    }
}
