//! URL scheme normalization.

/// Ensures a URL is scheme-qualified before storage.
///
/// Inputs already starting with `http://` or `https://` pass through
/// unchanged; anything else gets `http://` prepended. No further validation
/// is performed.
///
/// # Examples
///
/// ```
/// use shorturl::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("example.com"), "http://example.com");
/// assert_eq!(
///     normalize_url("https://example.com/path"),
///     "https://example.com/path"
/// );
/// ```
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepends_scheme_when_missing() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
    }

    #[test]
    fn test_keeps_http() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_keeps_https_with_path() {
        assert_eq!(
            normalize_url("https://example.com/path?q=1"),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_other_schemes_are_not_recognized() {
        // Only http/https prefixes are recognized; everything else is
        // treated as a bare host.
        assert_eq!(normalize_url("ftp://example.com"), "http://ftp://example.com");
    }
}
