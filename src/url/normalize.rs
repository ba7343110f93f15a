use url::Url;

/// Normalizes a page URL for use as a store key
///
/// The only rewrite applied is dropping the fragment: `/page#a` and
/// `/page#b` address the same document and must collapse to one record.
/// Scheme, host, path, and query are left exactly as given, so URLs
/// differing in query string stay distinct pages.
///
/// # Arguments
///
/// * `raw` - The URL string as it appeared in the sitemap
///
/// # Returns
///
/// * `Ok(Url)` - Parsed URL with the fragment removed
/// * `Err(url::ParseError)` - The string is not a valid absolute URL
///
/// # Examples
///
/// ```
/// use gleaner::url::normalize_url;
///
/// let url = normalize_url("https://example.com/page#section").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/page");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_fragment() {
        let result = normalize_url("https://example.com/page#section").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_fragment_variants_collapse() {
        let a = normalize_url("https://example.com/page#a").unwrap();
        let b = normalize_url("https://example.com/page#b").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_fragment_unchanged() {
        let result = normalize_url("https://example.com/page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_query_preserved() {
        let result = normalize_url("https://example.com/page?b=2&a=1#frag").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page?b=2&a=1");
    }

    #[test]
    fn test_host_case_preserved_by_parser_rules() {
        // The url crate lowercases hosts as part of parsing; no further
        // canonicalization is applied on top of that.
        let result = normalize_url("https://EXAMPLE.com/Page").unwrap();
        assert_eq!(result.as_str(), "https://example.com/Page");
    }

    #[test]
    fn test_empty_fragment_removed() {
        let result = normalize_url("https://example.com/page#").unwrap();
        assert_eq!(result.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_malformed_url() {
        assert!(normalize_url("not a url").is_err());
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(normalize_url("/page").is_err());
    }
}
