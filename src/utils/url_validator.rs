//! Syntactic URL validation.
//!
//! Decides whether a string is acceptable as a redirect target. Validation
//! is purely syntactic; no network access is performed.

use url::Url;

/// Returns `true` iff the input parses as an absolute HTTP(S) URL.
///
/// # Rules
///
/// - Must parse as an absolute URL (relative references are rejected)
/// - Scheme must be `http` or `https` after parser normalization, so
///   `HTTP://example.com` is accepted while `ftp://`, `file://`,
///   `mailto:`, `javascript:`, and `data:` URLs are not
/// - Host must be present and non-empty
///
/// Empty and whitespace-only strings return `false`.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("http://example.com"));
/// assert!(is_valid_url("https://example.com/path?query=value"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("ftp://example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}
