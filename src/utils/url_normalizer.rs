//! Protocol normalization for user-supplied URLs.
//!
//! Users paste addresses without a scheme ("example.com") more often than
//! not. Normalization rewrites such input into a canonical absolute form
//! before validation and storage.

/// Prepends `https://` to input that lacks an explicit protocol.
///
/// Input already starting with `http://` or `https://` is returned
/// unchanged. Everything else gets the `https://` prefix and is otherwise
/// returned verbatim: no trimming, no encoding, no validation. Callers
/// validate with [`crate::utils::url_validator::is_valid_url`] before or
/// after normalizing.
///
/// Idempotent: `format_url(format_url(s)) == format_url(s)`.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_normalizer::format_url;
///
/// assert_eq!(format_url("example.com"), "https://example.com");
/// assert_eq!(format_url("http://example.com"), "http://example.com");
/// ```
pub fn format_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}
