//! Iframe source scanning.

use crate::patterns::IFRAME_SRC;

/// Find the `src` value of the first `<iframe>` tag in `html`.
///
/// This is a single regex scan, not an HTML parse: only the leftmost
/// qualifying tag is considered and quoted values are taken as-is, with no
/// entity decoding or nested-quote handling.
///
/// # Examples
///
/// ```
/// use iframe_extract::scan::find_iframe_src;
///
/// let html = r#"<div><IFRAME SRC='http://example.com/x'></iframe></div>"#;
/// assert_eq!(find_iframe_src(html), Some("http://example.com/x"));
/// assert_eq!(find_iframe_src("<p>nothing</p>"), None);
/// ```
#[must_use]
pub fn find_iframe_src(html: &str) -> Option<&str> {
    IFRAME_SRC
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
