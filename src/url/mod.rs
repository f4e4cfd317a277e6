//! URL handling for discovered links
//!
//! Links found on a documentation page are usually relative to the directory
//! of that page. This module resolves them to absolute URLs and drops the
//! hrefs that never point at another crawlable page.

use url::Url;

/// Resolves a link href against the URL of the page it was found on
///
/// Relative hrefs are resolved against the page's directory (everything up to
/// and including the last `/` of its path); absolute hrefs are kept as-is.
///
/// Returns None if the link should be skipped:
/// - empty or fragment-only hrefs (same page anchors)
/// - javascript:, mailto:, tel: and data: schemes
/// - hrefs that do not resolve to an HTTP(S) URL
///
/// # Examples
///
/// ```
/// use docs_harvest::url::resolve_link;
/// use url::Url;
///
/// let page = Url::parse("https://docs.python.org/3/tutorial/index.html").unwrap();
/// let child = resolve_link("appetite.html", &page).unwrap();
/// assert_eq!(child.as_str(), "https://docs.python.org/3/tutorial/appetite.html");
/// ```
pub fn resolve_link(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match page_url.join(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        _ => None,
    }
}

/// Returns the URL without its fragment
///
/// Two links that differ only in their anchor point at the same page.
pub fn page_identity(url: &Url) -> Url {
    let mut url = url.clone();
    url.set_fragment(None);
    url
}
