//! URL Utility Functions
//!
//! Resolution of card links against the page URL and page-index arithmetic
//! used when following pagination.

use url::Url;

use crate::error::{Error, Result};
use crate::patterns::PAGE_PATH;

/// Query parameters that commonly carry a page index.
const PAGE_PARAMS: &[&str] = &["page", "p", "pg", "paged"];

/// Parse an absolute URL, mapping failures to `Error::InvalidUrl`.
pub fn parse_url(url_str: &str) -> Result<Url> {
    Url::parse(url_str.trim()).map_err(|e| Error::InvalidUrl(format!("{url_str}: {e}")))
}

/// Resolve a relative or absolute reference against `base`.
///
/// `data:`, `javascript:`, `mailto:` and `tel:` references, and references
/// that fail to resolve, are returned trimmed but otherwise unchanged.
///
/// ```rust
/// use card_scout::url_utils::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://shop.example/list/?page=1").unwrap();
/// assert_eq!(resolve("../item/7", &base), "https://shop.example/item/7");
/// assert_eq!(resolve("mailto:a@b.c", &base), "mailto:a@b.c");
/// ```
#[must_use]
pub fn resolve(reference: &str, base: &Url) -> String {
    let reference = reference.trim();

    if reference.is_empty() {
        return String::new();
    }

    if ["data:", "javascript:", "mailto:", "tel:"]
        .iter()
        .any(|scheme| reference.starts_with(scheme))
    {
        return reference.to_string();
    }

    match base.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

/// Resolve `reference` against `base` into a `Url`, skipping non-navigable
/// schemes.
#[must_use]
pub fn resolve_navigable(reference: &str, base: &Url) -> Option<Url> {
    let reference = reference.trim();
    if reference.is_empty() || reference.starts_with('#') || reference.starts_with("javascript:") {
        return None;
    }
    base.join(reference)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https" | "file"))
}

/// Increment the page index carried by `current`.
///
/// The first numeric `page`, `p`, `pg` or `paged` query parameter wins;
/// otherwise a trailing `/page/N` path segment is incremented.
///
/// ```rust
/// use card_scout::url_utils::increment_page;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/blog/page/3/").unwrap();
/// assert_eq!(increment_page(&url).unwrap().as_str(), "https://example.com/blog/page/4/");
/// ```
#[must_use]
pub fn increment_page(current: &Url) -> Option<Url> {
    let pairs: Vec<(String, String)> = current
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for param in PAGE_PARAMS {
        let Some(index) = pairs.iter().position(|(k, v)| k == param && is_page_index(v)) else {
            continue;
        };
        let next = pairs[index].1.parse::<u64>().ok()?.checked_add(1)?;

        let mut url = current.clone();
        url.query_pairs_mut().clear().extend_pairs(pairs.iter().enumerate().map(
            |(i, (k, v))| {
                if i == index {
                    (k.clone(), next.to_string())
                } else {
                    (k.clone(), v.clone())
                }
            },
        ));
        return Some(url);
    }

    let caps = PAGE_PATH.captures(current.path())?;
    let next = caps["num"].parse::<u64>().ok()?.checked_add(1)?;
    let mut url = current.clone();
    url.set_path(&format!("{}{next}{}", &caps["prefix"], &caps["suffix"]));
    Some(url)
}

fn is_page_index(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
