//! Following Pagination
//!
//! Given a stored pagination selector and the URL of the page the tree was
//! loaded from, work out the URL of the next page. Nothing is fetched here;
//! the caller loads the returned URL and runs the card selector again.

use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::patterns::{ACTIVE_PAGE_SELECTOR, NEXT_TEXT};
use crate::tree::ElementNode;
use crate::url_utils::{increment_page, parse_url, resolve_navigable};

/// URL of the page after `current_url`, or `None` at the last page.
///
/// Tried in order: a next-like link inside the pagination container, the
/// link following the active page marker, then incrementing a page index in
/// `current_url` itself. A result equal to `current_url` is discarded so a
/// crawl cannot loop on one page.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::find_next_page;
///
/// let doc = dom::parse(r#"<div class="pager"><a href="?page=1">1</a><a rel="next" href="?page=2">Next</a></div>"#);
/// let root = DomNode::document_root(&doc);
///
/// let next = find_next_page(&root, ".pager", "https://example.com/list?page=1")?;
/// assert_eq!(next.unwrap().as_str(), "https://example.com/list?page=2");
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn find_next_page<N: ElementNode>(
    root: &N,
    pagination_selector: &str,
    current_url: &str,
) -> Result<Option<Url>> {
    let current = parse_url(current_url)?;
    let container = root.select(pagination_selector)?.into_iter().next();

    let next = match container {
        Some(container) => {
            match next_link(&container, &current)? {
                Some(url) => Some(url),
                None => after_active(&container, &current)?,
            }
        }
        None => None,
    }
    .or_else(|| increment_page(&current));

    Ok(next.filter(|url| {
        let fresh = url != &current;
        if !fresh {
            debug!(%url, "next page equals current page");
        }
        fresh
    }))
}

/// First link in (or being) the container that points forward.
fn next_link<N: ElementNode>(container: &N, current: &Url) -> Result<Option<Url>> {
    let mut links = vec![container.clone()];
    links.extend(container.select("a[href]")?);

    Ok(links
        .iter()
        .filter(|link| link.tag_name() == "a")
        .filter(|link| {
            link.attr("rel").is_some_and(|rel| rel.split_whitespace().any(|r| r == "next"))
                || link
                    .class_tokens()
                    .iter()
                    .any(|class| class.to_ascii_lowercase().contains("next"))
                || NEXT_TEXT.is_match(&link.text())
        })
        .find_map(|link| link.attr("href").and_then(|href| resolve_navigable(&href, current))))
}

/// Link following the element marked as the current page.
fn after_active<N: ElementNode>(container: &N, current: &Url) -> Result<Option<Url>> {
    let Some(active) = container.select(ACTIVE_PAGE_SELECTOR)?.into_iter().next() else {
        return Ok(None);
    };

    // The marker may sit on the link itself or on a wrapper such as an `li`.
    let mut node = active;
    loop {
        if let Some(parent) = node.parent() {
            let siblings = parent.children();
            let following = siblings
                .iter()
                .skip_while(|sibling| !sibling.is_same(&node))
                .skip(1);
            for sibling in following {
                let link = if sibling.tag_name() == "a" {
                    Some(sibling.clone())
                } else {
                    sibling.select("a[href]")?.into_iter().next()
                };
                if let Some(url) = link
                    .and_then(|a| a.attr("href"))
                    .and_then(|href| resolve_navigable(&href, current))
                {
                    return Ok(Some(url));
                }
            }
            if parent.is_same(container) {
                return Ok(None);
            }
            node = parent;
        } else {
            return Ok(None);
        }
    }
}
