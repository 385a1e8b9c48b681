//! Pagination Detection
//!
//! Looks for the control that moves between result pages:
//!
//! 1. An element with a pagination class token (`pag`, `pager`, `next`, ...)
//!    holding a clickable descendant that reads like next/prev or a page
//!    number.
//! 2. A dedicated "next" affordance (`rel=next`, `aria-label` or class
//!    containing "next") whose ancestor, within a few levels, has a
//!    previous-like or numbered sibling. That ancestor is the container.
//! 3. The compound "any next affordance" selector, when such affordances
//!    exist but no container was identified.
//! 4. Optionally, the parent of links whose `href` carries a page parameter.

use tracing::{debug, trace};

use crate::error::Result;
use crate::patterns::{
    ANCHOR_LIKE_SELECTOR, NEXT_AFFORDANCE_SELECTOR, NEXT_PREV_CLASS, NEXT_PREV_TEXT, PAGE_NUMBER,
    PAGE_PARAM_HREF, PREV_TEXT,
};
use crate::result::{PaginationDetection, PaginationStrategy};
use crate::selector::{class_contains_selector, container_selector, synthesize_with_options};
use crate::tree::ElementNode;
use crate::Options;

/// Detect the pagination control below `root`.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::{detect_pagination, Options};
///
/// let doc = dom::parse(r#"<div class="pagination"><a href="?p=1">1</a><a href="?p=2">2</a></div>"#);
/// let root = DomNode::document_root(&doc);
///
/// let found = detect_pagination(&root, &Options::default())?.unwrap();
/// assert_eq!(found.selector, ".pagination");
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn detect_pagination<N: ElementNode>(
    root: &N,
    options: &Options,
) -> Result<Option<PaginationDetection>> {
    if let Some(found) = by_class_token(root, options)? {
        return Ok(Some(found));
    }

    let affordances = root.select(NEXT_AFFORDANCE_SELECTOR)?;
    if let Some(found) = by_next_affordance(&affordances, options) {
        return Ok(Some(found));
    }
    if !affordances.is_empty() {
        debug!(count = affordances.len(), "falling back to next affordance selector");
        return Ok(Some(PaginationDetection {
            selector: NEXT_AFFORDANCE_SELECTOR.to_string(),
            strategy: PaginationStrategy::AffordanceFallback,
        }));
    }

    if options.detect_page_links {
        return by_page_links(root);
    }
    Ok(None)
}

fn by_class_token<N: ElementNode>(
    root: &N,
    options: &Options,
) -> Result<Option<PaginationDetection>> {
    for token in &options.pagination_tokens {
        for node in root.select(&class_contains_selector(token))? {
            if !has_page_control(&node)? {
                continue;
            }
            let selector = synthesize_with_options(&node, options)?;
            debug!(%token, %selector, "pagination accepted by class token");
            return Ok(Some(PaginationDetection {
                selector,
                strategy: PaginationStrategy::ClassToken,
            }));
        }
    }
    Ok(None)
}

/// Whether `node` holds a clickable descendant that reads like next/prev
/// (text or class) or a bare page number.
fn has_page_control<N: ElementNode>(node: &N) -> Result<bool> {
    Ok(node.select(ANCHOR_LIKE_SELECTOR)?.iter().any(|control| {
        let text = control.text();
        NEXT_PREV_TEXT.is_match(&text)
            || PAGE_NUMBER.is_match(&text)
            || NEXT_PREV_CLASS.is_match(&control.class_tokens().join(" "))
    }))
}

fn by_next_affordance<N: ElementNode>(
    affordances: &[N],
    options: &Options,
) -> Option<PaginationDetection> {
    for affordance in affordances {
        let mut current = affordance.clone();
        for level in 1..=options.pagination_ancestor_depth {
            let Some(ancestor) = current.parent() else {
                break;
            };

            let children = ancestor.children();
            let has_sibling_control = children.len() >= 2
                && children
                    .iter()
                    .filter(|child| !child.is_same(&current))
                    .any(|sibling| {
                        let text = sibling.text();
                        PREV_TEXT.is_match(&text) || PAGE_NUMBER.is_match(&text)
                    });

            if has_sibling_control {
                let selector = container_selector(&ancestor);
                debug!(%selector, level, "pagination container found above next affordance");
                return Some(PaginationDetection {
                    selector,
                    strategy: PaginationStrategy::NextAffordance,
                });
            }
            trace!(level, "no previous or numbered sibling");
            current = ancestor;
        }
    }
    None
}

fn by_page_links<N: ElementNode>(root: &N) -> Result<Option<PaginationDetection>> {
    for link in root.select("a[href]")? {
        let href = link.attr("href").unwrap_or_default();
        if !PAGE_PARAM_HREF.is_match(&href) {
            continue;
        }
        let Some(parent) = link.parent() else {
            continue;
        };
        if parent.id().is_none() && parent.class_tokens().is_empty() {
            continue;
        }
        if parent.select("a")?.len() > 1 {
            let selector = container_selector(&parent);
            debug!(%selector, %href, "pagination found from page links");
            return Ok(Some(PaginationDetection {
                selector,
                strategy: PaginationStrategy::PageLinks,
            }));
        }
    }
    Ok(None)
}
