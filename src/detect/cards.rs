//! Card Family Detection
//!
//! Finds a family of repeating, similarly shaped elements. Three strategies
//! run in order and the first accepted family wins:
//!
//! 1. Elements whose class contains a known card token (`card`, `item`, ...),
//!    when the set has between `min_cards` and `max_cards` members.
//! 2. Children of containers with a known container token (`grid`, `list`,
//!    ...), when one tag dominates the container's children.
//! 3. Items of `ul`/`ol` lists.
//!
//! Every candidate family must also pass the sampled similarity quorum.

use tracing::{debug, trace};

use crate::error::Result;
use crate::result::{CardDetection, CardStrategy};
use crate::selector::{
    class_contains_selector, container_selector, escape_identifier, synthesize_with_options,
};
use crate::similarity::have_similar_structure;
use crate::tree::ElementNode;
use crate::Options;

/// Detect the repeating card family below `root`.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::{detect_cards, Options};
///
/// let card = r#"<div class="card"><img src="p.png"><h3>Name</h3><a href="/p">View</a></div>"#;
/// let doc = dom::parse(&card.repeat(6));
/// let root = DomNode::document_root(&doc);
///
/// let found = detect_cards(&root, &Options::default())?.unwrap();
/// assert_eq!(found.selector, r#"[class*="card"]"#);
/// assert_eq!(found.matched_count, 6);
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn detect_cards<N: ElementNode>(root: &N, options: &Options) -> Result<Option<CardDetection>> {
    if let Some(found) = by_class_token(root, options)? {
        return Ok(Some(found));
    }
    if let Some(found) = by_container(root, options)? {
        return Ok(Some(found));
    }
    by_list(root, options)
}

fn by_class_token<N: ElementNode>(root: &N, options: &Options) -> Result<Option<CardDetection>> {
    for token in &options.card_tokens {
        let selector = class_contains_selector(token);
        let candidates = root.select(&selector)?;
        let matched = candidates.len();

        if matched < options.min_cards || matched >= options.max_cards {
            trace!(%selector, matched, "card token candidate count out of range");
            continue;
        }
        if !have_similar_structure(&candidates, options) {
            trace!(%selector, matched, "card token candidates failed quorum");
            continue;
        }

        debug!(%selector, matched, "card family accepted by class token");
        return Ok(Some(CardDetection {
            selector,
            matched_count: matched,
            strategy: CardStrategy::ClassToken,
        }));
    }
    Ok(None)
}

fn by_container<N: ElementNode>(root: &N, options: &Options) -> Result<Option<CardDetection>> {
    for token in &options.container_tokens {
        for container in root.select(&class_contains_selector(token))? {
            let children = container.children();
            if children.len() < options.min_cards {
                continue;
            }

            let Some((tag, count)) = dominant_tag(&children) else {
                continue;
            };
            if (count as f64) < children.len() as f64 * options.container_dominance {
                trace!(%tag, count, total = children.len(), "no dominant child tag");
                continue;
            }

            let selector = format!(
                "{} > {}",
                synthesize_with_options(&container, options)?,
                escape_identifier(&tag)
            );
            let members = root.select(&selector)?;
            if members.len() < options.min_cards || !have_similar_structure(&members, options) {
                trace!(%selector, matched = members.len(), "container children rejected");
                continue;
            }

            debug!(%selector, matched = members.len(), "card family accepted by container");
            return Ok(Some(CardDetection {
                selector,
                matched_count: members.len(),
                strategy: CardStrategy::Container,
            }));
        }
    }
    Ok(None)
}

fn by_list<N: ElementNode>(root: &N, options: &Options) -> Result<Option<CardDetection>> {
    for list in root.select("ul, ol")? {
        let items = list.select("li")?;
        if items.len() < options.min_cards || !have_similar_structure(&items, options) {
            continue;
        }

        let selector = format!("{} > li", container_selector(&list));
        let matched = root.select(&selector)?.len();
        if matched < options.min_cards {
            trace!(%selector, matched, "list selector matched too few items");
            continue;
        }

        debug!(%selector, matched, "card family accepted from list");
        return Ok(Some(CardDetection {
            selector,
            matched_count: matched,
            strategy: CardStrategy::List,
        }));
    }
    Ok(None)
}

/// Most frequent tag among `children`; ties go to the tag seen first.
fn dominant_tag<N: ElementNode>(children: &[N]) -> Option<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for child in children {
        let tag = child.tag_name();
        match counts.iter_mut().find(|(seen, _)| *seen == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (tag, count) in counts {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((tag, count));
        }
    }
    best
}
