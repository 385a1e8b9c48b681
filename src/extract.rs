//! Card Record Extraction
//!
//! Once a card selector is known, each card is reduced to a flat record:
//! normalized text, absolute link and image URLs, and the first title, price
//! and description candidates found inside it.

use tracing::debug;
use url::Url;

use crate::error::Result;
use crate::patterns::{
    DESCRIPTION_SELECTOR, PRICE, PRICE_SELECTOR, TITLE_SELECTOR, WHITESPACE_NORMALIZE,
};
use crate::result::CardRecord;
use crate::tree::ElementNode;
use crate::url_utils::resolve;

/// Extract a record from every element below `root` matching `card_selector`.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::extract_cards;
/// use url::Url;
///
/// let doc = dom::parse(r#"
///     <div class="card"><h3>Lamp</h3><span class="price">$19.50</span><a href="/lamp">View</a></div>
///     <div class="card"><h3>Desk</h3><span class="price">$120</span><a href="/desk">View</a></div>
/// "#);
/// let root = DomNode::document_root(&doc);
/// let base = Url::parse("https://shop.example/catalog").unwrap();
///
/// let records = extract_cards(&root, ".card", &base)?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].title.as_deref(), Some("Lamp"));
/// assert_eq!(records[1].price.as_deref(), Some("$120"));
/// assert_eq!(records[1].links, vec!["https://shop.example/desk".to_string()]);
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn extract_cards<N: ElementNode>(
    root: &N,
    card_selector: &str,
    base_url: &Url,
) -> Result<Vec<CardRecord>> {
    let cards = root.select(card_selector)?;
    debug!(selector = card_selector, count = cards.len(), "extracting cards");
    cards.iter().map(|card| extract_card(card, base_url)).collect()
}

/// Extract a record from a single card element.
pub fn extract_card<N: ElementNode>(card: &N, base_url: &Url) -> Result<CardRecord> {
    let links = card
        .select("a[href]")?
        .iter()
        .filter_map(|a| a.attr("href"))
        .map(|href| resolve(&href, base_url))
        .filter(|href| !href.is_empty())
        .collect();

    let images = card
        .select("img[src]")?
        .iter()
        .filter_map(|img| img.attr("src"))
        .map(|src| resolve(&src, base_url))
        .filter(|src| !src.is_empty())
        .collect();

    let price = first_text(card, PRICE_SELECTOR)?
        .and_then(|text| PRICE.find(&text).map(|m| m.as_str().trim().to_string()));

    Ok(CardRecord {
        text: normalize_whitespace(&card.text()),
        links,
        images,
        title: first_text(card, TITLE_SELECTOR)?,
        price,
        description: first_text(card, DESCRIPTION_SELECTOR)?,
    })
}

/// Normalized text of the first non-empty match of `selector`.
fn first_text<N: ElementNode>(card: &N, selector: &str) -> Result<Option<String>> {
    Ok(card
        .select(selector)?
        .iter()
        .map(|node| normalize_whitespace(&node.text()))
        .find(|text| !text.is_empty()))
}

fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}
