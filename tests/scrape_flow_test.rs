//! End-to-end: detect selectors on a listing page, store them as strings,
//! then reuse them to pull records and find the next page.

use card_scout::dom::{self, DomNode};
use card_scout::{analyze, extract_cards, find_next_page};
use url::Url;

fn listing(page: usize) -> String {
    let cards: String = (0..4)
        .map(|i| {
            let n = page * 10 + i;
            format!(
                r#"<div class="product-item">
                    <img src="/img/{n}.jpg">
                    <h3 class="title">Product {n}</h3>
                    <span class="price">${n}.99</span>
                    <p>Description of product {n}</p>
                    <a href="/products/{n}">Details</a>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"<html><body>
            <div class="products">{cards}</div>
            <ul class="pagination">
                <li><a href="/shop?page={prev}">‹ Prev</a></li>
                <li class="active"><a href="/shop?page={page}">{page}</a></li>
                <li><a href="/shop?page={next}">Next ›</a></li>
            </ul>
        </body></html>"#,
        prev = page.saturating_sub(1).max(1),
        next = page + 1,
    )
}

#[test]
fn detect_then_scrape_then_paginate() {
    let html = listing(1);
    let analysis = analyze(&html).unwrap();

    let card_selector = analysis.card.unwrap().selector;
    let pagination_selector = analysis.pagination.unwrap().selector;
    assert_eq!(card_selector, r#"[class*="item"]"#);
    assert_eq!(pagination_selector, ".pagination");

    let doc = dom::parse(&html);
    let root = DomNode::document_root(&doc);
    let base = Url::parse("https://shop.example/shop?page=1").unwrap();

    let records = extract_cards(&root, &card_selector, &base).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title.as_deref(), Some("Product 10"));
    assert_eq!(records[0].price.as_deref(), Some("$10.99"));
    assert_eq!(records[0].description.as_deref(), Some("Description of product 10"));
    assert_eq!(records[3].links, vec!["https://shop.example/products/13"]);
    assert_eq!(records[3].images, vec!["https://shop.example/img/13.jpg"]);

    let next = find_next_page(&root, &pagination_selector, base.as_str()).unwrap();
    assert_eq!(next.unwrap().as_str(), "https://shop.example/shop?page=2");
}

#[test]
fn stored_selectors_work_on_the_next_page() {
    let first = analyze(&listing(1)).unwrap();
    let card_selector = first.card.unwrap().selector;

    let html = listing(2);
    let doc = dom::parse(&html);
    let root = DomNode::document_root(&doc);
    let base = Url::parse("https://shop.example/shop?page=2").unwrap();

    let records = extract_cards(&root, &card_selector, &base).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title.as_deref(), Some("Product 20"));
}

#[test]
fn analysis_serializes_for_storage() {
    let analysis = analyze(&listing(3)).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["card"]["matched_count"], 4);
    assert_eq!(json["card"]["strategy"], "class_token");
    assert_eq!(json["pagination"]["selector"], ".pagination");
}
