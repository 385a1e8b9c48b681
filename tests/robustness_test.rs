use card_scout::dom::{self, DomNode};
use card_scout::{analyze, analyze_with_options, detect_cards, synthesize, ElementNode, Error, Options};
use std::time::{Duration, Instant};

#[test]
fn empty_document_finds_nothing() {
    let analysis = analyze("").unwrap();
    assert!(analysis.card.is_none());
    assert!(analysis.pagination.is_none());
}

#[test]
fn malformed_html_does_not_panic() {
    for html in [
        "<div class=\"card\"><p>unclosed",
        "<p><div></p></div>",
        "<div class=\"card id=broken>",
        "&amp text &lt;",
        "<ul><li><li><li></ul>",
    ] {
        assert!(analyze(html).is_ok(), "failed on {html:?}");
    }
}

#[test]
fn invalid_options_are_rejected_before_parsing() {
    let options = Options {
        similarity_threshold: -0.1,
        ..Options::default()
    };
    assert!(matches!(
        analyze_with_options("<p>x</p>", &options),
        Err(Error::InvalidOptions(_))
    ));
}

#[test]
fn host_query_failures_propagate() {
    let doc = dom::parse("<div class='card'>x</div>");
    let root = DomNode::document_root(&doc);
    assert!(matches!(root.select("div[class"), Err(Error::InvalidSelector(_))));
}

#[test]
fn tokens_with_quotes_are_safe() {
    let options = Options {
        card_tokens: vec![r#"we"ird"#.to_string(), "card".to_string()],
        ..Options::default()
    };
    let card = r#"<div class="card"><h3>t</h3></div>"#;
    let doc = dom::parse(&card.repeat(3));
    let root = DomNode::document_root(&doc);
    assert!(detect_cards(&root, &options).unwrap().is_some());
}

#[test]
fn deep_nesting_synthesizes_a_path() {
    let depth = 200;
    let html = format!("{}<span>deep</span>{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let doc = dom::parse(&html);
    let span = DomNode::first(&doc.select("span")).unwrap();

    let selector = synthesize(&span).unwrap();
    assert!(selector.ends_with("div > span"));
    assert!(selector.starts_with("html > body > div"));
}

#[test]
fn large_card_sets_stay_fast() {
    let card = r#"<div class="result"><img src="x.png"><h3>Result</h3><a href="/r">Open</a></div>"#;
    let html = format!("<html><body>{}</body></html>", card.repeat(99));

    let start = Instant::now();
    let analysis = analyze(&html).unwrap();
    assert_eq!(analysis.card.unwrap().matched_count, 99);
    assert!(start.elapsed() < Duration::from_secs(5));
}
