//! Selector Synthesis
//!
//! Turns one concrete element into a short CSS selector that re-selects it
//! (and, for class-based selectors, its siblings-in-kind) on later visits to
//! the same template. Rules are tried in order and the first one that applies
//! wins:
//!
//! 1. `#id` when the element has an id. Ids are taken as unique.
//! 2. `.a.b` when the full class set matches exactly one element.
//! 3. `tag.a.b` when it matches fewer than `Options::unique_limit` elements.
//! 4. A positional path (`body > div:nth-of-type(2) > ul > li`), cut short at
//!    the nearest ancestor carrying an id.
//!
//! Id and class selectors survive markup drift; positional paths are brittle
//! and only used as the last resort.

mod escape;

pub use escape::escape_identifier;

use tracing::trace;

use crate::error::Result;
use crate::tree::{contains_node, ElementNode};
use crate::Options;

/// Synthesize a selector for `node` using default options.
///
/// Never fails for lack of a usable id or class: the positional path always
/// applies. Errors only come from the host's query engine.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::synthesize;
///
/// let doc = dom::parse(r#"<div><span class="price big">$3</span><p id="foo" class="x">y</p></div>"#);
///
/// let p = DomNode::first(&doc.select("p")).unwrap();
/// assert_eq!(synthesize(&p)?, "#foo");
///
/// let span = DomNode::first(&doc.select("span")).unwrap();
/// assert_eq!(synthesize(&span)?, ".price.big");
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn synthesize<N: ElementNode>(node: &N) -> Result<String> {
    synthesize_with_options(node, &Options::default())
}

/// Synthesize a selector for `node` with custom options.
pub fn synthesize_with_options<N: ElementNode>(node: &N, options: &Options) -> Result<String> {
    if let Some(id) = node.id() {
        return Ok(id_selector(&id));
    }

    let classes = node.class_tokens();
    if !classes.is_empty() {
        let selector = class_selector(&classes);
        let matched = node.select_in_document(&selector)?.len();
        if matched == 1 {
            return Ok(selector);
        }
        trace!(%selector, matched, "class selector not unique");

        let selector = tag_class_selector(&node.tag_name(), &classes);
        let matched = node.select_in_document(&selector)?.len();
        if matched < options.unique_limit {
            return Ok(selector);
        }
        trace!(%selector, matched, "tag+class selector too broad");
    }

    Ok(positional_path(node))
}

/// `#id`
#[must_use]
pub fn id_selector(id: &str) -> String {
    format!("#{}", escape_identifier(id))
}

/// `.a.b.c` for every class token.
#[must_use]
pub fn class_selector(classes: &[String]) -> String {
    classes
        .iter()
        .map(|class| format!(".{}", escape_identifier(class)))
        .collect()
}

/// `tag.a.b.c`
#[must_use]
pub fn tag_class_selector(tag: &str, classes: &[String]) -> String {
    format!("{}{}", escape_identifier(tag), class_selector(classes))
}

/// `[class*="token"]`: any element whose class attribute contains `token`.
#[must_use]
pub fn class_contains_selector(token: &str) -> String {
    let quoted = token.replace('\\', r"\\").replace('"', r#"\""#);
    format!("[class*=\"{quoted}\"]")
}

/// Selector for a container element: `#id`, else `tag.a.b`, else `tag`.
#[must_use]
pub fn container_selector<N: ElementNode>(node: &N) -> String {
    if let Some(id) = node.id() {
        return id_selector(&id);
    }
    let classes = node.class_tokens();
    if classes.is_empty() {
        escape_identifier(&node.tag_name())
    } else {
        tag_class_selector(&node.tag_name(), &classes)
    }
}

/// Positional path from the top of the document (or the nearest ancestor
/// with an id) down to `node`, joined with child combinators.
///
/// Each step is the tag name, suffixed with `:nth-of-type(k)` unless the
/// element is the first of its tag among its siblings. A handle that is not
/// an element (the document itself) yields `:root`.
#[must_use]
pub fn positional_path<N: ElementNode>(node: &N) -> String {
    if node.tag_name().is_empty() {
        return ":root".to_string();
    }

    let mut segments = Vec::new();
    let mut current = Some(node.clone());

    while let Some(element) = current {
        if let Some(id) = element.id() {
            segments.push(id_selector(&id));
            break;
        }

        let tag = element.tag_name();
        let index = 1 + element
            .previous_siblings()
            .iter()
            .filter(|sibling| sibling.tag_name() == tag)
            .count();

        let tag = escape_identifier(&tag);
        if index > 1 {
            segments.push(format!("{tag}:nth-of-type({index})"));
        } else {
            segments.push(tag);
        }

        current = element.parent();
    }

    segments.reverse();
    segments.join(" > ")
}

/// Whether `selector`, evaluated against the document, selects `node`.
pub fn reselects<N: ElementNode>(node: &N, selector: &str) -> Result<bool> {
    Ok(contains_node(&node.select_in_document(selector)?, node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{self, DomNode};

    fn first<'a>(doc: &'a dom::Document, css: &str) -> DomNode<'a> {
        DomNode::first(&doc.select(css)).unwrap()
    }

    #[test]
    fn id_wins_over_classes_and_position() {
        let doc = dom::parse(r#"<ul><li>a</li><li id="foo" class="unique">b</li></ul>"#);
        assert_eq!(synthesize(&first(&doc, "#foo")).unwrap(), "#foo");
    }

    #[test]
    fn unique_class_set_is_used() {
        let doc = dom::parse(r#"<div class="hero banner">x</div><div class="banner">y</div>"#);
        assert_eq!(synthesize(&first(&doc, ".hero")).unwrap(), ".hero.banner");
    }

    #[test]
    fn shared_class_falls_back_to_tag_and_class() {
        let doc = dom::parse(
            r#"<div class="card">1</div><div class="card">2</div><span class="card">3</span>"#,
        );
        assert_eq!(synthesize(&first(&doc, "div.card")).unwrap(), "div.card");
    }

    #[test]
    fn broad_class_falls_back_to_positional_path() {
        let items: String = (0..12).map(|i| format!("<p class=\"row\">{i}</p>")).collect();
        let doc = dom::parse(&format!("<div id=\"list\">{items}</div>"));
        let third = doc.select("p").nodes()[2];
        let selector = synthesize(&DomNode::from(third)).unwrap();
        assert_eq!(selector, "#list > p:nth-of-type(3)");
    }

    #[test]
    fn custom_unique_limit_accepts_broader_selectors() {
        let items: String = (0..12).map(|i| format!("<p class=\"row\">{i}</p>")).collect();
        let doc = dom::parse(&format!("<div>{items}</div>"));
        let options = Options {
            unique_limit: 20,
            ..Options::default()
        };
        let selector = synthesize_with_options(&first(&doc, "p"), &options).unwrap();
        assert_eq!(selector, "p.row");
    }

    #[test]
    fn positional_path_runs_to_html_without_ids() {
        let doc = dom::parse("<div>a</div><div><span>b</span></div>");
        let span = first(&doc, "span");
        assert_eq!(
            synthesize(&span).unwrap(),
            "html > body > div:nth-of-type(2) > span"
        );
    }

    #[test]
    fn nth_of_type_counts_only_same_tag() {
        let doc = dom::parse("<div id='d'><p>a</p><span>b</span><p>c</p></div>");
        let second_p = DomNode::from(doc.select("p").nodes()[1]);
        assert_eq!(positional_path(&second_p), "#d > p:nth-of-type(2)");
    }

    #[test]
    fn escaped_tokens_reselect_their_node() {
        let doc = dom::parse(
            r#"<div><span class="md:w-1/2">a</span><b id="1st">b</b><i class="x.y">c</i></div>"#,
        );
        for css in ["span", "b", "i"] {
            let node = first(&doc, css);
            let selector = synthesize(&node).unwrap();
            assert!(reselects(&node, &selector).unwrap(), "{selector} lost {css}");
        }
    }

    #[test]
    fn container_selector_preference() {
        let doc = dom::parse(
            r#"<nav id="p1"></nav><ul class="pager big"></ul><ol></ol>"#,
        );
        assert_eq!(container_selector(&first(&doc, "nav")), "#p1");
        assert_eq!(container_selector(&first(&doc, "ul")), "ul.pager.big");
        assert_eq!(container_selector(&first(&doc, "ol")), "ol");
    }

    #[test]
    fn class_contains_selector_quotes_value() {
        assert_eq!(class_contains_selector("card"), r#"[class*="card"]"#);
        assert_eq!(class_contains_selector(r#"a"b"#), r#"[class*="a\"b"]"#);

        let doc = dom::parse(r#"<div class="product-card">x</div><div class="cart">y</div>"#);
        let root = DomNode::document_root(&doc);
        assert_eq!(root.select(&class_contains_selector("card")).unwrap().len(), 1);
    }

    #[test]
    fn document_root_has_root_path() {
        let doc = dom::parse("<p>x</p>");
        assert_eq!(positional_path(&DomNode::document_root(&doc)), ":root");
    }
}
