//! # card-scout
//!
//! Structural pattern detection and selector synthesis for web scraping.
//!
//! Given an element tree, this library finds the family of repeating
//! elements ("cards") a scraper should collect, finds the pagination control,
//! and turns any element into a short CSS selector that re-selects it on
//! later visits to the same template.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_scout::analyze;
//!
//! let card = r#"<div class="product-card"><img src="a.png"><h3>Item</h3><a href="/i">Buy</a></div>"#;
//! let html = format!(
//!     r#"<html><body><main>{}</main>
//!     <nav class="pagination"><a href="?page=1">1</a><a href="?page=2">2</a><a href="?page=2">Next</a></nav>
//!     </body></html>"#,
//!     card.repeat(8)
//! );
//!
//! let analysis = analyze(&html)?;
//! let card = analysis.card.unwrap();
//! assert_eq!(card.selector, r#"[class*="card"]"#);
//! assert_eq!(card.matched_count, 8);
//! assert_eq!(analysis.pagination.unwrap().selector, ".pagination");
//! # Ok::<(), card_scout::Error>(())
//! ```
//!
//! ## Host Trees
//!
//! All algorithms are generic over [`ElementNode`], the capability a host
//! tree has to offer (tag, id, classes, children, parent, text, and selector
//! queries). [`dom::DomNode`] implements it for documents parsed with
//! `dom_query`; other hosts can implement it for their own node handles.
//!
//! Every operation is a synchronous, read-only traversal with bounded cost.
//! Card and pagination detection are independent and may run concurrently
//! on the same tree.

mod error;
mod options;
mod result;

/// Host element-tree capability.
pub mod tree;

/// `dom_query` adapter for the host tree capability.
pub mod dom;

/// Compiled patterns and selector constants.
pub mod patterns;

/// Structural signatures of elements.
pub mod signature;

/// Signature similarity and the sampled structural quorum.
pub mod similarity;

/// Selector synthesis and escaping.
pub mod selector;

/// Card and pagination detection.
pub mod detect;

/// Card record extraction.
pub mod extract;

/// Next-page resolution from a pagination selector.
pub mod next_page;

/// URL resolution and page-index arithmetic.
pub mod url_utils;

// Public API - re-exports
pub use detect::{analyze_tree, detect_cards, detect_pagination};
pub use error::{Error, Result};
pub use extract::{extract_card, extract_cards};
pub use next_page::find_next_page;
pub use options::Options;
pub use result::{
    CardDetection, CardRecord, CardStrategy, PageAnalysis, PaginationDetection, PaginationStrategy,
};
pub use selector::{synthesize, synthesize_with_options};
pub use signature::{signature, StructuralSignature};
pub use similarity::{have_similar_structure, similarity};
pub use tree::ElementNode;

/// Detects cards and pagination in an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use card_scout::analyze;
///
/// let analysis = analyze("<html><body><p>Nothing repeats here.</p></body></html>")?;
/// assert!(analysis.card.is_none());
/// assert!(analysis.pagination.is_none());
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn analyze(html: &str) -> Result<PageAnalysis> {
    analyze_with_options(html, &Options::default())
}

/// Detects cards and pagination in an HTML document with custom options.
///
/// Options are validated first; invalid options return
/// [`Error::InvalidOptions`].
///
/// # Example
///
/// ```rust
/// use card_scout::{analyze_with_options, Options};
///
/// let tile = r#"<div class="tile"><h4>T</h4><a href="/t">Open</a></div>"#;
/// let options = Options {
///     card_tokens: vec!["tile".into()],
///     ..Options::default()
/// };
/// let analysis = analyze_with_options(&tile.repeat(3), &options)?;
/// assert_eq!(analysis.card.unwrap().matched_count, 3);
/// # Ok::<(), card_scout::Error>(())
/// ```
pub fn analyze_with_options(html: &str, options: &Options) -> Result<PageAnalysis> {
    options.validate()?;
    let doc = dom::parse(html);
    let root = dom::DomNode::document_root(&doc);
    analyze_tree(&root, options)
}
