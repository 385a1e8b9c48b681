//! Structural Signatures
//!
//! A signature is a cheap fingerprint of one element's shape: how many direct
//! children of each tag it has, whether its subtree carries an image, a link
//! or a heading, and how much text it holds. Signatures are recomputed on
//! every call because the host tree may change between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::patterns::HEADING_TAGS;
use crate::tree::ElementNode;

/// Shape fingerprint of a single element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSignature {
    /// Direct-child tag name to count.
    pub tag_counts: BTreeMap<String, usize>,

    /// Subtree contains an `img`.
    pub has_image: bool,

    /// Subtree contains an `a`.
    pub has_link: bool,

    /// Subtree contains an `h1`..`h6`.
    pub has_heading: bool,

    /// Character count of the trimmed subtree text.
    pub text_length: usize,
}

/// Compute the signature of `node`.
///
/// Tag counts only cover immediate children; the content flags and text
/// length cover the whole subtree. A leaf yields an empty histogram.
///
/// # Example
///
/// ```rust
/// use card_scout::dom::{self, DomNode};
/// use card_scout::signature;
///
/// let doc = dom::parse(r#"<div id="c"><img src="a.png"><div><h3>Title</h3></div></div>"#);
/// let card = DomNode::first(&doc.select("#c")).unwrap();
///
/// let sig = signature(&card);
/// assert_eq!(sig.tag_counts.get("div"), Some(&1));
/// assert!(sig.has_image && sig.has_heading && !sig.has_link);
/// assert_eq!(sig.text_length, 5);
/// ```
#[must_use]
pub fn signature<N: ElementNode>(node: &N) -> StructuralSignature {
    let mut tag_counts = BTreeMap::new();
    for child in node.children() {
        *tag_counts.entry(child.tag_name()).or_insert(0) += 1;
    }

    let mut has_image = false;
    let mut has_link = false;
    let mut has_heading = false;
    for descendant in node.descendants() {
        match descendant.tag_name().as_str() {
            "img" => has_image = true,
            "a" => has_link = true,
            tag if HEADING_TAGS.contains(&tag) => has_heading = true,
            _ => {}
        }
    }

    StructuralSignature {
        tag_counts,
        has_image,
        has_link,
        has_heading,
        text_length: node.text().chars().count(),
    }
}
