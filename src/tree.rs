//! Host Element-Tree Capability
//!
//! Detection and selector synthesis never touch a concrete DOM type. They run
//! against [`ElementNode`], the small set of introspection and query
//! operations a host tree has to provide: a parsed document (see
//! [`crate::dom::DomNode`]), a live page bridged over some protocol, or a
//! synthetic tree in a test.
//!
//! Nodes are borrowed handles. Nothing in this crate retains them beyond a
//! single call or mutates the tree they belong to.

use crate::error::Result;

/// A handle to one element in a host tree.
///
/// `select` and `select_in_document` evaluate CSS selectors and must return
/// matches in document order. A selector the host cannot parse is reported
/// as [`crate::Error::InvalidSelector`] and propagates to the caller.
pub trait ElementNode: Clone {
    /// Local tag name as the selector engine matches it: lowercase for HTML
    /// elements, original case for SVG and MathML (`clipPath`). Empty for
    /// non-element nodes such as the document.
    fn tag_name(&self) -> String;

    /// Value of the `id` attribute, `None` when missing or blank.
    fn id(&self) -> Option<String>;

    /// Tokens of the `class` attribute, split on ASCII whitespace only.
    fn class_tokens(&self) -> Vec<String>;

    /// Any attribute value.
    fn attr(&self, name: &str) -> Option<String>;

    /// Element children, in order.
    fn children(&self) -> Vec<Self>;

    /// Parent element. `None` for the top element and for the document itself.
    fn parent(&self) -> Option<Self>;

    /// Trimmed text content of the whole subtree.
    fn text(&self) -> String;

    /// Descendants of this node matching `selector`.
    fn select(&self, selector: &str) -> Result<Vec<Self>>;

    /// Every node of the owning document matching `selector`.
    fn select_in_document(&self, selector: &str) -> Result<Vec<Self>>;

    /// Whether both handles point at the same element.
    fn is_same(&self, other: &Self) -> bool;

    /// Element siblings before this node, nearest last.
    fn previous_siblings(&self) -> Vec<Self> {
        let Some(parent) = self.parent() else {
            return Vec::new();
        };
        parent
            .children()
            .into_iter()
            .take_while(|sibling| !sibling.is_same(self))
            .collect()
    }

    /// Ancestor elements, nearest first.
    fn ancestors(&self) -> Vec<Self> {
        let mut ancestors = Vec::new();
        let mut current = self.parent();
        while let Some(node) = current {
            current = node.parent();
            ancestors.push(node);
        }
        ancestors
    }

    /// All descendant elements in document order (pre-order).
    fn descendants(&self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut stack: Vec<Self> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }
}

/// Whether `node` is among `nodes`.
pub fn contains_node<N: ElementNode>(nodes: &[N], node: &N) -> bool {
    nodes.iter().any(|candidate| candidate.is_same(node))
}
