//! DOM Adapter
//!
//! Binds the [`ElementNode`] capability to the `dom_query` crate so detection
//! can run directly on parsed HTML. Selectors are compiled with
//! `dom_query::Matcher`, which surfaces parse failures instead of silently
//! matching nothing.

use std::fmt;

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use dom_query::Matcher;

use crate::error::{Error, Result};
use crate::tree::ElementNode;

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get tag name as parsed (lowercase for HTML, camel case kept for SVG)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Compile `selector` and evaluate it below every node of `sel`.
pub fn try_select<'a>(sel: &Selection<'a>, selector: &str) -> Result<Selection<'a>> {
    let matcher = Matcher::new(selector)
        .map_err(|e| Error::InvalidSelector(format!("{selector}: {e:?}")))?;
    Ok(sel.select_matcher(&matcher))
}

/// An element of a parsed `dom_query` document.
#[derive(Clone, Copy)]
pub struct DomNode<'a> {
    node: NodeRef<'a>,
}

impl<'a> DomNode<'a> {
    /// The document node itself. Use it as the root for detection.
    #[must_use]
    pub fn document_root(doc: &'a Document) -> Self {
        Self { node: doc.root() }
    }

    /// First node of a selection, if any.
    #[must_use]
    pub fn first(sel: &Selection<'a>) -> Option<Self> {
        sel.nodes().first().map(|node| Self { node: *node })
    }

    /// Underlying `dom_query` node.
    #[must_use]
    pub fn node_ref(&self) -> NodeRef<'a> {
        self.node
    }

    fn selection(&self) -> Selection<'a> {
        Selection::from(self.node)
    }

    fn top(&self) -> NodeRef<'a> {
        let mut current = self.node;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    fn collect(sel: &Selection<'a>) -> Vec<Self> {
        sel.nodes().iter().map(|node| Self { node: *node }).collect()
    }
}

impl<'a> From<NodeRef<'a>> for DomNode<'a> {
    fn from(node: NodeRef<'a>) -> Self {
        Self { node }
    }
}

impl ElementNode for DomNode<'_> {
    fn tag_name(&self) -> String {
        if !self.node.is_element() {
            return String::new();
        }
        tag_name(&self.selection()).unwrap_or_default()
    }

    fn id(&self) -> Option<String> {
        self.attr("id").filter(|id| !id.trim().is_empty())
    }

    fn class_tokens(&self) -> Vec<String> {
        self.attr("class")
            .map(|class| {
                class
                    .split(|c: char| c.is_ascii_whitespace())
                    .filter(|token| !token.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.selection().attr(name).map(|s| s.to_string())
    }

    fn children(&self) -> Vec<Self> {
        Self::collect(&self.selection().children())
    }

    fn parent(&self) -> Option<Self> {
        self.node
            .parent()
            .filter(dom_query::NodeRef::is_element)
            .map(Self::from)
    }

    fn text(&self) -> String {
        text_content(&self.selection()).trim().to_string()
    }

    fn select(&self, selector: &str) -> Result<Vec<Self>> {
        Ok(Self::collect(&try_select(&self.selection(), selector)?))
    }

    fn select_in_document(&self, selector: &str) -> Result<Vec<Self>> {
        let document = Selection::from(self.top());
        Ok(Self::collect(&try_select(&document, selector)?))
    }

    fn is_same(&self, other: &Self) -> bool {
        self.node.id == other.node.id
    }
}

impl fmt::Debug for DomNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomNode")
            .field("tag", &self.tag_name())
            .field("id", &self.id())
            .field("class", &self.class_tokens())
            .finish()
    }
}
