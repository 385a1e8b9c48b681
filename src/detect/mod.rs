//! Card and pagination detection.
//!
//! Both detectors are read-only scans of the tree and independent of each
//! other; they may run in either order or concurrently on the same tree.
//! "Nothing found" is `Ok(None)`. Errors only come from the host tree.

pub mod cards;
pub mod pagination;

pub use cards::detect_cards;
pub use pagination::detect_pagination;

use crate::error::Result;
use crate::result::PageAnalysis;
use crate::tree::ElementNode;
use crate::Options;

/// Run card and pagination detection on the tree below `root`.
pub fn analyze_tree<N: ElementNode>(root: &N, options: &Options) -> Result<PageAnalysis> {
    Ok(PageAnalysis {
        card: detect_cards(root, options)?,
        pagination: detect_pagination(root, options)?,
    })
}
