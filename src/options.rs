//! Configuration options for card and pagination detection.
//!
//! The `Options` struct holds every token list and numeric bound the
//! detectors use, so strategies can be tuned without touching the algorithms.
//! It deserializes from partial JSON: missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration options for detection and selector synthesis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use card_scout::Options;
///
/// let options = Options {
///     similarity_threshold: 0.8,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Class-token substrings tried, in order, when looking for cards directly.
    ///
    /// Default: `card, item, product, post, article, result, listing, entry,
    /// cell, grid-item, col`
    pub card_tokens: Vec<String>,

    /// Class-token substrings identifying containers whose children may be cards.
    ///
    /// Default: `grid, list, results, products, items, cards, container,
    /// wrapper, listings, row`
    pub container_tokens: Vec<String>,

    /// Class-token substrings identifying pagination containers.
    ///
    /// Default: `pag, page, pagination, pager, pages, navigate, next, prev`
    pub pagination_tokens: Vec<String>,

    /// Minimum score for two signatures to count as the same kind of element.
    ///
    /// Default: `0.7`
    pub similarity_threshold: f64,

    /// Fraction of sampled comparisons that must pass the similarity threshold.
    ///
    /// Default: `0.75`
    pub quorum_fraction: f64,

    /// Maximum number of nodes compared against the reference node.
    ///
    /// Default: `4`
    pub quorum_sample: usize,

    /// Smallest accepted card family.
    ///
    /// Default: `3`
    pub min_cards: usize,

    /// Exclusive upper bound on a class-token candidate set.
    ///
    /// Default: `100`
    pub max_cards: usize,

    /// Share of a container's children the most frequent tag must cover.
    ///
    /// Default: `0.7`
    pub container_dominance: f64,

    /// Ancestor levels walked above a "next" affordance.
    ///
    /// Default: `3`
    pub pagination_ancestor_depth: usize,

    /// A tag+class selector is accepted when it matches fewer nodes than this.
    ///
    /// Default: `10`
    pub unique_limit: usize,

    /// Fall back to links carrying page parameters (`?page=2`, `/page/2`).
    ///
    /// Default: `false`
    pub detect_page_links: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            card_tokens: to_strings(&[
                "card", "item", "product", "post", "article", "result", "listing", "entry",
                "cell", "grid-item", "col",
            ]),
            container_tokens: to_strings(&[
                "grid", "list", "results", "products", "items", "cards", "container",
                "wrapper", "listings", "row",
            ]),
            pagination_tokens: to_strings(&[
                "pag", "page", "pagination", "pager", "pages", "navigate", "next", "prev",
            ]),
            similarity_threshold: 0.7,
            quorum_fraction: 0.75,
            quorum_sample: 4,
            min_cards: 3,
            max_cards: 100,
            container_dominance: 0.7,
            pagination_ancestor_depth: 3,
            unique_limit: 10,
            detect_page_links: false,
        }
    }
}

impl Options {
    /// Parse options from a JSON document. Absent fields keep their defaults.
    ///
    /// ```rust
    /// use card_scout::Options;
    ///
    /// let options = Options::from_json(r#"{"card_tokens": ["tile"], "min_cards": 4}"#)?;
    /// assert_eq!(options.card_tokens, vec!["tile".to_string()]);
    /// assert_eq!(options.max_cards, 100);
    /// # Ok::<(), card_scout::Error>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject fractions outside `[0, 1]`, empty token lists and inverted bounds.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("similarity_threshold", self.similarity_threshold),
            ("quorum_fraction", self.quorum_fraction),
            ("container_dominance", self.container_dominance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidOptions(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        for (name, tokens) in [
            ("card_tokens", &self.card_tokens),
            ("container_tokens", &self.container_tokens),
            ("pagination_tokens", &self.pagination_tokens),
        ] {
            if tokens.is_empty() || tokens.iter().any(|t| t.trim().is_empty()) {
                return Err(Error::InvalidOptions(format!(
                    "{name} must be a non-empty list of non-blank tokens"
                )));
            }
        }

        if self.min_cards >= self.max_cards {
            return Err(Error::InvalidOptions(format!(
                "min_cards ({}) must be below max_cards ({})",
                self.min_cards, self.max_cards
            )));
        }

        if self.quorum_sample == 0 {
            return Err(Error::InvalidOptions("quorum_sample must be at least 1".into()));
        }

        Ok(())
    }
}

fn to_strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}
