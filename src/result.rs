//! Result types for detection output.
//!
//! Results live for a single call. Callers persist the selector strings, not
//! these structs.

use serde::{Deserialize, Serialize};

/// Which card strategy produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStrategy {
    /// Elements whose class contains a known card token.
    ClassToken,
    /// Dominant child tag of a container with a known container token.
    Container,
    /// Items of a `ul`/`ol` list.
    List,
}

/// A detected family of repeating cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetection {
    /// Selector re-selecting the whole card family.
    pub selector: String,

    /// Number of elements the selector matched at detection time.
    pub matched_count: usize,

    /// Strategy that accepted the family.
    pub strategy: CardStrategy,
}

/// Which pagination strategy produced a detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationStrategy {
    /// Element with a pagination class token holding next/prev or numbered links.
    ClassToken,
    /// Ancestor of a "next" affordance with previous or numbered siblings.
    NextAffordance,
    /// Compound selector for any "next"-like affordance; not a container.
    AffordanceFallback,
    /// Parent of links carrying a page parameter in their `href`.
    PageLinks,
}

/// A detected pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDetection {
    /// Selector of the pagination container (or affordance).
    pub selector: String,

    /// Strategy that found it.
    pub strategy: PaginationStrategy,
}

/// Combined card and pagination detection for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageAnalysis {
    /// Repeating card family, if one was found.
    pub card: Option<CardDetection>,

    /// Pagination control, if one was found.
    pub pagination: Option<PaginationDetection>,
}

/// Fields scraped from one card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Whitespace-normalized card text.
    pub text: String,

    /// Absolute `href` of every link in the card.
    pub links: Vec<String>,

    /// Absolute `src` of every image in the card.
    pub images: Vec<String>,

    /// First heading or title-like element.
    pub title: Option<String>,

    /// First price-like amount.
    pub price: Option<String>,

    /// First paragraph or description-like element.
    pub description: Option<String>,
}
