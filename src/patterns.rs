//! Compiled regex patterns and CSS selectors used by the detectors.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Pagination Patterns
// =============================================================================

/// Matches link text that points to an adjacent page: the words next/prev and
/// friends, or a label made only of arrow glyphs.
pub static NEXT_PREV_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(next|prev|previous|older|newer)\b|^\s*[«»‹›←→<>]+\s*$")
        .expect("NEXT_PREV_TEXT regex")
});

/// Matches class names of next/previous controls.
pub static NEXT_PREV_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(next|prev)").expect("NEXT_PREV_CLASS regex"));

/// Matches text of a control pointing backwards (or any bare arrow).
pub static PREV_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(prev|previous|older|back)\b|^\s*[«‹←<»›→>]+\s*$").expect("PREV_TEXT regex")
});

/// Matches text of a control pointing forwards.
pub static NEXT_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(next|newer|more)\b|^\s*[»›→>]+\s*$").expect("NEXT_TEXT regex")
});

/// Matches a bare page number.
pub static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("PAGE_NUMBER regex"));

/// Matches hrefs that carry a page index.
pub static PAGE_PARAM_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&](page|p|pg|paged)=\d+|/page/\d+").expect("PAGE_PARAM_HREF regex")
});

/// Captures a trailing `/page/N` path segment.
pub static PAGE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix>.*/page/)(?P<num>\d+)(?P<suffix>/?)$").expect("PAGE_PATH regex")
});

// =============================================================================
// Card Field Patterns
// =============================================================================

/// Matches a price with an optional currency symbol.
pub static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\$£€¥]?\s*[0-9][0-9,]*(?:\.[0-9]+)?").expect("PRICE regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Elements a user can click to change page.
pub const ANCHOR_LIKE_SELECTOR: &str = "a, button, [role='button'], [role='link']";

/// Dedicated "next page" affordances.
pub const NEXT_AFFORDANCE_SELECTOR: &str =
    "[rel='next'], [aria-label*='next' i], [class*='next']";

/// Marker of the current page inside a pagination container.
pub const ACTIVE_PAGE_SELECTOR: &str = ".active, .current, [aria-current='page']";

/// Card title candidates, in preference order.
pub const TITLE_SELECTOR: &str = "h2, h3, h1, .title, [class*='title'], .name, [class*='name']";

/// Card price candidates.
pub const PRICE_SELECTOR: &str = ".price, [class*='price'], .amount, [class*='amount']";

/// Card description candidates.
pub const DESCRIPTION_SELECTOR: &str =
    "p, .description, [class*='desc'], .summary, [class*='summary']";

/// Heading tags, used by structural signatures.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];
