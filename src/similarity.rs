//! Signature Similarity and the Sampled Quorum
//!
//! `similarity` averages independent feature groups, each worth one unit:
//! three content flags, the text-length ratio and (when either side has
//! children) the child-tag histogram overlap. `have_similar_structure` uses
//! it to vote on whether a candidate set repeats one shape.

use crate::signature::{signature, StructuralSignature};
use crate::tree::ElementNode;
use crate::Options;

/// Score in `[0, 1]` that two signatures describe the same kind of element.
///
/// Symmetric. Identical signatures with non-empty text score `1.0`.
///
/// # Example
///
/// ```rust
/// use card_scout::{similarity, StructuralSignature};
///
/// let a = StructuralSignature { has_link: true, text_length: 40, ..Default::default() };
/// let b = StructuralSignature { has_link: true, text_length: 20, ..Default::default() };
///
/// // Flags agree (3), text ratio 0.5, no children on either side.
/// assert_eq!(similarity(&a, &b), 3.5 / 4.0);
/// ```
#[must_use]
pub fn similarity(a: &StructuralSignature, b: &StructuralSignature) -> f64 {
    let mut score = 0.0;
    let mut total_features = 0.0;

    for (left, right) in [
        (a.has_image, b.has_image),
        (a.has_link, b.has_link),
        (a.has_heading, b.has_heading),
    ] {
        if left == right {
            score += 1.0;
        }
        total_features += 1.0;
    }

    let max_len = a.text_length.max(b.text_length).max(1);
    let min_len = a.text_length.min(b.text_length);
    score += min_len as f64 / max_len as f64;
    total_features += 1.0;

    if let Some(overlap) = tag_overlap(a, b) {
        score += overlap;
        total_features += 1.0;
    }

    score / total_features
}

/// Histogram overlap: 1 per equal count, 0.5 when both sides have the tag
/// with different counts, 0 when only one side has it. `None` when neither
/// side has children.
fn tag_overlap(a: &StructuralSignature, b: &StructuralSignature) -> Option<f64> {
    let keys: Vec<&String> = {
        let mut keys: Vec<&String> = a.tag_counts.keys().chain(b.tag_counts.keys()).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    };
    if keys.is_empty() {
        return None;
    }

    let matched: f64 = keys
        .iter()
        .map(|tag| {
            let left = a.tag_counts.get(*tag).copied().unwrap_or(0);
            let right = b.tag_counts.get(*tag).copied().unwrap_or(0);
            if left == right {
                1.0
            } else if left > 0 && right > 0 {
                0.5
            } else {
                0.0
            }
        })
        .sum();

    Some(matched / keys.len() as f64)
}

/// Whether a candidate set repeats one structure.
///
/// The first node is the reference and is compared against at most
/// `options.quorum_sample` of the following nodes, so large sets cost the same
/// as small ones. The set passes when at least
/// `ceil(min(n - 1, sample) * quorum_fraction)` comparisons reach
/// `options.similarity_threshold`, which lets a minority of outliers through.
/// Sets of fewer than two nodes never pass.
#[must_use]
pub fn have_similar_structure<N: ElementNode>(nodes: &[N], options: &Options) -> bool {
    let Some((reference, rest)) = nodes.split_first() else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }

    let sampled = rest.len().min(options.quorum_sample);
    let reference = signature(reference);
    let similar = rest[..sampled]
        .iter()
        .filter(|node| similarity(&reference, &signature(*node)) >= options.similarity_threshold)
        .count();

    similar >= required_votes(sampled, options.quorum_fraction)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn required_votes(sampled: usize, fraction: f64) -> usize {
    (sampled as f64 * fraction).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{self, DomNode};
    use std::collections::BTreeMap;

    fn sig(tags: &[(&str, usize)], image: bool, link: bool, heading: bool, text: usize) -> StructuralSignature {
        StructuralSignature {
            tag_counts: tags.iter().map(|(t, c)| ((*t).to_string(), *c)).collect::<BTreeMap<_, _>>(),
            has_image: image,
            has_link: link,
            has_heading: heading,
            text_length: text,
        }
    }

    #[test]
    fn identical_signatures_score_one() {
        let s = sig(&[("img", 1), ("h3", 1), ("a", 1)], true, true, true, 42);
        assert_eq!(similarity(&s, &s), 1.0);
    }

    #[test]
    fn empty_text_lowers_self_similarity() {
        let s = sig(&[], false, false, false, 0);
        // 3 flag agreements + text ratio 0/1, no histogram group.
        assert_eq!(similarity(&s, &s), 0.75);
    }

    #[test]
    fn partial_tag_match_scores_half() {
        let a = sig(&[("p", 2), ("img", 1)], true, false, false, 10);
        let b = sig(&[("p", 3)], true, false, false, 10);
        // flags 3, text 1, tags (0.5 + 0) / 2
        assert_eq!(similarity(&a, &b), (3.0 + 1.0 + 0.25) / 5.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = sig(&[("div", 2), ("span", 1)], true, true, false, 120);
        let b = sig(&[("div", 1), ("a", 4)], false, true, true, 33);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let a = sig(&[("div", 9)], true, true, true, 1000);
        let b = sig(&[("p", 1)], false, false, false, 1);
        let s = similarity(&a, &b);
        assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn required_votes_rounds_up() {
        assert_eq!(required_votes(4, 0.75), 3);
        assert_eq!(required_votes(3, 0.75), 3);
        assert_eq!(required_votes(2, 0.75), 2);
        assert_eq!(required_votes(1, 0.75), 1);
    }

    #[test]
    fn quorum_rejects_singletons() {
        let doc = dom::parse("<div class='c'><p>x</p></div>");
        let root = DomNode::document_root(&doc);
        let nodes = crate::ElementNode::select(&root, ".c").unwrap();
        assert!(!have_similar_structure(&nodes, &Options::default()));
        assert!(!have_similar_structure::<DomNode>(&[], &Options::default()));
    }

    #[test]
    fn quorum_tolerates_one_outlier_in_sample() {
        let card = "<div class='c'><img src='a.png'><h3>Title</h3><a href='#'>Link</a></div>";
        let odd = format!("<div class='c'><p>{}</p></div>", "long text ".repeat(20));
        let html = format!("{card}{card}{odd}{card}{card}{card}");
        let doc = dom::parse(&html);
        let root = DomNode::document_root(&doc);
        let nodes = crate::ElementNode::select(&root, ".c").unwrap();

        assert!(have_similar_structure(&nodes, &Options::default()));
    }

    #[test]
    fn quorum_fails_with_two_outliers_in_sample() {
        let card = "<div class='c'><img src='a.png'><h3>Title</h3><a href='#'>Link</a></div>";
        let odd = format!("<div class='c'><p>{}</p></div>", "long text ".repeat(20));
        let html = format!("{card}{odd}{odd}{card}{card}{card}{card}");
        let doc = dom::parse(&html);
        let root = DomNode::document_root(&doc);
        let nodes = crate::ElementNode::select(&root, ".c").unwrap();

        assert!(!have_similar_structure(&nodes, &Options::default()));
    }
}
