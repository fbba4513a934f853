//! Path-based subset selection over XML trees.
//!
//! Implements a small XPath-style subset sufficient for picking element
//! subsets out of a document:
//!
//! - `A/B/C` — relative: children of the given node named `A`, then their
//!   children named `B`, and so on.
//! - `/A/B` — absolute: anchored at the document's root element, whose name
//!   must match the first segment.
//! - `//A/B` — descendant: every descendant element named `A` (including
//!   the given node itself), then down through the remaining segments.
//! - `*` — wildcard segment matching any element name.
//!
//! Results are returned in document order. An empty path yields no matches.

use roxmltree::Node;

use super::utils::get_tag_name;

/// Select all elements matching `path`, starting from `node`.
pub fn select<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Vec<Node<'a, 'input>> {
    let mut matches = Vec::new();

    if let Some(rest) = path.strip_prefix("//") {
        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return matches;
        }
        for descendant in node.descendants().filter(|n| n.is_element()) {
            if segment_matches(descendant, segments[0]) {
                descend(descendant, &segments[1..], &mut matches);
            }
        }
        return matches;
    }

    if let Some(rest) = path.strip_prefix('/') {
        let segments: Vec<&str> = rest.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return matches;
        }
        let root = node.document().root_element();
        if segment_matches(root, segments[0]) {
            descend(root, &segments[1..], &mut matches);
        }
        return matches;
    }

    let segments: Vec<&str> = path.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return matches;
    }
    for child in node.children().filter(|n| n.is_element()) {
        if segment_matches(child, segments[0]) {
            descend(child, &segments[1..], &mut matches);
        }
    }
    matches
}

/// Collect matches below `node` for the remaining path segments.
fn descend<'a, 'input>(
    node: Node<'a, 'input>,
    remaining: &[&str],
    matches: &mut Vec<Node<'a, 'input>>,
) {
    let Some((segment, rest)) = remaining.split_first() else {
        matches.push(node);
        return;
    };
    for child in node.children().filter(|n| n.is_element()) {
        if segment_matches(child, segment) {
            descend(child, rest, matches);
        }
    }
}

fn segment_matches(node: Node<'_, '_>, segment: &str) -> bool {
    segment == "*" || get_tag_name(node) == segment
}
