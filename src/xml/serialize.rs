//! Serialization of element subtrees back to XML text.
//!
//! roxmltree is read-only, so writing is done by walking the tree. Output
//! covers elements, attributes, and text; comments and processing
//! instructions are dropped. `structurally_equal` is the matching
//! comparison used to validate round-trips at the parser boundary.

use std::fs;
use std::path::Path;

use roxmltree::Node;

use super::utils::get_tag_name;
use crate::error::Result;

/// Serialize an element subtree to an XML string.
pub fn node_to_string(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Serialize an element subtree and write it to a file.
///
/// # Errors
/// Returns an IO error if the file cannot be written.
pub fn save_to_file(node: Node<'_, '_>, path: &Path) -> Result<()> {
    fs::write(path, node_to_string(node))?;
    Ok(())
}

fn write_node(out: &mut String, node: Node<'_, '_>) {
    if node.is_text() {
        if let Some(text) = node.text() {
            push_escaped(out, text, false);
        }
        return;
    }
    if !node.is_element() {
        return;
    }

    out.push('<');
    out.push_str(get_tag_name(node));
    for attr in node.attributes() {
        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        push_escaped(out, attr.value(), true);
        out.push('"');
    }

    let has_content = node
        .children()
        .any(|c| c.is_element() || c.text().is_some_and(|t| !t.is_empty()));
    if !has_content {
        out.push_str("/>");
        return;
    }

    out.push('>');
    for child in node.children() {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(get_tag_name(node));
    out.push('>');
}

fn push_escaped(out: &mut String, text: &str, in_attribute: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Compare two element subtrees structurally: tag names, attributes, trimmed
/// text content, and element children must all match, recursively.
///
/// Whitespace-only text nodes are ignored, so reformatting does not break
/// equivalence.
pub fn structurally_equal(a: Node<'_, '_>, b: Node<'_, '_>) -> bool {
    if get_tag_name(a) != get_tag_name(b) {
        return false;
    }

    let attrs = |n: Node<'_, '_>| -> Vec<(String, String)> {
        n.attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect()
    };
    if attrs(a) != attrs(b) {
        return false;
    }

    let text = |n: Node<'_, '_>| -> String {
        n.children()
            .filter_map(|c| c.text())
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    };
    if text(a) != text(b) {
        return false;
    }

    let a_children: Vec<_> = a.children().filter(|c| c.is_element()).collect();
    let b_children: Vec<_> = b.children().filter(|c| c.is_element()).collect();
    a_children.len() == b_children.len()
        && a_children
            .iter()
            .zip(&b_children)
            .all(|(x, y)| structurally_equal(*x, *y))
}
