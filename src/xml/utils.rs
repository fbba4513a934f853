//! Utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlbind::xml::get_tag_name;
///
/// let xml = r#"<Menu><Category/></Menu>"#;
/// let doc = Document::parse(xml).unwrap();
/// let category = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(category), "Category");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlbind::xml::find_child;
///
/// let xml = r#"<root><child1/><child2/></root>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find_child(root, "child1").is_some());
/// assert!(find_child(root, "missing").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xmlbind::xml::find_children;
///
/// let xml = r#"<root><item>1</item><item>2</item><other/></root>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the text content of a node, trimmed.
///
/// Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get an attribute value from a node, or `None` if not present.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get all element children of a node, in document order.
///
/// Excludes text nodes, comments, and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
