//! Element view handed to factories.

use std::any::Any;
use std::path::Path;

use roxmltree::Node;

use crate::error::Result;
use crate::registry::{Materializer, Object};
use crate::xml;

/// A view of one XML element, bound to the materializer that produced it.
///
/// This is what factories receive: element access (name, attributes,
/// children, path queries, serialization) plus a re-entrant
/// [`materialize`](Self::materialize) call for recursing into children.
/// The underlying node is never mutated.
#[derive(Clone, Copy)]
pub struct ElementView<'a, 'input, 'm> {
    node: Node<'a, 'input>,
    materializer: &'m Materializer,
}

impl<'a, 'input, 'm> ElementView<'a, 'input, 'm> {
    /// Wrap a node with the given materializer.
    #[must_use]
    pub fn new(node: Node<'a, 'input>, materializer: &'m Materializer) -> Self {
        Self { node, materializer }
    }

    /// The element name, without namespace prefix.
    #[must_use]
    pub fn name(&self) -> &'a str {
        xml::get_tag_name(self.node)
    }

    /// The value of the named attribute, or `None` if absent.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// All attributes as name/value pairs, in document order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'a str, &'a str)> {
        self.node.attributes().map(|a| (a.name(), a.value())).collect()
    }

    /// The element's own text content, trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        xml::get_text(self.node)
    }

    /// Child elements, in document order.
    #[must_use]
    pub fn children(&self) -> Vec<ElementView<'a, 'input, 'm>> {
        xml::element_children(self.node)
            .map(|child| ElementView::new(child, self.materializer))
            .collect()
    }

    /// Elements matching a path query (see [`xml::select`] for the
    /// supported subset), in document order.
    #[must_use]
    pub fn query(&self, path: &str) -> Vec<ElementView<'a, 'input, 'm>> {
        xml::select(self.node, path)
            .into_iter()
            .map(|node| ElementView::new(node, self.materializer))
            .collect()
    }

    /// Materialize an object from this element — the re-entrant call back
    /// into the materializer, used by factories to recurse into children.
    ///
    /// # Errors
    /// See [`Materializer::materialize`].
    pub fn materialize(
        &self,
        override_name: Option<&str>,
        container: Option<&dyn Any>,
    ) -> Result<Option<Object>> {
        self.materializer
            .materialize(self.node, override_name, container)
    }

    /// Serialize this element subtree to an XML string.
    #[must_use]
    pub fn to_xml_string(&self) -> String {
        xml::node_to_string(self.node)
    }

    /// Serialize this element subtree to a file.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        xml::save_to_file(self.node, path)
    }

    /// The underlying node, for direct access to the XML library.
    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }
}

impl std::fmt::Debug for ElementView<'_, '_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementView")
            .field("name", &self.name())
            .finish()
    }
}
