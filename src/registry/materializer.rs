//! Materializer: resolves constructors for XML nodes and invokes them.
//!
//! The materializer does not walk the tree. It dispatches a single node to
//! its factory; factories recurse into children themselves through the
//! re-entrant [`ElementView::materialize`] call, so traversal order is a
//! convention of the registered factories, not of this component.

use std::any::Any;
use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use super::bindings::{BindingRegistry, MissingPolicy};
use super::factory::{Construction, ElementFactory, FactorySet, GenericObject, Object};
use crate::error::{BindError, Result};
use crate::view::ElementView;
use crate::xml::get_tag_name;

/// Resolves and invokes constructors to turn XML nodes into typed objects.
///
/// Configuration (bindings, policy, factories) is frozen at construction:
/// there is no reconfiguration API, so a built materializer can be shared
/// read-only, and independent materializers with different configurations
/// can coexist.
pub struct Materializer {
    bindings: BindingRegistry,
    factories: FactorySet,
}

impl Materializer {
    /// Create a materializer from an explicit registry and factory table.
    #[must_use]
    pub fn new(bindings: BindingRegistry, factories: FactorySet) -> Self {
        Self {
            bindings,
            factories,
        }
    }

    /// Start building a materializer.
    #[must_use]
    pub fn builder() -> MaterializerBuilder {
        MaterializerBuilder::default()
    }

    /// The binding registry in effect.
    #[must_use]
    pub fn bindings(&self) -> &BindingRegistry {
        &self.bindings
    }

    /// The registered factories.
    #[must_use]
    pub fn factories(&self) -> &FactorySet {
        &self.factories
    }

    /// Materialize an object from an XML node.
    ///
    /// The effective element name is `override_name` if supplied, else the
    /// node's tag name. It is resolved to a constructor identifier through
    /// the binding registry, and the matching factory is invoked with the
    /// wrapped node and the (opaque) `container` reference.
    ///
    /// Returns `Ok(None)` when the missing-constructor policy suppresses an
    /// unresolved constructor.
    ///
    /// # Errors
    /// - [`BindError::UnresolvedConstructor`] under [`MissingPolicy::Fail`].
    /// - [`BindError::ConstructionUnsupported`] if the factory exists but
    ///   reports [`Construction::Unsupported`] — always fatal, regardless
    ///   of policy.
    /// - Any error raised by the factory itself, unchanged.
    pub fn materialize(
        &self,
        node: Node<'_, '_>,
        override_name: Option<&str>,
        container: Option<&dyn Any>,
    ) -> Result<Option<Object>> {
        let element_name = override_name.unwrap_or_else(|| get_tag_name(node));
        let constructor = self.bindings.resolve(element_name);

        let Some(factory) = self.factories.get(constructor) else {
            return self.unresolved(constructor, element_name);
        };

        let view = ElementView::new(node, self);
        match factory.construct(&view, container)? {
            Construction::Object(object) => Ok(Some(object)),
            Construction::Unsupported => {
                tracing::error!(constructor, "factory does not implement construction");
                Err(BindError::ConstructionUnsupported {
                    constructor: constructor.to_string(),
                })
            }
        }
    }

    /// Parse an XML string and materialize its root element.
    ///
    /// # Errors
    /// Fails fast with [`BindError::XmlParse`] on malformed input, before
    /// any materialization begins.
    pub fn materialize_document(&self, xml: &str) -> Result<Option<Object>> {
        let doc = Document::parse(xml)?;
        self.materialize(doc.root_element(), None, None)
    }

    /// Read a file, parse it, and materialize its root element.
    ///
    /// # Errors
    /// Fails fast with [`BindError::Io`] if the file is unreadable, or
    /// [`BindError::XmlParse`] if it is not well-formed XML.
    pub fn materialize_file(&self, path: &Path) -> Result<Option<Object>> {
        let xml = fs::read_to_string(path)?;
        self.materialize_document(&xml)
    }

    fn unresolved(&self, constructor: &str, element: &str) -> Result<Option<Object>> {
        match self.bindings.policy() {
            MissingPolicy::Error => {
                tracing::error!(constructor, element, "no constructor registered");
                Ok(None)
            }
            MissingPolicy::Fail => Err(BindError::UnresolvedConstructor {
                constructor: constructor.to_string(),
                element: Some(element.to_string()),
            }),
            MissingPolicy::Ignore => Ok(None),
            MissingPolicy::Generic => Ok(Some(Box::new(GenericObject))),
        }
    }
}

impl std::fmt::Debug for Materializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Materializer")
            .field("bindings", &self.bindings)
            .field("factories", &self.factories)
            .finish()
    }
}

/// Builder for [`Materializer`]: configure once, then freeze.
#[derive(Default)]
pub struct MaterializerBuilder {
    bindings: BindingRegistry,
    factories: FactorySet,
}

impl MaterializerBuilder {
    /// Bind an element name to a constructor identifier. Last write wins.
    #[must_use]
    pub fn bind(mut self, element_name: impl Into<String>, constructor: impl Into<String>) -> Self {
        self.bindings.bind(element_name, constructor);
        self
    }

    /// Replace all bindings and the policy wholesale.
    #[must_use]
    pub fn configure<K, V>(
        mut self,
        bindings: impl IntoIterator<Item = (K, V)>,
        policy: MissingPolicy,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.bindings.configure(bindings, policy);
        self
    }

    /// Set the missing-constructor policy.
    #[must_use]
    pub fn missing(mut self, policy: MissingPolicy) -> Self {
        self.bindings.set_policy(policy);
        self
    }

    /// Register a factory for a constructor identifier.
    #[must_use]
    pub fn factory(
        mut self,
        constructor: impl Into<String>,
        factory: impl ElementFactory + 'static,
    ) -> Self {
        self.factories.register(constructor, factory);
        self
    }

    /// Freeze the configuration into a materializer.
    #[must_use]
    pub fn build(self) -> Materializer {
        Materializer::new(self.bindings, self.factories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NameFactory;

    impl ElementFactory for NameFactory {
        fn construct(
            &self,
            element: &ElementView<'_, '_, '_>,
            _container: Option<&dyn Any>,
        ) -> Result<Construction> {
            Ok(Construction::object(element.name().to_string()))
        }
    }

    struct UnsupportedFactory;

    impl ElementFactory for UnsupportedFactory {
        fn construct(
            &self,
            _element: &ElementView<'_, '_, '_>,
            _container: Option<&dyn Any>,
        ) -> Result<Construction> {
            Ok(Construction::Unsupported)
        }
    }

    fn materialize_str(
        materializer: &Materializer,
        xml: &str,
        override_name: Option<&str>,
    ) -> Result<Option<Object>> {
        let doc = Document::parse(xml).unwrap();
        materializer.materialize(doc.root_element(), override_name, None)
    }

    #[test]
    fn test_materialize_with_factory() {
        let materializer = Materializer::builder().factory("test", NameFactory).build();

        let object = materialize_str(&materializer, "<test/>", None)
            .unwrap()
            .unwrap();
        assert_eq!(*object.downcast::<String>().unwrap(), "test");
    }

    #[test]
    fn test_materialize_override_name() {
        let materializer = Materializer::builder()
            .factory("other", NameFactory)
            .build();

        let object = materialize_str(&materializer, "<test/>", Some("other"))
            .unwrap()
            .unwrap();
        // The factory still sees the node's real name; only constructor
        // resolution used the override.
        assert_eq!(*object.downcast::<String>().unwrap(), "test");
    }

    #[test]
    fn test_shared_constructor_for_two_element_names() {
        let materializer = Materializer::builder()
            .bind("InternalLink", "Link")
            .bind("ExternalLink", "Link")
            .factory("Link", |_: &ElementView<'_, '_, '_>, _: Option<&dyn Any>| {
                Ok(Construction::object("link-shaped".to_string()))
            })
            .build();

        for xml in ["<InternalLink/>", "<ExternalLink/>"] {
            let object = materialize_str(&materializer, xml, None).unwrap().unwrap();
            assert_eq!(*object.downcast::<String>().unwrap(), "link-shaped");
        }
    }

    #[test]
    fn test_missing_ignore_returns_none() {
        let materializer = Materializer::builder()
            .missing(MissingPolicy::Ignore)
            .build();

        let result = materialize_str(&materializer, "<Unknown/>", None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_error_returns_none() {
        let materializer = Materializer::builder()
            .missing(MissingPolicy::Error)
            .build();

        let result = materialize_str(&materializer, "<Unknown/>", None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_missing_fail_raises_with_identifier() {
        let materializer = Materializer::builder().missing(MissingPolicy::Fail).build();

        let err = materialize_str(&materializer, "<Unknown/>", None).unwrap_err();
        assert!(matches!(
            &err,
            BindError::UnresolvedConstructor { constructor, .. } if constructor == "Unknown"
        ));
        assert!(err.to_string().contains("Unknown"));
    }

    #[test]
    fn test_missing_generic_returns_placeholder() {
        let materializer = Materializer::builder()
            .missing(MissingPolicy::Generic)
            .build();

        let object = materialize_str(&materializer, "<Unknown/>", None)
            .unwrap()
            .unwrap();
        assert!(object.downcast_ref::<GenericObject>().is_some());
    }

    #[test]
    fn test_unsupported_construction_is_fatal() {
        // Even under the most permissive policy: an existing factory that
        // cannot construct is a registration bug.
        let materializer = Materializer::builder()
            .missing(MissingPolicy::Ignore)
            .factory("broken", UnsupportedFactory)
            .build();

        let err = materialize_str(&materializer, "<broken/>", None).unwrap_err();
        assert!(matches!(
            err,
            BindError::ConstructionUnsupported { constructor } if constructor == "broken"
        ));
    }

    #[test]
    fn test_container_passed_through() {
        let materializer = Materializer::builder()
            .factory("child", |_: &ElementView<'_, '_, '_>, container: Option<&dyn Any>| {
                let label = container
                    .and_then(|c| c.downcast_ref::<String>())
                    .cloned()
                    .unwrap_or_default();
                Ok(Construction::object(label))
            })
            .build();

        let doc = Document::parse("<child/>").unwrap();
        let parent_label = "menu-root".to_string();
        let object = materializer
            .materialize(doc.root_element(), None, Some(&parent_label))
            .unwrap()
            .unwrap();
        assert_eq!(*object.downcast::<String>().unwrap(), "menu-root");
    }

    #[test]
    fn test_materialize_document_malformed_fails_fast() {
        let materializer = Materializer::builder().build();

        let err = materializer.materialize_document("<open>").unwrap_err();
        assert!(matches!(err, BindError::XmlParse(_)));
    }

    #[test]
    fn test_materialize_file_missing() {
        let materializer = Materializer::builder().build();

        let err = materializer
            .materialize_file(Path::new("/nonexistent/input.xml"))
            .unwrap_err();
        assert!(matches!(err, BindError::Io(_)));
    }

    #[test]
    fn test_factory_error_propagates() {
        let materializer = Materializer::builder()
            .factory("boom", |_: &ElementView<'_, '_, '_>, _: Option<&dyn Any>| {
                Err(BindError::ConstructionUnsupported {
                    constructor: "inner".to_string(),
                })
            })
            .build();

        let err = materialize_str(&materializer, "<boom/>", None).unwrap_err();
        assert!(err.to_string().contains("inner"));
    }
}
