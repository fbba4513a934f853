//! Factory trait and the constructor capability table.
//!
//! Constructors are looked up by string identifier in a [`FactorySet`] — an
//! explicit capability table registered ahead of time by the host
//! application, not reflection. Each factory decides for itself whether and
//! how to recurse into child elements via the [`ElementView`] it receives.

use std::any::Any;
use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::view::ElementView;

/// A materialized object: polymorphic and opaque to the core.
pub type Object = Box<dyn Any>;

/// Outcome of a factory invocation.
///
/// `Unsupported` means the factory exists but does not implement
/// construction from XML; the materializer always treats that as a fatal
/// registration error, distinct from "no factory registered". Recoverable
/// factory failures travel as `Err` on the `construct` return instead.
#[derive(Debug)]
pub enum Construction {
    /// A constructed object.
    Object(Object),
    /// The factory does not implement construction.
    Unsupported,
}

impl Construction {
    /// Wrap a concrete value as a constructed object.
    #[must_use]
    pub fn object(value: impl Any) -> Self {
        Self::Object(Box::new(value))
    }
}

/// Placeholder object returned under [`MissingPolicy::Generic`].
///
/// [`MissingPolicy::Generic`]: crate::registry::MissingPolicy::Generic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericObject;

/// A constructor for one kind of element.
///
/// Implementations receive the element (wrapped as an [`ElementView`]) and
/// an optional container reference — an opaque handle to the logical parent
/// in the result graph, relayed uninterpreted from the caller. Recursion
/// into children is the factory's responsibility: call
/// [`ElementView::materialize`] per child as needed.
pub trait ElementFactory: Send + Sync {
    /// Construct an object from an element.
    ///
    /// # Errors
    /// Errors from nested materialization (or the factory's own logic)
    /// propagate to the caller unchanged.
    fn construct(
        &self,
        element: &ElementView<'_, '_, '_>,
        container: Option<&dyn Any>,
    ) -> Result<Construction>;
}

impl<F> ElementFactory for F
where
    F: Fn(&ElementView<'_, '_, '_>, Option<&dyn Any>) -> Result<Construction> + Send + Sync,
{
    fn construct(
        &self,
        element: &ElementView<'_, '_, '_>,
        container: Option<&dyn Any>,
    ) -> Result<Construction> {
        self(element, container)
    }
}

/// Table mapping constructor identifiers to factories.
#[derive(Default)]
pub struct FactorySet {
    factories: HashMap<String, Box<dyn ElementFactory>>,
}

impl FactorySet {
    /// Create an empty factory set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for a constructor identifier. Last write wins.
    pub fn register(
        &mut self,
        constructor: impl Into<String>,
        factory: impl ElementFactory + 'static,
    ) {
        self.factories.insert(constructor.into(), Box::new(factory));
    }

    /// Look up the factory for a constructor identifier.
    #[must_use]
    pub fn get(&self, constructor: &str) -> Option<&dyn ElementFactory> {
        self.factories.get(constructor).map(|f| f.as_ref())
    }

    /// Check if a factory is registered for a constructor identifier.
    #[must_use]
    pub fn contains(&self, constructor: &str) -> bool {
        self.factories.contains_key(constructor)
    }

    /// Return the set of registered constructor identifiers.
    #[must_use]
    pub fn registered(&self) -> HashSet<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}

impl std::fmt::Debug for FactorySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorySet")
            .field("registered", &self.registered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UnitFactory;

    impl ElementFactory for UnitFactory {
        fn construct(
            &self,
            _element: &ElementView<'_, '_, '_>,
            _container: Option<&dyn Any>,
        ) -> Result<Construction> {
            Ok(Construction::object(()))
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut factories = FactorySet::new();
        factories.register("Menu", UnitFactory);

        assert!(factories.contains("Menu"));
        assert!(factories.get("Menu").is_some());
        assert!(factories.get("Missing").is_none());
    }

    #[test]
    fn test_closure_factory() {
        let mut factories = FactorySet::new();
        factories.register("Leaf", |_: &ElementView<'_, '_, '_>, _: Option<&dyn Any>| {
            Ok(Construction::object(42_u32))
        });

        assert!(factories.contains("Leaf"));
    }

    #[test]
    fn test_registered_identifiers() {
        let mut factories = FactorySet::new();
        factories.register("A", UnitFactory);
        factories.register("B", UnitFactory);

        let registered = factories.registered();
        assert!(registered.contains("A"));
        assert!(registered.contains("B"));
        assert_eq!(registered.len(), 2);
    }

    #[test]
    fn test_construction_object_downcast() {
        let Construction::Object(obj) = Construction::object(7_i32) else {
            panic!("expected object");
        };
        assert_eq!(*obj.downcast::<i32>().unwrap(), 7);
    }
}
