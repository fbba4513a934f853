//! xmlbind - Materialize typed object graphs from XML documents.
//!
//! Element names resolve to constructor identifiers through a
//! [`BindingRegistry`]; constructors are factories registered ahead of time
//! in a [`FactorySet`]; the [`Materializer`] dispatches nodes to factories.
//! Recursion into children is delegated to each factory through the
//! re-entrant [`ElementView::materialize`] call, so each type decides
//! whether and how to recurse.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use xmlbind::{Construction, ElementView, Materializer, MissingPolicy};
//!
//! let materializer = Materializer::builder()
//!     .bind("InternalLink", "Link")
//!     .bind("ExternalLink", "Link")
//!     .missing(MissingPolicy::Ignore)
//!     .factory("Link", |element: &ElementView<'_, '_, '_>, _: Option<&dyn Any>| {
//!         let target = element.attribute("target").unwrap_or_default().to_string();
//!         Ok(Construction::object(target))
//!     })
//!     .build();
//!
//! let object = materializer
//!     .materialize_document(r#"<InternalLink target="x"/>"#)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(*object.downcast::<String>().unwrap(), "x");
//! ```
//!
//! # Architecture
//!
//! - [`registry`]: binding registry, factory table, and materializer
//! - [`view`]: the element wrapper handed to factories
//! - [`xml`]: node helpers, path queries, serialization
//! - [`error`]: error types and Result alias
//! - [`demo`]: sample menu object model used by the CLI
//! - [`cli`]: command-line interface

pub mod cli;
pub mod demo;
pub mod error;
pub mod registry;
pub mod view;
pub mod xml;

// Re-export commonly used items
pub use error::{BindError, Result};
pub use registry::{
    BindingRegistry, Construction, ElementFactory, FactorySet, GenericObject, Materializer,
    MaterializerBuilder, MissingPolicy, Object,
};
pub use view::ElementView;
