//! Binding registry and materializer.
//!
//! This module holds the core dispatch mechanism: element names resolve to
//! constructor identifiers through a [`BindingRegistry`], identifiers look
//! up factories in a [`FactorySet`], and the [`Materializer`] invokes the
//! factory with the wrapped node. Behavior for unmapped names is governed
//! by a configurable [`MissingPolicy`].

mod bindings;
mod factory;
mod materializer;

pub use bindings::{BindingRegistry, MissingPolicy};
pub use factory::{Construction, ElementFactory, FactorySet, GenericObject, Object};
pub use materializer::{Materializer, MaterializerBuilder};
