//! Binding registry mapping element names to constructor identifiers.

use std::collections::HashMap;

/// What to do when a resolved constructor identifier has no registered
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Log an error and return nothing; materialization continues.
    #[default]
    Error,
    /// Return a structured error naming the unresolved constructor.
    Fail,
    /// Return nothing, silently.
    Ignore,
    /// Return a generic placeholder object.
    Generic,
}

/// Registry mapping element names to constructor identifiers.
///
/// Entries are optional: an element name with no entry resolves to itself.
/// The registry also carries the missing-constructor policy, since the two
/// are configured together.
#[derive(Debug, Clone, Default)]
pub struct BindingRegistry {
    bindings: HashMap<String, String>,
    policy: MissingPolicy,
}

impl BindingRegistry {
    /// Create an empty registry with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve an element name to its constructor identifier.
    ///
    /// Returns the mapped identifier, or the element name itself if no
    /// binding exists. Never fails.
    #[must_use]
    pub fn resolve<'a>(&'a self, element_name: &'a str) -> &'a str {
        self.bindings
            .get(element_name)
            .map(String::as_str)
            .unwrap_or(element_name)
    }

    /// Replace the whole mapping and the policy.
    ///
    /// Prior bindings are discarded, not merged. Mapping values are not
    /// validated; a binding to an unregistered constructor surfaces at
    /// materialization time, governed by the policy.
    pub fn configure<K, V>(&mut self, bindings: impl IntoIterator<Item = (K, V)>, policy: MissingPolicy)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.bindings = bindings
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.policy = policy;
    }

    /// Add a single binding. Last write wins.
    pub fn bind(&mut self, element_name: impl Into<String>, constructor: impl Into<String>) {
        self.bindings.insert(element_name.into(), constructor.into());
    }

    /// Set the missing-constructor policy.
    pub fn set_policy(&mut self, policy: MissingPolicy) {
        self.policy = policy;
    }

    /// The configured missing-constructor policy.
    #[must_use]
    pub fn policy(&self) -> MissingPolicy {
        self.policy
    }

    /// Check whether an explicit binding exists for an element name.
    #[must_use]
    pub fn has_binding(&self, element_name: &str) -> bool {
        self.bindings.contains_key(element_name)
    }

    /// Number of explicit bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no explicit bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
