//! Error types for xmlbind.
//!
//! A single `BindError` enum serves library consumers; source-level failures
//! (malformed XML, unreadable files) convert via `#[from]` and abort before
//! any materialization starts.

use thiserror::Error;

/// Main error type for the xmlbind library.
#[derive(Debug, Error)]
pub enum BindError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No factory registered for the resolved constructor identifier.
    #[error("No constructor registered for '{constructor}'{}", .element.as_ref().map(|e| format!(" (element <{e}>)")).unwrap_or_default())]
    UnresolvedConstructor {
        constructor: String,
        element: Option<String>,
    },

    /// A factory exists but reported that it does not implement
    /// construction. Always fatal: this is a registration bug, not a
    /// data-driven absence.
    #[error("Constructor '{constructor}' does not implement construction from XML")]
    ConstructionUnsupported { constructor: String },

    /// YAML serialization error (CLI output).
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for xmlbind operations.
pub type Result<T> = std::result::Result<T, BindError>;
