//! Custom error types for the application.
//!
//! - [`ImageLoadFailure`] - an image reference the browser could not render
//! - [`ContentError`] - bundled portfolio content that failed to parse or validate

use thiserror::Error;

/// An image reference that failed to load inside the media viewer.
///
/// Never propagated: the viewer stores it for inline display and keeps
/// navigation working.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load: {reference}")]
pub struct ImageLoadFailure {
    /// The image reference as handed to the viewer.
    pub reference: String,
}

impl ImageLoadFailure {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }
}

/// Errors raised while loading the bundled portfolio content.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The TOML document is malformed or does not match the content model.
    #[error("invalid portfolio content: {0}")]
    Parse(#[from] toml::de::Error),
    /// Two entries of the same collection share an id.
    #[error("duplicate {collection} id `{id}`")]
    DuplicateId { collection: &'static str, id: String },
    /// A project link uses the `#` placeholder instead of being omitted.
    #[error("project `{project}` has a placeholder {field}; omit the field instead")]
    PlaceholderLink {
        project: String,
        field: &'static str,
    },
}
