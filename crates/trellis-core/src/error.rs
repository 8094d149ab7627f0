//! Error types for the entity model.

use thiserror::Error;

/// Result type alias for entity model operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading or validating an entity tree.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Component kind is not part of the catalog.
    #[error("Unknown component kind: {0}")]
    UnknownKind(String),

    /// Target platform is not supported.
    #[error("Unknown target platform: {0}")]
    UnknownPlatform(String),

    /// A leaf component was given children.
    #[error("Component '{id}' of kind {kind} cannot own children")]
    LeafWithChildren {
        id: String,
        kind: String,
    },

    /// Two entities in one tree share an identifier.
    #[error("Duplicate entity id: {0}")]
    DuplicateId(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
