//! Error types for code generation.

use thiserror::Error;
use trellis_core::CoreError;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur around code generation.
///
/// Generating markup itself never fails; these cover loading input,
/// parsing options and rendering export templates.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Invalid entity tree.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// Component name is empty after normalization.
    #[error("Invalid component name: {0:?}")]
    InvalidComponentName(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
