//! Error types for markup rendering.
//!
//! This module provides [`RenderError`], the error type shared by the rendering
//! host and the helpers built on it. It abstracts over the underlying template
//! engine's errors so partial failures surface through a stable API.

use crate::template::RegistryError;

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A field type name did not match any known field kind.
    #[error("labeled_input type `{value}` is not a valid field type")]
    InvalidFieldType {
        /// The rejected type name, as given by the caller.
        value: String,
    },

    /// Template syntax error or compilation failure.
    #[error("template error: {0}")]
    TemplateError(String),

    /// Partial not found in the registry.
    #[error("partial not found: {0}")]
    TemplateNotFound(String),

    /// Data serialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Partial registry error (collision, unreadable file).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Helper configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (e.g., reading a partial from disk).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Other operational error.
    #[error("{0}")]
    OperationError(String),
}

impl RenderError {
    /// Create an invalid field type error.
    pub fn invalid_field_type(value: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::SerializationError(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::SyntaxError
            | ErrorKind::BadEscape
            | ErrorKind::UndefinedError
            | ErrorKind::UnknownTest
            | ErrorKind::UnknownFunction
            | ErrorKind::UnknownFilter
            | ErrorKind::UnknownMethod => RenderError::TemplateError(err.to_string()),
            ErrorKind::BadSerialization => RenderError::SerializationError(err.to_string()),
            _ => RenderError::OperationError(err.to_string()),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
