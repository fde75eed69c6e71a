//! Error handling for classforge-io
//!
//! Wraps classforge-core ExError with IO-specific helpers

use std::fmt::Display;
use std::path::Path;

use classforge_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file operation
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_entity_id(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a malformed-XML error
pub fn xml_error(operation: &str, err: impl Display) -> ExError {
    ExError::new(ExErrorKind::InvalidModel)
        .with_op(operation.to_string())
        .with_message(format!("XML error: {}", err))
}

/// Create a JSON (de)serialization error
pub fn json_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(format!("JSON error: {}", err))
}

/// Create an input validation error
pub fn invalid_input(operation: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(reason.to_string())
}
