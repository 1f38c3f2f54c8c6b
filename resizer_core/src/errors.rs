//! # Error Types
//!
//! Structured error types for resizer_core. The drag handle itself never
//! fails; these cover layout construction and layout persistence.
//!
//! ## Example
//!
//! ```rust
//! use resizer_core::errors::{ResizeError, ResizeResult};
//!
//! fn validate_width(width: f32) -> ResizeResult<()> {
//!     if !width.is_finite() {
//!         return Err(ResizeError::invalid_input(
//!             "sidebar_width",
//!             width.to_string(),
//!             "Width must be a finite number",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for resizer_core operations
pub type ResizeResult<T> = Result<T, ResizeError>;

/// Structured error type for layout operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ResizeError {
    /// An input value is invalid (non-finite, inverted bounds, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl ResizeError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ResizeError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ResizeError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ResizeError::InvalidInput { .. } => "INVALID_INPUT",
            ResizeError::FileError { .. } => "FILE_ERROR",
            ResizeError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ResizeError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for ResizeError {
    fn from(e: serde_json::Error) -> Self {
        ResizeError::SerializationError { reason: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ResizeError::invalid_input("min_width", "900", "Minimum exceeds maximum");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let parsed: ResizeError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, parsed);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ResizeError::file_error("read", "a.json", "gone").error_code(), "FILE_ERROR");
        let bad: ResizeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(bad.error_code(), "SERIALIZATION_ERROR");
    }
}
