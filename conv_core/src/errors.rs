//! # Error Types
//!
//! Structured error types for conv_core. Every failure is local and
//! recoverable: the engine returns a discriminated error immediately and the
//! presentation layer decides how to word it.
//!
//! ## Example
//!
//! ```rust
//! use conv_core::errors::{ConvError, ConvResult};
//!
//! fn require_finite(value: f64) -> ConvResult<f64> {
//!     if !value.is_finite() {
//!         return Err(ConvError::invalid_value(value.to_string(), "Value must be finite"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(require_finite(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for conv_core operations
pub type ConvResult<T> = Result<T, ConvError>;

/// Structured error type for conversion, lookup and storage operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ConvError {
    /// No quantity category is registered under this id
    #[error("Unknown category: '{category}'")]
    UnknownCategory { category: String },

    /// The unit symbol is not part of the named category
    #[error("Unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// The input cannot be interpreted as a finite number
    #[error("Invalid value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },

    /// A structured input field is invalid (calculator inputs, table definitions)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A preset or widget does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another process
    #[error("File locked: '{path}' is locked by {locked_by}")]
    FileLocked { path: String, locked_by: String },

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

impl ConvError {
    /// Create an UnknownCategory error
    pub fn unknown_category(category: impl Into<String>) -> Self {
        ConvError::UnknownCategory {
            category: category.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(category: impl Into<String>, unit: impl Into<String>) -> Self {
        ConvError::UnknownUnit {
            category: category.into(),
            unit: unit.into(),
        }
    }

    /// Create an InvalidValue error
    pub fn invalid_value(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvError::InvalidValue {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ConvError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ConvError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>) -> Self {
        ConvError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        ConvError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConvError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ConvError::UnknownCategory { .. } => "UNKNOWN_CATEGORY",
            ConvError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            ConvError::InvalidValue { .. } => "INVALID_VALUE",
            ConvError::InvalidInput { .. } => "INVALID_INPUT",
            ConvError::NotFound { .. } => "NOT_FOUND",
            ConvError::FileError { .. } => "FILE_ERROR",
            ConvError::FileLocked { .. } => "FILE_LOCKED",
            ConvError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ConvError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for ConvError {
    fn from(e: serde_json::Error) -> Self {
        ConvError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ConvError::unknown_unit("pressure", "kg");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnknownUnit\""));
        let roundtrip: ConvError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ConvError::unknown_category("x").error_code(), "UNKNOWN_CATEGORY");
        assert_eq!(ConvError::invalid_value("abc", "not a number").error_code(), "INVALID_VALUE");
        assert_eq!(ConvError::not_found("Preset", "123").error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_display_messages() {
        let err = ConvError::unknown_unit("flow", "psi");
        assert_eq!(err.to_string(), "Unknown unit 'psi' in category 'flow'");
    }

    #[test]
    fn test_only_locks_are_recoverable() {
        assert!(ConvError::file_locked("/tmp/a.json", "pid 42").is_recoverable());
        assert!(!ConvError::unknown_category("x").is_recoverable());
    }
}
