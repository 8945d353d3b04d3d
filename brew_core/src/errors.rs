//! # Error Types
//!
//! Structured error types for brew_core. The calculation engine itself never
//! fails; these errors come from the layers around it: recipe validation,
//! ingredient editing, brewbook lookups and file operations.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::errors::{BrewError, BrewResult};
//!
//! fn validate_batch(batch_size_l: f64) -> BrewResult<()> {
//!     if batch_size_l <= 0.0 {
//!         return Err(BrewError::InvalidInput {
//!             field: "batch_size_l".to_string(),
//!             value: batch_size_l.to_string(),
//!             reason: "Batch size must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for brew_core operations
pub type BrewResult<T> = Result<T, BrewError>;

/// Structured error type for everything outside the pure calculation engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BrewError {
    /// An input value is invalid (out of range, negative amount, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No ingredient at the given position of a recipe collection
    #[error("Item not found: no {kind} at index {index}")]
    ItemNotFound { kind: String, index: usize },

    /// A replacement ingredient does not belong to the edited collection
    #[error("Ingredient kind mismatch: expected {expected}, got {actual}")]
    KindMismatch { expected: String, actual: String },

    /// Recipe not found in the brewbook
    #[error("Recipe not found: {id}")]
    RecipeNotFound { id: String },

    /// Brew not found in the brewbook
    #[error("Brew not found: {id}")]
    BrewNotFound { id: String },

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

impl BrewError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(kind: impl Into<String>, index: usize) -> Self {
        BrewError::ItemNotFound {
            kind: kind.into(),
            index,
        }
    }

    /// Create a KindMismatch error
    pub fn kind_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        BrewError::KindMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BrewError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BrewError::InvalidInput { .. } => "INVALID_INPUT",
            BrewError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            BrewError::KindMismatch { .. } => "KIND_MISMATCH",
            BrewError::RecipeNotFound { .. } => "RECIPE_NOT_FOUND",
            BrewError::BrewNotFound { .. } => "BREW_NOT_FOUND",
            BrewError::FileError { .. } => "FILE_ERROR",
            BrewError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BrewError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
