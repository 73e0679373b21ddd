//! # Error Types
//!
//! Structured error types for bendlab_core. Interactive input validation
//! never produces these: malformed operator input is consumed by the prompt
//! loops in the CLI. What remains is domain validation inside the engine,
//! catalog lookups, report file writes, and a closed console stream.
//!
//! ## Example
//!
//! ```rust
//! use bendlab_core::errors::{BendError, BendResult};
//!
//! fn validate_length(length_cm: f64) -> BendResult<()> {
//!     if length_cm <= 0.0 {
//!         return Err(BendError::invalid_input(
//!             "length_cm",
//!             length_cm.to_string(),
//!             "Length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bendlab_core operations
pub type BendResult<T> = Result<T, BendError>;

/// Structured error type for the calculation engine and report layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BendError {
    /// An input value is invalid (non-positive dimension, bad weight, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material selection outside the catalog range
    #[error("Selection {choice} is out of range (valid: 1..={max})")]
    OutOfRange { choice: usize, max: usize },

    /// Report file I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Console stream failed or closed mid-prompt
    #[error("Console I/O failed: {reason}")]
    Console { reason: String },
}

impl BendError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BendError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an OutOfRange error for a 1-based catalog selection
    pub fn out_of_range(choice: usize, max: usize) -> Self {
        BendError::OutOfRange { choice, max }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BendError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a Console error
    pub fn console(reason: impl Into<String>) -> Self {
        BendError::Console {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BendError::InvalidInput { .. } => "INVALID_INPUT",
            BendError::OutOfRange { .. } => "OUT_OF_RANGE",
            BendError::FileError { .. } => "FILE_ERROR",
            BendError::Console { .. } => "CONSOLE",
        }
    }
}
