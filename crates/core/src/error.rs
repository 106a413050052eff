//! Error types for the representation model.
//!
//! Every fallible model operation returns [`Result`]. Construction failures
//! never leave a partially built node behind: the caller gets the error and
//! nothing else.

use thiserror::Error;

/// All errors raised by the value model and its codecs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A required input was empty or otherwise unusable
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An allocation could not be satisfied
    #[error("out of memory")]
    OutOfMemory,

    /// Lookup by key, type, interface or index failed
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation was already started
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A value of another kind was supplied or found
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Expected kind
        expected: String,
        /// Actual kind found
        actual: String,
    },

    /// Malformed JSON or transport payload
    #[error("parse error: {0}")]
    Parse(String),

    /// Feature or permission gate refused the call
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A representation could not be encoded for sending
    #[error("representation error: {0}")]
    Representation(String),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a [`Error::TypeMismatch`] from two displayable kinds.
    pub fn type_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
