//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`].

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors that can occur when accessing the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact with this identifier exists
    #[error("Contact not found: {0}")]
    NotFound(ContactId),
}

/// Errors that can occur when saving a contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Save was requested while the save gate is closed
    #[error("Save is disabled until every field is valid")]
    SaveDisabled,

    /// A field's keystroke rule refused the entered text
    #[error("Field {field} does not accept: {value}")]
    Rejected { field: &'static str, value: String },

    /// A field failed validation while building the draft
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store rejected the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
