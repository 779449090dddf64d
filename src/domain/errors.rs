//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A name field is empty or whitespace only.
    #[error("Name cannot be empty")]
    EmptyName,

    /// A name contains something other than ASCII letters.
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// The provided phone number is empty or not all digits.
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The provided email address does not match `local@domain.tld`.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// The provided text is not a contact identifier.
    #[error("Invalid contact id: {0}")]
    InvalidId(String),
}
