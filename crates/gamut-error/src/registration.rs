// Registration and lookup errors for the descriptor store

use thiserror::Error;

use crate::schema::SchemaError;

/// Raised when a descriptor cannot be admitted to the store.
///
/// Registration always rejects before mutating state, so a failed call
/// leaves any existing registration intact and queryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("space '{0}' is already registered")]
    DuplicateName(String),

    #[error("malformed descriptor: {0}")]
    Malformed(#[from] SchemaError),
}

/// Raised when a space handle resolves to nothing in the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("space '{0}' is not registered")]
pub struct NotFoundError(pub String);

/// Result type for registration operations
pub type RegistrationResult<T> = std::result::Result<T, RegistrationError>;
