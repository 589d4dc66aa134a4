// Schema validation errors for descriptor records

use thiserror::Error;

/// Raised when a descriptor record is malformed.
///
/// The original field-presence and callability checks are discharged
/// statically by the type system; what remains are the value-level
/// constraints a well-formed record must satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("descriptor name may not be empty")]
    EmptyName,

    #[error("descriptor for '{0}' has an empty description")]
    EmptyDescription(String),

    #[error("descriptor for '{0}' declares an empty direct-target name")]
    EmptyTarget(String),
}

/// Result type for schema validation
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;
