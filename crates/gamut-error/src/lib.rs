// Gamut error handling framework
// Central location for the error taxonomy shared across the workspace

use thiserror::Error;

// Re-export common error handling tools for convenience
pub use anyhow;
pub use thiserror;

// Module structure
mod conversion;
mod registration;
mod schema;

pub use conversion::{ConversionError, ConversionResult};
pub use registration::{NotFoundError, RegistrationError, RegistrationResult};
pub use schema::{SchemaError, SchemaResult};

/// Umbrella error for operations that can fail in more than one domain,
/// such as metadata retrieval (not-found or a failed defensive re-check).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GamutError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Standard Result type using the umbrella error
pub type Result<T> = std::result::Result<T, GamutError>;

/// Standard error message format for logs and serialized summaries
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
}

impl GamutError {
    /// Stable machine-readable code for logs and summaries
    pub fn error_code(&self) -> &'static str {
        match self {
            GamutError::Schema(_) => "GAMUT_SCHEMA",
            GamutError::Registration(_) => "GAMUT_REGISTRATION",
            GamutError::NotFound(_) => "GAMUT_NOT_FOUND",
            GamutError::Conversion(_) => "GAMUT_CONVERSION",
        }
    }

    /// Serializable summary of this error
    pub fn to_message(&self) -> ErrorMessage {
        ErrorMessage {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}
