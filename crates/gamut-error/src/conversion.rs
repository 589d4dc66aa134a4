// Conversion errors raised by the path resolver and step executor

use thiserror::Error;

use crate::registration::NotFoundError;

/// Raised when a conversion cannot be resolved or executed.
///
/// All variants name the offending space(s); none are retried or
/// silently recovered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// An endpoint of the requested conversion has no registered descriptor.
    #[error("space '{0}' is not registered")]
    NotRegistered(String),

    /// Breadth-first search exhausted the graph without reaching the
    /// destination.
    #[error("no conversion path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    /// A resolved path step references a name with no registered space.
    /// Surfaces both never-registered direct targets and paths that went
    /// stale in the cache after an unregistration.
    #[error("conversion path references '{0}', which has no registered space")]
    UnregisteredStep(String),

    /// A resolved path step is not actually a declared direct target of
    /// its predecessor (stale or inconsistent metadata).
    #[error("'{to}' is not a declared direct target of '{from}'")]
    UndeclaredHop { from: String, to: String },

    /// The destination constructor rejected the exported component vector.
    #[error("constructor for '{space}' rejected the component vector: {reason}")]
    Construction { space: String, reason: String },

    /// A type-specific conversion hook failed.
    #[error("conversion hook for '{space}' failed: {reason}")]
    Hook { space: String, reason: String },
}

impl From<NotFoundError> for ConversionError {
    fn from(err: NotFoundError) -> Self {
        ConversionError::NotRegistered(err.0)
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
