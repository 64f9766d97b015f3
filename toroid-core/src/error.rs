//! Error types for toroid

use thiserror::Error;

/// Main error type for toroid operations
#[derive(Error, Debug)]
pub enum Error {
    /// A `TorusSpec` field violates its constraint. Raised before any buffer is allocated.
    #[error("Invalid parameter `{field}`: {constraint}")]
    InvalidParameter {
        field: &'static str,
        constraint: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, constraint: impl Into<String>) -> Self {
        Error::InvalidParameter {
            field,
            constraint: constraint.into(),
        }
    }

    /// Name of the offending field for parameter errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for toroid operations
pub type Result<T> = std::result::Result<T, Error>;
