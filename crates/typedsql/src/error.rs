//! Error types for typedsql
//!
//! Structural mistakes (clause order, kind mismatches, NULL into a NOT NULL column) are
//! rejected by the type checker and never show up here. This enum only covers what can go
//! wrong once a statement runs.

use thiserror::Error;

/// Result type alias for typedsql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Runtime errors raised while executing statements or reading result fields
#[derive(Debug, Error)]
pub enum Error {
    /// A result field was read while its row was not valid
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// A NULL field was read as a value
    #[error("NULL field: {0}")]
    NullField(String),

    /// A prepared statement parameter could not be set
    #[error("Parameter error: {0}")]
    Parameter(String),

    /// A runtime identifier or an incomplete dynamic statement was rejected
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error reported by the connector, passed through untouched
    #[error(transparent)]
    Connector(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create an invalid row error
    pub fn invalid_row(message: impl Into<String>) -> Self {
        Self::InvalidRow(message.into())
    }

    /// Create a NULL field error
    pub fn null_field(message: impl Into<String>) -> Self {
        Self::NullField(message.into())
    }

    /// Create a parameter error
    pub fn parameter(message: impl Into<String>) -> Self {
        Self::Parameter(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap a connector error without interpreting it
    pub fn connector<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connector(Box::new(err))
    }

    /// Check if this is an invalid row error
    pub fn is_invalid_row(&self) -> bool {
        matches!(self, Self::InvalidRow(_))
    }

    /// Check if this is a NULL field error
    pub fn is_null_field(&self) -> bool {
        matches!(self, Self::NullField(_))
    }

    /// Borrow the connector's own error, if this error came from the connector.
    pub fn connector_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Connector(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
