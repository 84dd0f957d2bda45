//! Error types for the laptop price pipeline.
//!
//! Parsers never fail: unrecognized text yields empty results, and unseen
//! categories are recovered through fallback substitution. Everything that
//! does surface to the caller is a `PricingError`, and each variant maps to a
//! stable reason code through [`PricingError::kind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for pricing operations.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A categorical field has no encoding table in the loaded artifacts
    #[error("Configuration error: no encoding table for field '{field}'")]
    MissingEncodingTable { field: String },

    /// A categorical field has no fallback value in the loaded artifacts
    #[error("Configuration error: no fallback value for field '{field}'")]
    MissingFallback { field: String },

    /// The fallback value itself has no learned encoding
    #[error("Configuration error: fallback '{fallback}' for field '{field}' is not in its encoding table")]
    FallbackNotEncoded { field: String, fallback: String },

    /// The model expects a column the assembler did not produce
    #[error("Configuration error: expected column '{column}' was not assembled")]
    MissingColumn { column: String },

    /// The assembler produced a column the model does not expect
    #[error("Configuration error: assembled column '{column}' is not expected by the model")]
    UnexpectedColumn { column: String },

    /// The expected column list names a column twice
    #[error("Configuration error: column '{column}' is listed more than once")]
    DuplicateColumn { column: String },

    /// A numeric feature is absent and the missing-value policy rejects it
    #[error("Configuration error: column '{column}' has no value")]
    MissingValue { column: String },

    /// Division by zero while deriving a feature
    #[error("Division error: {feature} is undefined for a zero divisor")]
    DivisionByZero { feature: String },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The model failed or produced an unusable value
    #[error("Model error: {0}")]
    Model(String),
}

/// Result type alias for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Reason code distinguishing failure classes for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConfigurationError,
    DivisionError,
    InvalidInput,
    IoError,
    SerializationError,
    ModelError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self {
            ConfigurationError => write!(f, "configuration_error"),
            DivisionError => write!(f, "division_error"),
            InvalidInput => write!(f, "invalid_input"),
            IoError => write!(f, "io_error"),
            SerializationError => write!(f, "serialization_error"),
            ModelError => write!(f, "model_error"),
        }
    }
}

impl PricingError {
    /// Reason code for this error.
    pub fn kind(&self) -> ErrorKind {
        use PricingError::*;
        match self {
            MissingEncodingTable { .. }
            | MissingFallback { .. }
            | FallbackNotEncoded { .. }
            | MissingColumn { .. }
            | UnexpectedColumn { .. }
            | DuplicateColumn { .. }
            | MissingValue { .. } => ErrorKind::ConfigurationError,
            DivisionByZero { .. } => ErrorKind::DivisionError,
            InvalidInput(_) => ErrorKind::InvalidInput,
            Io(_) => ErrorKind::IoError,
            Serialization(_) => ErrorKind::SerializationError,
            Model(_) => ErrorKind::ModelError,
        }
    }

    /// Whether the error indicates a mismatch between the pipeline and its
    /// loaded artifacts rather than a problem with one request.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::ConfigurationError)
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::Serialization(format!("JSON error: {}", err))
    }
}
