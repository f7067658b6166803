//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for interop schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema file contained no class records.
    #[error("schema contains no classes")]
    Empty,
}

/// Error type for schema-level failures raised during validation or emission.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Malformed argument passed to a pure conversion, such as an empty
    /// identifier handed to the naming converter.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Error message.
        message: String,
    },

    /// Structurally inconsistent class, property, or method.
    #[error("invalid schema for class '{class}': {message}")]
    InvalidSchema {
        /// Class the inconsistency was found in.
        class: String,
        /// Error message.
        message: String,
    },

    /// Reserved for future schema evolution. The current classification
    /// table is total, so this variant is never constructed.
    #[error("ambiguous marshal category for property '{property}' of class '{class}'")]
    AmbiguousMarshalCategory {
        /// Class name.
        class: String,
        /// Property name.
        property: String,
    },
}

impl SchemaError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an invalid schema error for the given class.
    pub fn invalid_schema(class: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            class: class.into(),
            message: message.into(),
        }
    }
}
