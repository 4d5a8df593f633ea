//! Error types for schema snapshot loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while loading or validating a schema snapshot
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("foreign key '{table}.{column}' references unknown table '{referenced_table}'")]
    UnknownReferencedTable {
        table: String,
        column: String,
        referenced_table: String,
    },

    #[error("{context} names unknown column '{column}' on table '{table}'")]
    UnknownColumn {
        table: String,
        column: String,
        context: String,
    },

    #[error("unsupported schema file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl SchemaError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
