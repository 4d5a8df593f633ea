//! Error types for relationship inference

use ormgen_schema::SchemaError;
use thiserror::Error;

/// Result type alias for inference operations
pub type InferenceResult<T> = Result<T, InferenceError>;

/// Errors raised during a relationship inference run
#[derive(Debug, Error)]
pub enum InferenceError {
    /// A foreign key references a table absent from the snapshot.
    /// Aborts the whole run; nothing is silently dropped.
    #[error("foreign key '{table}.{column}' references table '{referenced_table}' which is not in the snapshot")]
    SchemaInconsistency {
        table: String,
        column: String,
        referenced_table: String,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
