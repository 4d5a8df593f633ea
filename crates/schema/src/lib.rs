//! Schema snapshot types and loaders for the ormgen toolkit
//!
//! Provides the in-memory description of a relational schema (tables,
//! columns, foreign keys, indexes) that relationship inference consumes,
//! plus JSON/YAML loaders and structural validation.

pub mod error;
pub mod snapshot;

pub use error::{SchemaError, SchemaResult};
pub use snapshot::{ForeignKey, IndexInfo, SchemaSnapshot, TableInfo};
