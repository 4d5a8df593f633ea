//! Relationship Inference - Derive ORM relationships from a schema snapshot
//!
//! Given a [`SchemaSnapshot`](ormgen_schema::SchemaSnapshot), the engine
//! emits per table an ordered list of typed relationship declarations
//! (belongs-to, has-many, has-one, belongs-to-many, morph-one, morph-many),
//! driven by foreign keys, single-column unique indexes, pivot-table naming,
//! and paired morph columns. The structured output is the contract consumed
//! by code-emission and scaffolding tooling.

pub mod engine;
pub mod error;
pub mod inflect;
pub mod metadata;
pub mod registry;

pub use engine::{pivot_table_name, RelationshipInferenceEngine};
pub use error::{InferenceError, InferenceResult};
pub use metadata::{InferenceReport, InferenceWarning, Relationship, RelationshipKind};
pub use registry::PivotRegistry;
