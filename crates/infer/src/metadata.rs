//! Relationship Metadata - Typed relationship records produced by inference

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The kind of relationship between two tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipKind {
    /// Many-to-one: the owning table holds the foreign key
    BelongsTo,
    /// One-to-many: the related table holds the foreign key
    HasMany,
    /// One-to-one: the related table holds a unique-constrained foreign key
    HasOne,
    /// Many-to-many through a pivot table
    BelongsToMany,
    /// Polymorphic one-to-one via paired id/type columns
    MorphOne,
    /// Polymorphic one-to-many via paired id/type columns
    MorphMany,
}

impl RelationshipKind {
    /// Returns true if this relationship resolves to a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::BelongsToMany | Self::MorphMany)
    }

    /// Returns true if this relationship is polymorphic
    pub fn is_polymorphic(self) -> bool {
        matches!(self, Self::MorphOne | Self::MorphMany)
    }

    /// Returns true if this relationship goes through a pivot table
    pub fn requires_pivot(self) -> bool {
        matches!(self, Self::BelongsToMany)
    }

    /// Returns true if the accessor name uses the plural form of the
    /// target table (collections do; single-record kinds use the singular)
    pub fn uses_plural_name(self) -> bool {
        self.is_collection()
    }
}

/// A single inferred relationship, owned by the table it was inferred for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The kind of relationship
    pub kind: RelationshipKind,
    /// lowerCamelCase accessor name derived from the target table
    pub name: String,
    /// The target table
    pub related_table: String,
    /// Discriminator: the local/foreign column for BelongsTo/HasMany/HasOne,
    /// the pivot table name for BelongsToMany, the morph prefix for
    /// MorphOne/MorphMany
    pub key: String,
}

impl Relationship {
    pub fn new(
        kind: RelationshipKind,
        name: impl Into<String>,
        related_table: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            related_table: related_table.into(),
            key: key.into(),
        }
    }
}

/// A non-fatal diagnostic raised during inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceWarning {
    /// Table being processed when the warning fired
    pub table: String,
    /// The name that could not be inflected
    pub name: String,
    /// Human-readable description
    pub message: String,
}

/// Full result of one inference run: the ordered table → relationships
/// mapping plus any warnings gathered along the way
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Relationships per table, in schema order
    pub relationships: IndexMap<String, Vec<Relationship>>,
    /// Non-fatal diagnostics; the caller decides whether to act on them
    pub warnings: Vec<InferenceWarning>,
}
