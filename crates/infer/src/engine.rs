//! Relationship Inference Engine - Derive typed relationships from a schema
//!
//! Walks a schema snapshot and emits, per table, an ordered list of
//! relationship declarations driven by foreign keys, unique indexes, pivot
//! naming conventions, and morph column pairs. Inference is a pure function
//! of the snapshot plus an explicit per-run pivot registry.

use indexmap::IndexMap;
use ormgen_schema::{SchemaSnapshot, TableInfo};
use tracing::{debug, warn};

use crate::error::{InferenceError, InferenceResult};
use crate::inflect;
use crate::metadata::{InferenceReport, InferenceWarning, Relationship, RelationshipKind};
use crate::registry::PivotRegistry;

/// Infers relationships between tables from foreign keys, unique indexes,
/// pivot-table naming, and polymorphic column pairs
#[derive(Debug, Default)]
pub struct RelationshipInferenceEngine;

impl RelationshipInferenceEngine {
    /// Create a new inference engine
    pub fn new() -> Self {
        Self
    }

    /// Infer relationships for every table in the snapshot, in schema order.
    ///
    /// A foreign key referencing a table absent from the snapshot aborts the
    /// whole run with [`InferenceError::SchemaInconsistency`]. An empty
    /// snapshot yields an empty mapping.
    pub fn infer(
        &self,
        schema: &SchemaSnapshot,
    ) -> InferenceResult<IndexMap<String, Vec<Relationship>>> {
        Ok(self.infer_with_report(schema)?.relationships)
    }

    /// Like [`infer`](Self::infer), but also returns the warnings gathered
    /// during the run (un-inflectable identifiers that fell back to their
    /// raw names) so the caller can decide to skip a table or abort.
    pub fn infer_with_report(&self, schema: &SchemaSnapshot) -> InferenceResult<InferenceReport> {
        let mut report = InferenceReport::default();
        // Run-scoped: one registry for the whole pass over the snapshot
        let mut registry = PivotRegistry::new();

        for table in &schema.tables {
            let relationships =
                self.infer_table(table, schema, &mut registry, &mut report.warnings)?;
            debug!(
                table = %table.name,
                count = relationships.len(),
                "inferred relationships"
            );
            report
                .relationships
                .insert(table.name.clone(), relationships);
        }

        Ok(report)
    }

    /// Infer the ordered relationship list for one table
    fn infer_table(
        &self,
        table: &TableInfo,
        schema: &SchemaSnapshot,
        registry: &mut PivotRegistry,
        warnings: &mut Vec<InferenceWarning>,
    ) -> InferenceResult<Vec<Relationship>> {
        let mut relationships = Vec::new();

        // Belongs-to: one per foreign key, in foreign-key order, even when
        // several keys point at the same table
        for fk in &table.foreign_keys {
            if !schema.has_table(&fk.referenced_table) {
                return Err(InferenceError::SchemaInconsistency {
                    table: table.name.clone(),
                    column: fk.column.clone(),
                    referenced_table: fk.referenced_table.clone(),
                });
            }
            relationships.push(Relationship::new(
                RelationshipKind::BelongsTo,
                self.accessor_name(
                    RelationshipKind::BelongsTo,
                    &fk.referenced_table,
                    &table.name,
                    warnings,
                ),
                fk.referenced_table.clone(),
                fk.column.clone(),
            ));
        }

        for other in &schema.tables {
            if other.name == table.name {
                continue;
            }

            // Has-many: one per foreign key of `other` referencing this
            // table. Always emitted, even when a has-one also applies.
            for fk in other.foreign_keys_referencing(&table.name) {
                relationships.push(Relationship::new(
                    RelationshipKind::HasMany,
                    self.accessor_name(
                        RelationshipKind::HasMany,
                        &other.name,
                        &table.name,
                        warnings,
                    ),
                    other.name.clone(),
                    fk.column.clone(),
                ));
            }

            // Has-one: first foreign key referencing this table whose local
            // column is covered by a single-column unique index
            if let Some(fk) = other
                .foreign_keys_referencing(&table.name)
                .find(|fk| other.has_unique_index_on(&fk.column))
            {
                relationships.push(Relationship::new(
                    RelationshipKind::HasOne,
                    self.accessor_name(
                        RelationshipKind::HasOne,
                        &other.name,
                        &table.name,
                        warnings,
                    ),
                    other.name.clone(),
                    fk.column.clone(),
                ));
            }

            // Belongs-to-many: a table named after the two singularized,
            // sorted names joins the pair; the registry keeps one emission
            // per (owner, partner) pair per run
            let pivot = pivot_table_name(&table.name, &other.name);
            if schema.has_table(&pivot) && registry.register(&table.name, &other.name) {
                relationships.push(Relationship::new(
                    RelationshipKind::BelongsToMany,
                    self.accessor_name(
                        RelationshipKind::BelongsToMany,
                        &other.name,
                        &table.name,
                        warnings,
                    ),
                    other.name.clone(),
                    pivot,
                ));
            }

            // Morph-one and morph-many both fire on the same column pair;
            // the schema cannot tell the cardinality apart, so the consumer
            // picks one
            let morph_prefix = inflect::singular(&table.name);
            let has_morph_columns = other.has_column(&format!("{}_id", morph_prefix))
                && other.has_column(&format!("{}_type", morph_prefix));
            if has_morph_columns {
                relationships.push(Relationship::new(
                    RelationshipKind::MorphOne,
                    self.accessor_name(
                        RelationshipKind::MorphOne,
                        &other.name,
                        &table.name,
                        warnings,
                    ),
                    other.name.clone(),
                    morph_prefix.clone(),
                ));
                relationships.push(Relationship::new(
                    RelationshipKind::MorphMany,
                    self.accessor_name(
                        RelationshipKind::MorphMany,
                        &other.name,
                        &table.name,
                        warnings,
                    ),
                    other.name.clone(),
                    morph_prefix,
                ));
            }
        }

        Ok(relationships)
    }

    /// Derive the lowerCamelCase accessor name for a relationship. Names
    /// that cannot be inflected fall back to the raw table name unchanged,
    /// with a warning surfaced to the caller.
    fn accessor_name(
        &self,
        kind: RelationshipKind,
        target_table: &str,
        owning_table: &str,
        warnings: &mut Vec<InferenceWarning>,
    ) -> String {
        if !inflect::is_safe_identifier(target_table) {
            warn!(
                table = %owning_table,
                name = %target_table,
                "table name cannot be inflected, using it unchanged"
            );
            warnings.push(InferenceWarning {
                table: owning_table.to_string(),
                name: target_table.to_string(),
                message: format!(
                    "table name '{}' cannot be inflected, using it unchanged",
                    target_table
                ),
            });
            return target_table.to_string();
        }

        let base = if kind.uses_plural_name() {
            inflect::plural(target_table)
        } else {
            inflect::singular(target_table)
        };
        inflect::camel_case(&base)
    }
}

/// Expected pivot-table name for a pair of tables: both names singularized,
/// sorted lexicographically, joined with an underscore
pub fn pivot_table_name(a: &str, b: &str) -> String {
    let mut names = [inflect::singular(a), inflect::singular(b)];
    names.sort();
    names.join("_")
}
