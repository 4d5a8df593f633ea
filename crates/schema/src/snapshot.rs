//! Schema Snapshot - In-memory description of a relational schema
//!
//! A snapshot is the engine-facing view of a database: tables in schema
//! order, each with its columns, foreign keys, and indexes. Snapshots are
//! produced by an external collaborator (live introspection or a static
//! schema file); the JSON/YAML loaders here cover the static-file case.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{SchemaError, SchemaResult};

fn default_referenced_column() -> String {
    "id".to_string()
}

/// A foreign key owned by a table: a many-to-one edge from the owning
/// table to `referenced_table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Local column holding the reference
    pub column: String,
    /// Table the reference points at
    pub referenced_table: String,
    /// Column on the referenced table (primary key by convention)
    #[serde(default = "default_referenced_column")]
    pub referenced_column: String,
}

impl ForeignKey {
    pub fn new(column: impl Into<String>, referenced_table: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            referenced_table: referenced_table.into(),
            referenced_column: default_referenced_column(),
        }
    }
}

/// An index on a table. Only single-column unique indexes participate in
/// relationship inference; the rest are carried for completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    /// Indexed columns, in index order
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness
    pub unique: bool,
}

impl IndexInfo {
    /// A unique index over the given columns
    pub fn unique_on(columns: Vec<String>) -> Self {
        Self {
            columns,
            unique: true,
        }
    }

    /// True for a unique index covering exactly one column
    pub fn is_single_column_unique(&self) -> bool {
        self.unique && self.columns.len() == 1
    }
}

/// A single table: name, columns in definition order, foreign keys, indexes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name, unique within the snapshot
    pub name: String,
    /// Column names in definition order
    pub columns: Vec<String>,
    /// Foreign keys owned by this table
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    /// Indexes on this table
    #[serde(default)]
    pub indexes: Vec<IndexInfo>,
}

impl TableInfo {
    /// Create a table with the given name and columns
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Add a foreign key
    pub fn with_foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Add a single-column unique index
    pub fn with_unique_index(mut self, column: impl Into<String>) -> Self {
        self.indexes.push(IndexInfo::unique_on(vec![column.into()]));
        self
    }

    /// Whether the table has a column with this exact name
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Foreign keys of this table referencing the given table, in
    /// foreign-key order
    pub fn foreign_keys_referencing<'a>(
        &'a self,
        table: &'a str,
    ) -> impl Iterator<Item = &'a ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(move |fk| fk.referenced_table == table)
    }

    /// Whether a single-column unique index covers the given column
    pub fn has_unique_index_on(&self, column: &str) -> bool {
        self.indexes
            .iter()
            .any(|idx| idx.is_single_column_unique() && idx.columns[0] == column)
    }
}

/// An ordered snapshot of a relational schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    /// Tables in schema order
    pub tables: Vec<TableInfo>,
}

impl SchemaSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from a list of tables
    pub fn from_tables(tables: Vec<TableInfo>) -> Self {
        Self { tables }
    }

    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&TableInfo> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Whether a table with this exact name exists
    pub fn has_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Table names in schema order
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Parse and validate a snapshot from JSON
    pub fn from_json(content: &str) -> SchemaResult<Self> {
        let snapshot: Self = serde_json::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse and validate a snapshot from YAML
    pub fn from_yaml(content: &str) -> SchemaResult<Self> {
        let snapshot: Self = serde_yaml::from_str(content)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Load a snapshot from a `.json`, `.yaml`, or `.yml` file
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            _ => Err(SchemaError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Validate structural consistency: duplicate table names, foreign keys
    /// referencing unknown tables, and foreign-key or index columns missing
    /// from their owning table are all errors.
    pub fn validate(&self) -> SchemaResult<()> {
        for (i, table) in self.tables.iter().enumerate() {
            if self.tables[..i].iter().any(|t| t.name == table.name) {
                return Err(SchemaError::validation(format!(
                    "duplicate table name '{}'",
                    table.name
                )));
            }

            for fk in &table.foreign_keys {
                if !table.has_column(&fk.column) {
                    return Err(SchemaError::UnknownColumn {
                        table: table.name.clone(),
                        column: fk.column.clone(),
                        context: "foreign key".to_string(),
                    });
                }
                if !self.has_table(&fk.referenced_table) {
                    return Err(SchemaError::UnknownReferencedTable {
                        table: table.name.clone(),
                        column: fk.column.clone(),
                        referenced_table: fk.referenced_table.clone(),
                    });
                }
            }

            for index in &table.indexes {
                for column in &index.columns {
                    if !table.has_column(column) {
                        return Err(SchemaError::UnknownColumn {
                            table: table.name.clone(),
                            column: column.clone(),
                            context: "index".to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn users_posts_snapshot() -> SchemaSnapshot {
        SchemaSnapshot::from_tables(vec![
            TableInfo::new("users", vec!["id".into(), "name".into()]),
            TableInfo::new(
                "posts",
                vec!["id".into(), "title".into(), "user_id".into()],
            )
            .with_foreign_key(ForeignKey::new("user_id", "users")),
        ])
    }

    #[test]
    fn test_table_lookup() {
        let snapshot = users_posts_snapshot();

        assert!(snapshot.has_table("users"));
        assert!(!snapshot.has_table("comments"));
        assert_eq!(
            snapshot.table("posts").unwrap().columns,
            vec!["id", "title", "user_id"]
        );
        assert_eq!(
            snapshot.table_names().collect::<Vec<_>>(),
            vec!["users", "posts"]
        );
    }

    #[test]
    fn test_foreign_keys_referencing() {
        let snapshot = users_posts_snapshot();
        let posts = snapshot.table("posts").unwrap();

        let referencing: Vec<_> = posts.foreign_keys_referencing("users").collect();
        assert_eq!(referencing.len(), 1);
        assert_eq!(referencing[0].column, "user_id");
        assert_eq!(referencing[0].referenced_column, "id");

        assert_eq!(posts.foreign_keys_referencing("comments").count(), 0);
    }

    #[test]
    fn test_unique_index_detection() {
        let table = TableInfo::new("profiles", vec!["id".into(), "user_id".into()])
            .with_unique_index("user_id");

        assert!(table.has_unique_index_on("user_id"));
        assert!(!table.has_unique_index_on("id"));
    }

    #[test]
    fn test_multi_column_unique_index_does_not_count() {
        let mut table = TableInfo::new(
            "memberships",
            vec!["id".into(), "user_id".into(), "team_id".into()],
        );
        table.indexes.push(IndexInfo::unique_on(vec![
            "user_id".into(),
            "team_id".into(),
        ]));

        assert!(!table.has_unique_index_on("user_id"));
        assert!(!table.has_unique_index_on("team_id"));
    }

    #[test]
    fn test_validate_accepts_consistent_snapshot() {
        assert!(users_posts_snapshot().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_referenced_table() {
        let snapshot = SchemaSnapshot::from_tables(vec![TableInfo::new(
            "posts",
            vec!["id".into(), "author_id".into()],
        )
        .with_foreign_key(ForeignKey::new("author_id", "authors"))]);

        match snapshot.validate() {
            Err(SchemaError::UnknownReferencedTable {
                table,
                column,
                referenced_table,
            }) => {
                assert_eq!(table, "posts");
                assert_eq!(column, "author_id");
                assert_eq!(referenced_table, "authors");
            }
            other => panic!("expected UnknownReferencedTable, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unknown_foreign_key_column() {
        let snapshot = SchemaSnapshot::from_tables(vec![
            TableInfo::new("users", vec!["id".into()]),
            TableInfo::new("posts", vec!["id".into()])
                .with_foreign_key(ForeignKey::new("user_id", "users")),
        ]);

        assert!(matches!(
            snapshot.validate(),
            Err(SchemaError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_table_names() {
        let snapshot = SchemaSnapshot::from_tables(vec![
            TableInfo::new("users", vec!["id".into()]),
            TableInfo::new("users", vec!["id".into()]),
        ]);

        assert!(matches!(
            snapshot.validate(),
            Err(SchemaError::Validation { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "tables": [
                {"name": "users", "columns": ["id", "name"]},
                {
                    "name": "posts",
                    "columns": ["id", "user_id"],
                    "foreign_keys": [
                        {"column": "user_id", "referenced_table": "users"}
                    ]
                }
            ]
        }"#;

        let snapshot = SchemaSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.tables.len(), 2);
        assert_eq!(
            snapshot.table("posts").unwrap().foreign_keys[0].referenced_column,
            "id"
        );
    }

    #[test]
    fn test_from_json_rejects_inconsistent_snapshot() {
        let json = r#"{
            "tables": [
                {
                    "name": "posts",
                    "columns": ["id", "user_id"],
                    "foreign_keys": [
                        {"column": "user_id", "referenced_table": "users"}
                    ]
                }
            ]
        }"#;

        assert!(SchemaSnapshot::from_json(json).is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
tables:
  - name: users
    columns: [id, name]
  - name: profiles
    columns: [id, user_id]
    foreign_keys:
      - column: user_id
        referenced_table: users
    indexes:
      - columns: [user_id]
        unique: true
"#;

        let snapshot = SchemaSnapshot::from_yaml(yaml).unwrap();
        assert!(snapshot
            .table("profiles")
            .unwrap()
            .has_unique_index_on("user_id"));
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("schema.json");
        let mut file = std::fs::File::create(&json_path).unwrap();
        write!(
            file,
            r#"{{"tables": [{{"name": "users", "columns": ["id"]}}]}}"#
        )
        .unwrap();

        let snapshot = SchemaSnapshot::from_file(&json_path).unwrap();
        assert!(snapshot.has_table("users"));

        let unknown_path = dir.path().join("schema.toml");
        std::fs::write(&unknown_path, "tables = []").unwrap();
        assert!(matches!(
            SchemaSnapshot::from_file(&unknown_path),
            Err(SchemaError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_preserves_table_order() {
        let snapshot = users_posts_snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let reparsed = SchemaSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, reparsed);
    }
}
