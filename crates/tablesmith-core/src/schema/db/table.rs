use super::{Column, ForeignKey, Index, Seed, UniqueConstraint};

use serde::{Deserialize, Serialize};

/// A database table produced for a model or for a many-to-many relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Schema (namespace) the table lives in
    pub schema: String,

    /// Name of the table
    pub name: String,

    /// The table's columns, in emission order
    pub columns: Vec<Column>,

    pub indices: Vec<Index>,

    pub foreign_keys: Vec<ForeignKey>,

    pub unique_constraints: Vec<UniqueConstraint>,

    /// Rows to insert once the table exists. Only enum tables carry any.
    pub seed: Option<Seed>,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns: vec![],
            indices: vec![],
            foreign_keys: vec![],
            unique_constraints: vec![],
            seed: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indices.iter().find(|index| index.name == name)
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }
}
