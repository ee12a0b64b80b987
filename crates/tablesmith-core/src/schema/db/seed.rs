use serde::{Deserialize, Serialize};

/// Rows inserted into a table right after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Columns each row supplies, in order
    pub columns: Vec<String>,

    /// Literal values, positionally matching `columns`
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl Seed {
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
