use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name is unique within the table's namespace
    pub name: String,

    /// The table being indexed
    pub table_name: String,

    /// Indexed column names, in order. Reserved words are stored quoted.
    pub columns: Vec<String>,

    /// When `true`, indexed entries are unique
    pub unique: bool,
}
