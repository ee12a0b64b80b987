use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueConstraint {
    pub name: String,

    pub table_name: String,

    /// The column combination that must be unique
    pub columns: Vec<String>,
}
