use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Schema of both the owning and the referenced table
    pub schema: String,

    /// Constraint name. Never empty once a table has been assembled.
    pub name: String,

    /// Owning table
    pub table_name: String,

    /// Owning columns
    pub columns: Vec<String>,

    /// Referenced table
    pub ref_table_name: String,

    /// Referenced columns, positionally matching `columns`
    pub ref_columns: Vec<String>,

    pub on_delete: Option<ReferentialAction>,

    pub on_update: Option<ReferentialAction>,
}

/// What the database does to referencing rows when the referenced row is
/// deleted or its key updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
}

impl ReferentialAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::Restrict => "RESTRICT",
            Self::NoAction => "NO ACTION",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
