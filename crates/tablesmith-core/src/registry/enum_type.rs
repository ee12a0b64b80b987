use super::FieldType;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named enumerated type. Model fields typed with an enum's name are
/// lowered to an integer foreign key into the enum's backing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,

    /// Type of the entry values
    #[serde(rename = "type")]
    pub ty: FieldType,

    #[serde(default)]
    pub entries: IndexMap<String, serde_json::Value>,
}

impl Enum {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            entries: IndexMap::new(),
        }
    }

    pub fn entry(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }
}
