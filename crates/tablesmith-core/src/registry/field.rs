use serde::{Deserialize, Serialize};
use std::fmt;

/// A field declared on a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub ty: FieldType,
}

/// The declared type of a model field.
///
/// Anything that is not one of the primitive names is kept as
/// [`FieldType::Named`] and resolved against the registry's enums at compile
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    UUID,
    AutoIncrement,
    String,
    Integer,
    Float,
    Time,
    Date,
    Boolean,
    Protected,
    Sealed,
    Named(String),
}

impl Field {
    pub fn new(ty: FieldType) -> Self {
        Self { ty }
    }
}

impl FieldType {
    pub fn parse(src: &str) -> Self {
        match src {
            "UUID" => Self::UUID,
            "AutoIncrement" => Self::AutoIncrement,
            "String" => Self::String,
            "Integer" => Self::Integer,
            "Float" => Self::Float,
            "Time" => Self::Time,
            "Date" => Self::Date,
            "Boolean" => Self::Boolean,
            "Protected" => Self::Protected,
            "Sealed" => Self::Sealed,
            other => Self::Named(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::UUID => "UUID",
            Self::AutoIncrement => "AutoIncrement",
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Time => "Time",
            Self::Date => "Date",
            Self::Boolean => "Boolean",
            Self::Protected => "Protected",
            Self::Sealed => "Sealed",
            Self::Named(name) => name,
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, Self::Named(_))
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        FieldType::parse(&value)
    }
}

impl From<&str> for FieldType {
    fn from(value: &str) -> Self {
        FieldType::parse(value)
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Named(name) => name,
            ty => ty.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
