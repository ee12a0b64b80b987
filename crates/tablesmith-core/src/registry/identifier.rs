use serde::{Deserialize, Serialize};

/// An ordered set of field names that uniquely identifies a row.
///
/// In documents an identifier is either a single field name or a list of
/// field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IdentifierDef", into = "IdentifierDef")]
pub struct Identifier {
    pub fields: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IdentifierDef {
    One(String),
    Many(Vec<String>),
}

impl Identifier {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the field name when the identifier spans exactly one field.
    pub fn single_field(&self) -> Option<&str> {
        match &self.fields[..] {
            [field] => Some(field),
            _ => None,
        }
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }
}

impl From<IdentifierDef> for Identifier {
    fn from(value: IdentifierDef) -> Self {
        match value {
            IdentifierDef::One(field) => Identifier::new([field]),
            IdentifierDef::Many(fields) => Identifier::new(fields),
        }
    }
}

impl From<Identifier> for IdentifierDef {
    fn from(mut value: Identifier) -> Self {
        if value.fields.len() == 1 {
            IdentifierDef::One(value.fields.remove(0))
        } else {
            IdentifierDef::Many(value.fields)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_single_and_list() {
        let one: Identifier = serde_json::from_str(r#""ID""#).unwrap();
        assert_eq!(one.fields, ["ID"]);
        assert_eq!(one.single_field(), Some("ID"));

        let many: Identifier = serde_json::from_str(r#"["FirstName", "LastName"]"#).unwrap();
        assert_eq!(many.fields, ["FirstName", "LastName"]);
        assert_eq!(many.single_field(), None);
    }
}
