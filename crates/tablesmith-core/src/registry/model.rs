use super::{Field, FieldType, Identifier, Registry, Relation, RelationType};
use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the identifier every model must declare.
pub const PRIMARY_IDENTIFIER: &str = "primary";

/// A named domain entity: fields, identifiers and relations to other models.
///
/// Maps keep document order, but nothing derived from a model depends on it.
/// The compiler walks fields, identifiers and relations sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub name: String,

    #[serde(default)]
    pub fields: IndexMap<String, Field>,

    #[serde(default)]
    pub identifiers: IndexMap<String, Identifier>,

    /// Relations keyed by the related model's name
    #[serde(default)]
    pub related: IndexMap<String, Relation>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            identifiers: IndexMap::new(),
            related: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<FieldType>) -> Self {
        self.fields.insert(name.into(), Field::new(ty.into()));
        self
    }

    pub fn identifier<I, S>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers.insert(name.into(), Identifier::new(fields));
        self
    }

    pub fn related(mut self, model: impl Into<String>, ty: RelationType) -> Self {
        self.related.insert(model.into(), Relation::new(ty));
        self
    }

    pub fn primary_identifier(&self) -> Option<&Identifier> {
        self.identifiers.get(PRIMARY_IDENTIFIER)
    }

    /// Field names in sorted order.
    pub fn sorted_field_names(&self) -> Vec<&str> {
        sorted_keys(&self.fields)
    }

    /// Related model names in sorted order.
    pub fn sorted_related_names(&self) -> Vec<&str> {
        sorted_keys(&self.related)
    }

    /// Identifier names in sorted order.
    pub fn sorted_identifier_names(&self) -> Vec<&str> {
        sorted_keys(&self.identifiers)
    }

    /// Checks the structural shape of the model.
    ///
    /// Every identifier must be non-empty and reference declared fields, and
    /// every field type must be a primitive or an enum known to `registry`.
    /// A missing `primary` identifier is not checked here; the compiler
    /// reports it with its own error.
    pub fn validate(&self, registry: &Registry) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::invalid_model("", "model name cannot be empty"));
        }

        if self.fields.is_empty() {
            return Err(Error::invalid_model(&self.name, "model has no fields"));
        }

        for name in self.sorted_field_names() {
            if name.is_empty() {
                return Err(Error::invalid_model(&self.name, "field name cannot be empty"));
            }

            if let Some(enum_name) = self.fields[name].ty.as_named() {
                if !registry.contains_enum(enum_name) {
                    return Err(Error::unsupported_field_type(&self.name, name, enum_name));
                }
            }
        }

        for name in self.sorted_identifier_names() {
            let identifier = &self.identifiers[name];

            if identifier.fields.is_empty() {
                return Err(Error::invalid_model(
                    &self.name,
                    format!("identifier `{name}` has no fields"),
                ));
            }

            if let Some(field) = identifier
                .fields
                .iter()
                .find(|field| !self.fields.contains_key(field.as_str()))
            {
                return Err(Error::invalid_model(
                    &self.name,
                    format!("identifier `{name}` references unknown field `{field}`"),
                ));
            }
        }

        Ok(())
    }
}

fn sorted_keys<V>(map: &IndexMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<_> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
