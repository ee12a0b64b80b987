mod enum_type;
pub use enum_type::Enum;

mod field;
pub use field::{Field, FieldType};

mod identifier;
pub use identifier::Identifier;

mod load;

mod model;
pub use model::{Model, PRIMARY_IDENTIFIER};

mod relation;
pub use relation::{Relation, RelationType};

use crate::{Error, Result};
use std::collections::BTreeMap;

/// Read-only lookup of the models and enums a compilation runs against.
///
/// Entries are keyed by name; iteration is always in sorted-by-name order so
/// that everything derived from a registry is reproducible.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Registry {
    models: BTreeMap<String, Model>,
    enums: BTreeMap<String, Enum>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model, returning the model it replaced, if any.
    pub fn insert_model(&mut self, model: Model) -> Option<Model> {
        self.models.insert(model.name.clone(), model)
    }

    /// Registers an enum, returning the enum it replaced, if any.
    pub fn insert_enum(&mut self, enum_type: Enum) -> Option<Enum> {
        self.enums.insert(enum_type.name.clone(), enum_type)
    }

    /// Looks up a model by name.
    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::unknown_related_model(name))
    }

    /// Looks up an enum by name.
    pub fn enum_type(&self, name: &str) -> Result<&Enum> {
        self.enums.get(name).ok_or_else(|| Error::unknown_enum(name))
    }

    pub fn contains_enum(&self, name: &str) -> bool {
        self.enums.contains_key(name)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> + '_ {
        self.models.values()
    }

    pub fn enums(&self) -> impl ExactSizeIterator<Item = &Enum> + '_ {
        self.enums.values()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_distinguish_models_from_enums() {
        let mut registry = Registry::new();
        registry.insert_model(
            Model::new("Company")
                .field("ID", FieldType::AutoIncrement)
                .identifier("primary", ["ID"]),
        );
        registry.insert_enum(Enum::new("Nationality", FieldType::String));

        assert!(registry.model("Company").is_ok());
        assert!(registry.enum_type("Nationality").is_ok());

        let err = registry.model("Nationality").unwrap_err();
        assert!(err.is_unknown_related_model());

        let err = registry.enum_type("Company").unwrap_err();
        assert!(err.is_unknown_enum());
    }

    #[test]
    fn models_iterate_sorted_by_name() {
        let mut registry = Registry::new();
        for name in ["Zebra", "Apple", "Mango"] {
            registry.insert_model(Model::new(name));
        }

        let names: Vec<_> = registry.models().map(|model| model.name.as_str()).collect();
        assert_eq!(names, ["Apple", "Mango", "Zebra"]);
    }
}
