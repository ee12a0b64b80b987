use super::{name, typemap::TypeMap};
use crate::{
    registry::{FieldType, Model, Registry, RelationType},
    schema::db::{Column, ForeignKey, ReferentialAction, Type},
    Error, Result,
};

/// A model taking part in a relation, reduced to its single-field primary
/// key.
#[derive(Debug, Clone, Copy)]
pub(super) struct Participant<'a> {
    pub(super) model: &'a Model,

    /// Name of the primary identifier's only field
    pub(super) key: &'a str,

    pub(super) key_ty: &'a FieldType,
}

/// A declared relation whose target has been resolved.
#[derive(Debug)]
pub(super) struct Resolved<'a> {
    pub(super) ty: RelationType,
    pub(super) target: Participant<'a>,
}

impl<'a> Participant<'a> {
    pub(super) fn new(model: &'a Model) -> Result<Self> {
        let primary = model
            .primary_identifier()
            .ok_or_else(|| Error::missing_primary_identifier(&model.name))?;

        let Some(key) = primary.single_field() else {
            return Err(Error::multi_field_primary_unsupported(
                &model.name,
                primary.fields.len(),
            ));
        };

        let field = model
            .fields
            .get(key)
            .ok_or_else(|| Error::missing_related_field(&model.name, key))?;

        Ok(Self {
            model,
            key,
            key_ty: &field.ty,
        })
    }

    pub(super) fn name(&self) -> &'a str {
        &self.model.name
    }

    pub(super) fn table_name(&self) -> String {
        name::table_name(self.name())
    }

    /// Column on this participant's table holding the primary key
    pub(super) fn key_column(&self) -> String {
        name::column_name(self.key)
    }

    /// Column on another table referencing this participant
    pub(super) fn foreign_key_column(&self) -> String {
        name::foreign_key_column_name(self.name(), self.key)
    }

    /// Storage type of a column referencing this participant.
    pub(super) fn foreign_type(&self, types: &TypeMap) -> Result<Type> {
        types.foreign(self.key_ty).ok_or_else(|| {
            Error::unsupported_field_type(self.name(), self.key, self.key_ty.as_str())
        })
    }

    /// Builds a cascading foreign key from `columns` on `table` to this
    /// participant's primary column.
    pub(super) fn reference(&self, schema: &str, table: &str, column: String) -> ForeignKey {
        let columns = vec![column];

        ForeignKey {
            schema: schema.to_string(),
            name: name::foreign_key_name(table, &columns),
            table_name: table.to_string(),
            columns,
            ref_table_name: self.table_name(),
            ref_columns: vec![self.key_column()],
            on_delete: Some(ReferentialAction::Cascade),
            on_update: None,
        }
    }
}

/// Resolves every relation declared on `model`, sorted by related model
/// name.
///
/// Each target must be registered and have a single-field primary
/// identifier whose field exists, whatever the relation's direction.
pub(super) fn resolve<'a>(registry: &'a Registry, model: &Model) -> Result<Vec<Resolved<'a>>> {
    model
        .sorted_related_names()
        .into_iter()
        .map(|related| {
            let target = Participant::new(registry.model(related)?)?;
            Ok(Resolved {
                ty: model.related[related].ty,
                target,
            })
        })
        .collect()
}

/// Lowers a to-one relation to an inline column and its foreign key.
pub(super) fn to_one(
    schema: &str,
    table: &str,
    types: &TypeMap,
    target: &Participant<'_>,
) -> Result<(Column, ForeignKey)> {
    let column_name = target.foreign_key_column();
    let column = Column::new(&column_name, target.foreign_type(types)?).not_null();
    let fk = target.reference(schema, table, column_name);

    Ok((column, fk))
}
